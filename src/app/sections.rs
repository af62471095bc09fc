use leptos::prelude::*;

use crate::catalog::Category;
use crate::contact::ContactIntent;

#[component]
pub fn Navigation() -> impl IntoView {
    let links = [
        ("#about", "About"),
        ("#portfolio", "Portfolio"),
        ("#partners", "Partners"),
        ("#collaborate", "Collaborate"),
    ];
    view! {
        <nav class="fixed top-0 inset-x-0 z-40 bg-ink/80 backdrop-blur border-b border-gold/20">
            <div class="container mx-auto px-6 lg:px-12 py-4 flex items-center justify-between">
                <a href="#top" class="text-xl font-bold tracking-wide text-gold">
                    "Rachna Panday"
                </a>
                <div class="hidden md:flex items-center gap-8 text-sm text-gray-300">
                    {links
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href class="hover:text-gold transition-colors">
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn HeroSection(#[prop(into)] on_contact: Callback<ContactIntent>) -> impl IntoView {
    let brand_logos = ["Sephora", "TCL", "Costco", "Nutribullet", "L'Oréal", "SHEIN"];
    view! {
        <section id="top" class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-ink via-coal to-ink" />
            <div class="relative z-10 container mx-auto px-6 lg:px-12 py-20 lg:pt-28">
                <div class="max-w-3xl space-y-8">
                    <h1 class="text-5xl md:text-6xl lg:text-7xl font-bold leading-tight">
                        <span class="bg-gradient-to-r from-gold via-champagne to-gold bg-clip-text text-transparent">
                            "Authentic Storytelling"
                        </span>
                        <br />
                        <span class="text-white">"That Turns Attention Into Action"</span>
                    </h1>
                    <div class="h-1 w-24 bg-gradient-to-r from-gold to-transparent" />
                    <p class="text-lg md:text-xl text-gray-300 max-w-xl">
                        "UGC creator and lifestyle storyteller helping brands build trust, drive engagement, and convert audiences into loyal customers."
                    </p>
                    <button
                        class="px-8 py-4 bg-gradient-to-r from-gold to-champagne text-ink font-semibold rounded-full hover:opacity-90 transition-opacity"
                        on:click=move |_| on_contact.run(ContactIntent::Collaboration)
                    >
                        "Let's Collaborate"
                    </button>
                    <div class="pt-8 flex flex-wrap items-center gap-6 text-sm uppercase tracking-widest text-gray-500">
                        {brand_logos
                            .into_iter()
                            .map(|name| view! { <span>{name}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let stats = [
        ("300K+", "Engaged Followers"),
        ("1000+", "Brand Partnerships"),
        ("High", "Engagement Rate"),
    ];
    view! {
        <section id="about" class="relative py-24 md:py-32 overflow-hidden">
            <div class="container mx-auto px-6 lg:px-12 grid lg:grid-cols-2 gap-16 items-center">
                <div class="space-y-8">
                    <div class="inline-block">
                        <p class="text-sm text-gold uppercase tracking-[0.3em] font-semibold">
                            "About the Creator"
                        </p>
                        <div class="h-px w-full bg-gradient-to-r from-gold to-transparent mt-2" />
                    </div>
                    <h2 class="text-4xl md:text-5xl font-bold">
                        <span class="bg-gradient-to-r from-gold to-champagne bg-clip-text text-transparent">
                            "Meet Rachna"
                        </span>
                    </h2>
                    <div class="space-y-6 text-gray-300 text-lg leading-relaxed">
                        <p>
                            "I create "
                            <span class="text-gold font-semibold">
                                "authentic, high-impact content"
                            </span>
                            " that helps brands build trust, drive engagement, and convert audiences into loyal customers."
                        </p>
                        <p>
                            "From skincare launches to smart-home bundles, every campaign is grounded in real storytelling and measured against real results."
                        </p>
                    </div>
                </div>
                <div class="grid grid-cols-3 gap-6">
                    {stats
                        .into_iter()
                        .map(|(number, label)| {
                            view! {
                                <div class="rounded-2xl border border-gold/20 bg-coal p-6 text-center space-y-2">
                                    <p class="text-3xl font-bold bg-gradient-to-r from-gold to-champagne bg-clip-text text-transparent">
                                        {number}
                                    </p>
                                    <p class="text-sm text-gray-400">{label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn PortfolioSection(#[prop(into)] on_view_portfolio: Callback<()>) -> impl IntoView {
    let niche_blurb = |category: Category| match category {
        Category::TechGadgets => "Smart devices, electronics, and innovative tech solutions",
        Category::FoodBeverage => "Culinary delights, beverages, and gourmet experiences",
        Category::LifestyleHome => "Interior design, home essentials, and living spaces",
        Category::WellnessBeauty => "Skincare, cosmetics, and self-care products",
        Category::FamilyKids => "Parenting, toys, education, and family lifestyle",
        Category::FashionOutdoors => "Apparel, accessories, and outdoor adventures",
    };
    view! {
        <section id="portfolio" class="relative py-24 md:py-32 overflow-hidden bg-coal/40">
            <div class="container mx-auto px-6 lg:px-12">
                <div class="text-center max-w-3xl mx-auto mb-16 space-y-6">
                    <p class="text-sm text-gold uppercase tracking-[0.3em] font-semibold">
                        "Content Niches"
                    </p>
                    <h2 class="text-4xl md:text-5xl font-bold text-white">"Portfolio"</h2>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                    {Category::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <div class="rounded-2xl border border-gold/20 bg-ink p-6 space-y-3 hover:border-gold/60 transition-colors">
                                    <h3 class="text-lg font-semibold text-white">
                                        {category.label()}
                                    </h3>
                                    <p class="text-sm text-gray-400">{niche_blurb(category)}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center">
                    <button
                        class="px-8 py-4 border border-gold/60 text-gold rounded-full hover:bg-gold hover:text-ink transition-colors font-semibold"
                        on:click=move |_| on_view_portfolio.run(())
                    >
                        "View Full Portfolio"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ValueProposition() -> impl IntoView {
    let values = [
        (
            "Authentic Influence",
            "Building genuine connections that resonate with audiences and create lasting brand loyalty",
        ),
        (
            "UGC Expertise",
            "Professional content creation that captures attention and tells compelling brand stories",
        ),
        (
            "Diverse Reach",
            "Access to 300K+ engaged followers across multiple demographics and interest groups",
        ),
        (
            "Proven ROI",
            "Campaigns designed to drive traffic, buzz, and real, measurable results for your brand",
        ),
    ];
    view! {
        <section class="relative py-24 md:py-32 overflow-hidden">
            <div class="container mx-auto px-6 lg:px-12">
                <div class="text-center max-w-3xl mx-auto mb-20 space-y-6">
                    <p class="text-sm text-gold uppercase tracking-[0.3em] font-semibold">
                        "Partnership Benefits"
                    </p>
                    <h2 class="text-4xl md:text-5xl font-bold text-white">"Why Work With Me"</h2>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {values
                        .into_iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="rounded-2xl border border-gold/20 bg-coal p-6 space-y-3">
                                    <h3 class="text-lg font-semibold text-gold">{title}</h3>
                                    <p class="text-sm text-gray-400">{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn BrandPartners() -> impl IntoView {
    let brand_categories = [
        ("Fashion & Lifestyle", ["SHEIN", "Fabletics", "Halara", "Zara", "H&M"]),
        ("Beauty & Wellness", ["Sephora", "L'Oréal", "Kiehl's", "CeraVe", "Glossier"]),
        ("Tech & Home", ["TCL", "Nutribullet", "Costco", "Samsung", "Philips"]),
        (
            "Food & Beverage",
            ["Mionetto", "Ghost Hill Vodka", "Nestlé", "Coca-Cola", "Starbucks"],
        ),
    ];
    view! {
        <section id="partners" class="relative py-24 md:py-32 overflow-hidden bg-coal/40">
            <div class="container mx-auto px-6 lg:px-12">
                <div class="text-center max-w-3xl mx-auto mb-16 space-y-6">
                    <p class="text-sm text-gold uppercase tracking-[0.3em] font-semibold">
                        "Trusted Partnerships"
                    </p>
                    <h2 class="text-4xl md:text-5xl font-bold">
                        <span class="bg-gradient-to-r from-gold to-champagne bg-clip-text text-transparent">
                            "Brand Partners"
                        </span>
                    </h2>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {brand_categories
                        .into_iter()
                        .map(|(category, brands)| {
                            view! {
                                <div class="rounded-2xl border border-gold/20 bg-ink p-6 space-y-4">
                                    <h3 class="text-sm uppercase tracking-widest text-gray-400">
                                        {category}
                                    </h3>
                                    <ul class="space-y-2 text-gray-300">
                                        {brands
                                            .into_iter()
                                            .map(|brand| view! { <li>{brand}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CollaborationSection(#[prop(into)] on_contact: Callback<ContactIntent>) -> impl IntoView {
    let formats = [
        ("High-Energy Reels", "🎬"),
        ("Aesthetic Feed Posts", "📸"),
        ("Interactive Stories", "✨"),
        ("Giveaways", "🎁"),
        ("UGC Ads", "🎯"),
    ];
    view! {
        <section id="collaborate" class="relative py-24 md:py-32 overflow-hidden">
            <div class="container mx-auto px-6 lg:px-12">
                <div class="text-center max-w-3xl mx-auto mb-16 space-y-6">
                    <p class="text-sm text-gold uppercase tracking-[0.3em] font-semibold">
                        "Services Offered"
                    </p>
                    <h2 class="text-4xl md:text-5xl font-bold">
                        <span class="text-white">"Collaboration "</span>
                        <span class="bg-gradient-to-r from-gold to-champagne bg-clip-text text-transparent">
                            "Formats"
                        </span>
                    </h2>
                    <p class="text-lg text-gray-400">
                        "Flexible content solutions tailored to your brand's unique needs and goals"
                    </p>
                </div>
                <div class="flex flex-wrap justify-center items-center gap-4 md:gap-6 max-w-4xl mx-auto mb-16">
                    {formats
                        .into_iter()
                        .map(|(name, emoji)| {
                            view! {
                                <div class="rounded-full border border-gold/30 bg-coal px-6 py-3 text-gray-200">
                                    <span class="mr-2">{emoji}</span>
                                    {name}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center">
                    <button
                        class="px-8 py-4 bg-gradient-to-r from-gold to-champagne text-ink font-semibold rounded-full hover:opacity-90 transition-opacity"
                        on:click=move |_| on_contact.run(ContactIntent::Collaboration)
                    >
                        "Start a Collaboration"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(#[prop(into)] on_contact: Callback<ContactIntent>) -> impl IntoView {
    view! {
        <footer class="border-t border-gold/20 bg-ink py-12">
            <div class="container mx-auto px-6 lg:px-12 flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="space-y-2 text-center md:text-left">
                    <p class="text-lg font-semibold text-gold">"Rachna Panday"</p>
                    <p class="text-sm text-gray-500">
                        "UGC creator & brand storyteller · built " {env!("BUILD_TIME")}
                    </p>
                </div>
                <div class="flex items-center gap-4">
                    <a
                        href="https://instagram.com/rachna.panday"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-300 hover:text-gold transition-colors"
                        aria-label="Instagram"
                    >
                        "Instagram"
                    </a>
                    <button
                        class="px-5 py-2 border border-gold/50 text-gold rounded-full hover:bg-gold hover:text-ink transition-colors text-sm"
                        on:click=move |_| on_contact.run(ContactIntent::MediaKit)
                    >
                        "Request Media Kit"
                    </button>
                </div>
            </div>
        </footer>
    }
}
