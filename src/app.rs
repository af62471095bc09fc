mod contact_dialog;
mod portfolio_dialog;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::contact::ContactIntent;
use contact_dialog::ContactDialog;
use portfolio_dialog::PortfolioDialog;
use sections::{
    AboutSection, BrandPartners, CollaborationSection, Footer, HeroSection, Navigation,
    PortfolioSection, ValueProposition,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/creator-site.css" />
                <MetaTags />
            </head>
            <body class="bg-ink text-white font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Rachna Panday - {title}") />

        <Router>
            <main class="min-h-screen bg-ink overflow-x-hidden">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// The one page of the site. Owns which dialog is open and with what contact
/// intent, and hands the open actions down to every presentational section.
#[component]
fn HomePage() -> impl IntoView {
    let contact_open = RwSignal::new(false);
    let portfolio_open = RwSignal::new(false);
    let contact_intent = RwSignal::new(ContactIntent::Collaboration);

    let open_contact = Callback::new(move |intent: ContactIntent| {
        contact_intent.set(intent);
        contact_open.set(true);
    });
    let open_portfolio = Callback::new(move |_: ()| {
        portfolio_open.set(true);
    });

    view! {
        <Title text="Creator & Brand Storyteller" />
        <Navigation />
        <HeroSection on_contact=open_contact />
        <AboutSection />
        <PortfolioSection on_view_portfolio=open_portfolio />
        <ValueProposition />
        <BrandPartners />
        <CollaborationSection on_contact=open_contact />
        <Footer on_contact=open_contact />
        <ContactDialog open=contact_open intent=contact_intent.read_only() />
        <PortfolioDialog open=portfolio_open on_request_collaboration=open_contact />
    }
}
