use std::time::Duration;

use leptos::prelude::*;

use crate::catalog::{
    synthetic_failure, Campaign, CatalogBrowser, Category, ContentType, LoadGeneration, SortKey,
    CAMPAIGNS, LOAD_DELAY_MS,
};
use crate::contact::ContactIntent;

const REQUEST_FOCUS: [&str; 4] = [
    "UGC Ads",
    "Brand Storytelling",
    "Product Launch",
    "Lifestyle Content",
];

/// Portfolio browsing dialog: filters, sorting, pagination, and a simulated
/// fetch with a deterministic failure trigger. All view state resets when the
/// dialog closes.
#[component]
pub fn PortfolioDialog(
    open: RwSignal<bool>,
    #[prop(into)] on_request_collaboration: Callback<ContactIntent>,
) -> impl IntoView {
    let browser = RwSignal::new(CatalogBrowser::new());
    let (is_loading, set_is_loading) = signal(false);
    let (load_error, set_load_error) = signal(None::<&'static str>);
    let generation = StoredValue::new(LoadGeneration::default());
    let pending = StoredValue::new(None::<TimeoutHandle>);

    // One load cycle per parameter change: cancel whatever is in flight, take
    // a fresh generation token, and let the timer apply its outcome only if
    // that token is still current when it fires.
    let start_cycle = move |search: String| {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        let token = generation
            .try_update_value(|g| g.begin())
            .unwrap_or_default();
        set_is_loading.set(true);
        let scheduled = set_timeout_with_handle(
            move || {
                if !generation.with_value(|g| g.is_current(token)) {
                    return;
                }
                pending.set_value(None);
                set_is_loading.set(false);
                set_load_error.set(synthetic_failure(&search));
            },
            Duration::from_millis(LOAD_DELAY_MS),
        );
        match scheduled {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(_) => set_is_loading.set(false),
        }
    };

    // The load cycle is keyed on everything except the page number; paging
    // through results must not refetch.
    let load_key = Memo::new(move |_| {
        browser.with(|b| {
            (
                b.view.search.clone(),
                b.view.category,
                b.view.tab,
                b.view.featured_only,
                b.view.sort,
            )
        })
    });

    Effect::new(move |_| {
        let (search, ..) = load_key.get();
        if !open.get() {
            if let Some(handle) = pending.get_value() {
                handle.clear();
                pending.set_value(None);
            }
            // Invalidate any cycle that already fired its timer.
            generation.update_value(|g| {
                g.begin();
            });
            browser.update(|b| b.reset());
            set_is_loading.set(false);
            set_load_error.set(None);
            return;
        }
        start_cycle(search);
    });

    let page_view = Memo::new(move |_| browser.with(|b| b.visible()));

    let total = CAMPAIGNS.len();
    let featured = CAMPAIGNS.iter().filter(|c| c.featured).count();
    let avg_engagement = {
        let sum: f64 = CAMPAIGNS.iter().map(|c| c.engagement).sum();
        format!("{:.1}%", sum / CAMPAIGNS.len() as f64)
    };

    view! {
        {move || {
            open.get()
                .then(|| {
                    let avg_engagement = avg_engagement.clone();
                    view! {
                        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                            <div
                                class="absolute inset-0 bg-black/70"
                                on:click=move |_| open.set(false)
                            />
                            <div class="relative w-full max-w-5xl max-h-[90vh] overflow-y-auto rounded-2xl bg-coal border border-gold/30 p-8 space-y-6">
                                <div class="space-y-3">
                                    <h2 class="text-2xl font-bold text-white">"Full Portfolio"</h2>
                                    <p class="text-gray-400">
                                        "Explore real campaign highlights with filters, sorting, and quick actions."
                                    </p>
                                </div>

                                <div class="grid lg:grid-cols-[1.2fr_0.8fr] gap-6">
                                    <div class="space-y-5">
                                        <div class="flex flex-col sm:flex-row gap-4 sm:items-center sm:justify-between">
                                            <input
                                                class="flex-1 rounded-md bg-ink border border-gold/20 px-3 py-2 text-white focus:outline-none focus:ring-2 focus:ring-gold/40"
                                                placeholder="Search campaigns..."
                                                prop:value=move || browser.with(|b| b.view.search.clone())
                                                on:input=move |ev| {
                                                    browser.update(|b| b.set_search(event_target_value(&ev)))
                                                }
                                            />
                                            <select
                                                class="rounded-md bg-ink border border-gold/20 px-3 py-2 text-white w-[160px]"
                                                on:change=move |ev| {
                                                    let sort = if event_target_value(&ev) == "title" {
                                                        SortKey::Title
                                                    } else {
                                                        SortKey::Engagement
                                                    };
                                                    browser.update(|b| b.set_sort(sort));
                                                }
                                            >
                                                <option value="engagement">"Engagement"</option>
                                                <option value="title">"Campaign name"</option>
                                            </select>
                                        </div>

                                        <div class="flex gap-2 rounded-full bg-ink border border-gold/20 p-1 w-fit">
                                            <TabButton browser label="All" tab=None />
                                            {ContentType::ALL
                                                .into_iter()
                                                .map(|kind| {
                                                    view! {
                                                        <TabButton browser label=kind.label() tab=Some(kind) />
                                                    }
                                                })
                                                .collect_view()}
                                        </div>

                                        <div class="flex flex-col sm:flex-row items-start sm:items-center justify-between gap-4">
                                            <select
                                                class="rounded-md bg-ink border border-gold/20 px-3 py-2 text-white w-full sm:w-[220px]"
                                                on:change=move |ev| {
                                                    let category = Category::from_label(&event_target_value(&ev));
                                                    browser.update(|b| b.set_category(category));
                                                }
                                            >
                                                <option value="all">"All categories"</option>
                                                {Category::ALL
                                                    .into_iter()
                                                    .map(|c| {
                                                        view! { <option value=c.label()>{c.label()}</option> }
                                                    })
                                                    .collect_view()}
                                            </select>
                                            <label class="flex items-center gap-3 rounded-full border border-gold/20 bg-ink px-4 py-2 text-sm text-gray-300">
                                                <span>"Featured only"</span>
                                                <input
                                                    type="checkbox"
                                                    class="accent-gold"
                                                    prop:checked=move || browser.with(|b| b.view.featured_only)
                                                    on:change=move |ev| {
                                                        browser.update(|b| b.set_featured_only(event_target_checked(&ev)))
                                                    }
                                                />
                                            </label>
                                        </div>

                                        <div class="rounded-2xl border border-gold/20 bg-ink p-5">
                                            {move || {
                                                load_error
                                                    .get()
                                                    .map(|message| {
                                                        view! {
                                                            <div class="flex items-center gap-3 rounded-xl border border-red-500/40 bg-coal px-4 py-3 text-sm text-red-200">
                                                                {message}
                                                            </div>
                                                        }
                                                    })
                                            }}
                                            {move || {
                                                (is_loading.get() && load_error.get().is_none())
                                                    .then(|| {
                                                        view! {
                                                            <div class="flex items-center gap-3 rounded-xl border border-gold/20 bg-coal px-4 py-3 text-sm text-gray-300">
                                                                "Loading campaigns..."
                                                            </div>
                                                        }
                                                    })
                                            }}
                                            {move || {
                                                let page = page_view.get();
                                                (!is_loading.get() && load_error.get().is_none()
                                                    && page.items.is_empty())
                                                    .then(|| {
                                                        view! {
                                                            <div class="rounded-xl border border-gold/20 bg-coal px-4 py-8 text-center text-sm text-gray-300">
                                                                "No campaigns match these filters. Try adjusting the search or category."
                                                            </div>
                                                        }
                                                    })
                                            }}
                                            {move || {
                                                let page = page_view.get();
                                                (!is_loading.get() && load_error.get().is_none()
                                                    && !page.items.is_empty())
                                                    .then(|| {
                                                        view! {
                                                            <div class="grid md:grid-cols-2 gap-4">
                                                                {page
                                                                    .items
                                                                    .into_iter()
                                                                    .map(|campaign| {
                                                                        view! {
                                                                            <CampaignCard campaign on_request_collaboration />
                                                                        }
                                                                    })
                                                                    .collect_view()}
                                                            </div>
                                                        }
                                                    })
                                            }}
                                        </div>

                                        <div class="flex items-center justify-between">
                                            <button
                                                type="button"
                                                disabled=move || page_view.with(|p| p.page == 1)
                                                class="px-4 py-2 rounded-full border border-gold/40 text-gold disabled:opacity-40 disabled:cursor-not-allowed"
                                                on:click=move |_| browser.update(|b| b.prev_page())
                                            >
                                                "Prev"
                                            </button>
                                            <span class="text-sm text-gray-400">
                                                {move || {
                                                    page_view
                                                        .with(|p| format!("Page {} of {}", p.page, p.total_pages))
                                                }}
                                            </span>
                                            <button
                                                type="button"
                                                disabled=move || page_view.with(|p| p.page == p.total_pages)
                                                class="px-4 py-2 rounded-full border border-gold/40 text-gold disabled:opacity-40 disabled:cursor-not-allowed"
                                                on:click=move |_| browser.update(|b| b.next_page())
                                            >
                                                "Next"
                                            </button>
                                        </div>
                                    </div>

                                    <div class="space-y-5">
                                        <div class="rounded-2xl border border-gold/20 bg-ink p-6 space-y-4">
                                            <p class="text-sm text-gray-400 uppercase tracking-widest">
                                                "Quick stats"
                                            </p>
                                            <div class="space-y-3 text-sm text-gray-300">
                                                <div class="flex items-center justify-between">
                                                    <span>"Total campaigns"</span>
                                                    <span class="text-champagne font-semibold">{total}</span>
                                                </div>
                                                <div class="flex items-center justify-between">
                                                    <span>"Featured work"</span>
                                                    <span class="text-champagne font-semibold">{featured}</span>
                                                </div>
                                                <div class="flex items-center justify-between">
                                                    <span>"Avg engagement"</span>
                                                    <span class="text-champagne font-semibold">
                                                        {avg_engagement}
                                                    </span>
                                                </div>
                                            </div>
                                        </div>
                                        <div class="rounded-2xl border border-gold/20 bg-ink p-6 space-y-4">
                                            <p class="text-sm text-gray-400 uppercase tracking-widest">
                                                "Request focus"
                                            </p>
                                            <div class="grid gap-3">
                                                {REQUEST_FOCUS
                                                    .into_iter()
                                                    .map(|focus| {
                                                        view! {
                                                            <button
                                                                type="button"
                                                                class="w-full text-left px-4 py-3 rounded-xl border border-gold/20 bg-coal text-sm text-gray-300 hover:border-gold/60 hover:text-white transition-colors"
                                                                on:click=move |_| {
                                                                    on_request_collaboration.run(ContactIntent::Collaboration)
                                                                }
                                                            >
                                                                {focus}
                                                            </button>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn TabButton(
    browser: RwSignal<CatalogBrowser>,
    label: &'static str,
    tab: Option<ContentType>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                if browser.with(|b| b.view.tab) == tab {
                    "px-4 py-2 rounded-full bg-gold text-ink text-sm font-semibold"
                } else {
                    "px-4 py-2 rounded-full text-gray-300 text-sm hover:text-gold"
                }
            }
            on:click=move |_| browser.update(|b| b.set_tab(tab))
        >
            {label}
        </button>
    }
}

#[component]
fn CampaignCard(
    campaign: &'static Campaign,
    on_request_collaboration: Callback<ContactIntent>,
) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-gold/20 bg-coal p-4 space-y-3">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-white font-semibold">{campaign.title}</p>
                    <p class="text-xs text-gray-400">{campaign.category.label()}</p>
                </div>
                <button
                    type="button"
                    class="px-3 py-1 rounded-full border border-gold/20 text-gold text-xs hover:bg-gold hover:text-ink transition-colors"
                    on:click=move |_| on_request_collaboration.run(ContactIntent::Collaboration)
                >
                    "Start similar"
                </button>
            </div>
            <div class="flex items-center justify-between text-sm text-gray-300">
                <span>{campaign.kind.label()}</span>
                <span class="text-champagne">{format!("{}% engagement", campaign.engagement)}</span>
            </div>
            <div class="rounded-lg border border-gold/20 bg-ink px-3 py-2 text-xs text-gray-300">
                {campaign.result}
            </div>
        </div>
    }
}
