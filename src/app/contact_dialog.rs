use chrono::Utc;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::{
    submit_lead, Budget, ContactIntent, Field, LeadForm, LeadPayload, SubmissionStatus, Timeline,
};
use crate::mailer::{EmailJsMailer, MailConfig, MailError};

const FAQ: [(&str, &str); 3] = [
    (
        "What deliverables are included?",
        "Deliverables include platform-ready UGC assets, captions, and usage guidelines tailored to your brief.",
    ),
    (
        "How soon can we start?",
        "Most collaborations begin within 2 weeks after approvals and alignment on creative direction.",
    ),
    (
        "Do you provide usage rights?",
        "Usage rights are available for paid and organic placements based on campaign scope.",
    ),
];

/// Lead-capture dialog. The form lives only while the dialog is open; closing
/// it (for any reason) discards the values and resets the submission status.
#[component]
pub fn ContactDialog(open: RwSignal<bool>, intent: ReadSignal<ContactIntent>) -> impl IntoView {
    let form = RwSignal::new(LeadForm::default());
    let (status, set_status) = signal(SubmissionStatus::Idle);
    let (tab, set_tab) = signal(ContactIntent::Collaboration);
    let (success_open, set_success_open) = signal(false);

    // Opening pre-selects the requested tab and clears stale status; closing
    // discards the form so nothing leaks into the next session.
    Effect::new(move |_| {
        if open.get() {
            set_tab.set(intent.get_untracked());
            set_status.set(SubmissionStatus::Idle);
            set_success_open.set(false);
        } else {
            form.set(LeadForm::default());
            set_status.set(SubmissionStatus::Idle);
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if !current.is_valid() || status.get_untracked() == SubmissionStatus::Submitting {
            return;
        }
        set_status.set(SubmissionStatus::Submitting);
        let payload = LeadPayload::new(&current, tab.get_untracked(), Utc::now());
        spawn_local(async move {
            let result = match MailConfig::from_build_env() {
                Some(config) => {
                    let mailer = EmailJsMailer::new(config);
                    submit_lead(&mailer, &config, &payload).await
                }
                None => Err(MailError::NotConfigured),
            };
            match result {
                Ok(()) => {
                    set_status.set(SubmissionStatus::Success);
                    set_success_open.set(true);
                    open.set(false);
                }
                Err(err) => {
                    log::error!("lead submission failed: {err}");
                    set_status.set(SubmissionStatus::Error);
                }
            }
        });
    };

    let field_error = move |field: Field| form.with(|f| f.field_error(field));
    let error_note = move |field: Field| {
        field_error(field).map(|msg| view! { <p class="text-xs text-red-300">{msg}</p> })
    };

    view! {
        {move || {
            open.get()
                .then(|| {
                    view! {
                        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                            <div
                                class="absolute inset-0 bg-black/70"
                                on:click=move |_| open.set(false)
                            />
                            <div class="relative w-full max-w-3xl max-h-[90vh] overflow-y-auto rounded-2xl bg-coal border border-gold/30 p-8 space-y-6">
                                <div class="space-y-3">
                                    <h2 class="text-2xl font-bold text-white">
                                        {move || {
                                            if tab.get() == ContactIntent::MediaKit {
                                                "Request the Media Kit"
                                            } else {
                                                "Start a Collaboration"
                                            }
                                        }}
                                    </h2>
                                    <p class="text-gray-400">
                                        {move || {
                                            if tab.get() == ContactIntent::MediaKit {
                                                "Receive the latest media kit with analytics, rates, and recent case studies."
                                            } else {
                                                "Share a few details so we can respond with a tailored collaboration plan."
                                            }
                                        }}
                                    </p>
                                </div>

                                // Tab strip; switching tabs never clears field values.
                                <div class="flex gap-2 rounded-full bg-ink border border-gold/20 p-1 w-fit">
                                    {ContactIntent::ALL
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <button
                                                    type="button"
                                                    class=move || {
                                                        if tab.get() == item {
                                                            "px-4 py-2 rounded-full bg-gold text-ink text-sm font-semibold"
                                                        } else {
                                                            "px-4 py-2 rounded-full text-gray-300 text-sm hover:text-gold"
                                                        }
                                                    }
                                                    on:click=move |_| set_tab.set(item)
                                                >
                                                    {item.label()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>

                                <form class="space-y-5" on:submit=on_submit>
                                    {move || {
                                        (status.get() == SubmissionStatus::Error)
                                            .then(|| {
                                                view! {
                                                    <div class="flex items-center gap-3 rounded-2xl border border-red-500/40 bg-ink px-4 py-3 text-sm text-red-200">
                                                        "Submission failed. Please double-check the email address and try again."
                                                    </div>
                                                }
                                            })
                                    }}
                                    <div class="grid md:grid-cols-2 gap-4">
                                        <div class="space-y-2">
                                            <label class="text-sm text-gray-300">"Full name"</label>
                                            <input
                                                class="w-full rounded-md bg-ink border border-gold/20 px-3 py-2 text-white focus:outline-none focus:ring-2 focus:ring-gold/40"
                                                placeholder="Your name"
                                                prop:value=move || form.with(|f| f.name.clone())
                                                on:input=move |ev| {
                                                    form.update(|f| f.name = event_target_value(&ev))
                                                }
                                            />
                                            {move || error_note(Field::Name)}
                                        </div>
                                        <div class="space-y-2">
                                            <label class="text-sm text-gray-300">"Work email"</label>
                                            <input
                                                class="w-full rounded-md bg-ink border border-gold/20 px-3 py-2 text-white focus:outline-none focus:ring-2 focus:ring-gold/40"
                                                placeholder="name@brand.com"
                                                prop:value=move || form.with(|f| f.email.clone())
                                                on:input=move |ev| {
                                                    form.update(|f| f.email = event_target_value(&ev))
                                                }
                                            />
                                            {move || error_note(Field::Email)}
                                        </div>
                                    </div>
                                    <div class="grid md:grid-cols-2 gap-4">
                                        <div class="space-y-2">
                                            <label class="text-sm text-gray-300">"Brand or agency"</label>
                                            <input
                                                class="w-full rounded-md bg-ink border border-gold/20 px-3 py-2 text-white focus:outline-none focus:ring-2 focus:ring-gold/40"
                                                placeholder="Brand name"
                                                prop:value=move || form.with(|f| f.brand.clone())
                                                on:input=move |ev| {
                                                    form.update(|f| f.brand = event_target_value(&ev))
                                                }
                                            />
                                            {move || error_note(Field::Brand)}
                                        </div>
                                        <div class="space-y-2">
                                            <label class="text-sm text-gray-300">"Budget range"</label>
                                            <select
                                                class="w-full rounded-md bg-ink border border-gold/20 px-3 py-2 text-white"
                                                on:change=move |ev| {
                                                    form.update(|f| {
                                                        f.budget = Budget::from_value(&event_target_value(&ev))
                                                    })
                                                }
                                            >
                                                <option value="">"Select budget"</option>
                                                {Budget::ALL
                                                    .into_iter()
                                                    .map(|b| {
                                                        view! { <option value=b.value()>{b.label()}</option> }
                                                    })
                                                    .collect_view()}
                                            </select>
                                            {move || error_note(Field::Budget)}
                                        </div>
                                    </div>
                                    <div class="grid md:grid-cols-2 gap-4">
                                        <div class="space-y-2">
                                            <label class="text-sm text-gray-300">"Timeline"</label>
                                            <select
                                                class="w-full rounded-md bg-ink border border-gold/20 px-3 py-2 text-white"
                                                on:change=move |ev| {
                                                    form.update(|f| {
                                                        f.timeline = Timeline::from_value(&event_target_value(&ev))
                                                    })
                                                }
                                            >
                                                <option value="">"Select timeline"</option>
                                                {Timeline::ALL
                                                    .into_iter()
                                                    .map(|t| {
                                                        view! { <option value=t.value()>{t.label()}</option> }
                                                    })
                                                    .collect_view()}
                                            </select>
                                            {move || error_note(Field::Timeline)}
                                        </div>
                                        <div class="space-y-2">
                                            <p class="text-sm text-gray-300">"Response time"</p>
                                            <div class="rounded-xl border border-gold/20 bg-ink px-4 py-3 text-sm text-gray-400">
                                                "Average response time is within 24 hours. Priority is given to fully scoped briefs with timelines."
                                            </div>
                                        </div>
                                    </div>
                                    <div class="space-y-2">
                                        <label class="text-sm text-gray-300">"Project details"</label>
                                        <textarea
                                            class="w-full min-h-[120px] rounded-md bg-ink border border-gold/20 px-3 py-2 text-white focus:outline-none focus:ring-2 focus:ring-gold/40"
                                            placeholder="Goals, deliverables, platforms, and anything else that helps."
                                            prop:value=move || form.with(|f| f.message.clone())
                                            on:input=move |ev| {
                                                form.update(|f| f.message = event_target_value(&ev))
                                            }
                                        />
                                        {move || error_note(Field::Message)}
                                    </div>
                                    <div class="flex items-center justify-end gap-4">
                                        <button
                                            type="button"
                                            class="px-6 py-3 text-sm text-gray-400 hover:text-white transition-colors"
                                            on:click=move |_| open.set(false)
                                        >
                                            "Cancel"
                                        </button>
                                        <button
                                            type="submit"
                                            disabled=move || {
                                                !form.with(|f| f.is_valid())
                                                    || status.get() == SubmissionStatus::Submitting
                                            }
                                            class="px-8 py-3 bg-gradient-to-r from-gold to-champagne text-ink font-semibold rounded-full disabled:opacity-60 disabled:cursor-not-allowed"
                                        >
                                            {move || {
                                                if status.get() == SubmissionStatus::Submitting {
                                                    "Submitting..."
                                                } else {
                                                    "Submit request"
                                                }
                                            }}
                                        </button>
                                    </div>
                                </form>

                                <div class="border-t border-gold/20 pt-6 space-y-2">
                                    {FAQ
                                        .into_iter()
                                        .map(|(question, answer)| {
                                            view! {
                                                <details class="group text-sm text-gray-300">
                                                    <summary class="cursor-pointer text-white py-2">
                                                        {question}
                                                    </summary>
                                                    <p class="pb-2 text-gray-400">{answer}</p>
                                                </details>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
        {move || {
            success_open
                .get()
                .then(|| {
                    view! {
                        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                            <div class="absolute inset-0 bg-black/70" />
                            <div class="relative w-full max-w-md rounded-2xl bg-coal border border-gold/30 p-8 space-y-4">
                                <h2 class="text-2xl font-bold text-white">"Request sent"</h2>
                                <p class="text-gray-400">
                                    "Thanks! Your request has been submitted successfully. A confirmation email has been sent to your inbox."
                                </p>
                                <div class="pt-2 flex justify-end">
                                    <button
                                        class="px-8 py-3 bg-gradient-to-r from-gold to-champagne text-ink font-semibold rounded-full"
                                        on:click=move |_| set_success_open.set(false)
                                    >
                                        "Done"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
