use leptos::{ev, prelude::*};

use super::visibility::Reveal;
use crate::config::SiteConfig;
use crate::contact::{
    ContactError, ContactFields, ContactForm, Field, Notice, NoticeKind, NoticeSlot, SubmitMode,
    NOTICE_TIMEOUT,
};
use crate::content::PROFILE;
use crate::nav::Section;
use crate::visibility::Motion;

const INPUT_CLASS: &str = "w-full rounded-md px-3 py-2 bg-[#0d1117] border border-[#30363d] text-white focus:outline-none focus:border-[#1f6feb] focus:ring-1 focus:ring-[#1f6feb]";

#[component]
pub fn Contact() -> impl IntoView {
    let mode = contact_mode();
    let form = RwSignal::new(ContactForm::new());
    let notices = RwSignal::new(NoticeSlot::default());
    let show_notice = move |notice: Notice| {
        let Some(id) = notices.try_update(|slot| slot.show(notice)) else {
            return;
        };
        set_timeout(
            move || {
                notices.try_update(|slot| slot.expire(id));
            },
            NOTICE_TIMEOUT,
        );
    };

    let value_of = move |field: Field| move || form.with(|f| f.fields().get(field).to_string());
    let set_from_input =
        move |field: Field| move |ev: ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev)));
    let submitting = move || form.with(|f| f.is_submitting());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let submission = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(s)) => s,
            Some(Err(ContactError::AlreadySubmitting)) | None => return,
            Some(Err(e)) => {
                log::warn!("contact form rejected: {e}");
                show_notice(Notice::failed(&e));
                return;
            }
        };
        let mode = mode.clone();
        leptos::task::spawn_local(async move {
            let outcome = deliver(&mode, &submission.fields).await;
            if let Err(e) = &outcome {
                log::error!("contact form delivery failed: {e}");
            }
            if let Some(Some(n)) = form.try_update(|f| f.finish(submission.ticket, outcome)) {
                show_notice(n);
            }
        });
    };

    view! {
        <section id=Section::Contact.id() class="py-20">
            <div class="section-container">
                <Reveal motion=Motion::FadeDown once=true>
                    <h2 class="section-heading">"Get In " <span class="gradient-text">"Touch"</span></h2>
                </Reveal>

                <div class="grid md:grid-cols-2 gap-10">
                    <Reveal motion=Motion::SlideLeft once=true>
                        <h3 class="text-2xl font-bold mb-6">"Let's Connect"</h3>
                        <p class="text-[#8b949e] mb-8">
                            "I'm currently looking for new opportunities. Whether you have a question, project idea, or just want to say hi, feel free to reach out!"
                        </p>
                        <div class="space-y-6">
                            <ContactDetail icon="📞" tint="bg-[#238636]/10" label="Phone" value=PROFILE.phone />
                            <ContactDetail icon="✉" tint="bg-[#1f6feb]/10" label="Email" value=PROFILE.email />
                            <ContactDetail icon="📍" tint="bg-[#8b949e]/10" label="Location" value=PROFILE.location />
                        </div>
                    </Reveal>

                    <Reveal motion=Motion::SlideRight once=true>
                        <div class="repo-card p-6">
                            <h3 class="text-xl font-semibold">"Send Me a Message"</h3>
                            <p class="text-sm text-[#8b949e] mb-6">
                                "Fill out the form below and I'll get back to you as soon as possible."
                            </p>
                            <form class="space-y-4" on:submit=on_submit>
                                <div>
                                    <label for="name" class="text-sm font-medium block mb-1 text-[#c9d1d9]">"Name"</label>
                                    <input
                                        id="name"
                                        name="name"
                                        placeholder="Your name"
                                        required
                                        class=INPUT_CLASS
                                        prop:value={value_of(Field::Name)}
                                        on:input={set_from_input(Field::Name)}
                                    />
                                </div>
                                <div>
                                    <label for="email" class="text-sm font-medium block mb-1 text-[#c9d1d9]">"Email"</label>
                                    <input
                                        id="email"
                                        name="email"
                                        type="email"
                                        placeholder="Your email"
                                        required
                                        class=INPUT_CLASS
                                        prop:value={value_of(Field::Email)}
                                        on:input={set_from_input(Field::Email)}
                                    />
                                </div>
                                <div>
                                    <label for="message" class="text-sm font-medium block mb-1 text-[#c9d1d9]">"Message"</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        placeholder="Your message"
                                        rows="5"
                                        required
                                        class=INPUT_CLASS
                                        prop:value={value_of(Field::Message)}
                                        on:input={set_from_input(Field::Message)}
                                    ></textarea>
                                </div>
                                <button type="submit" class="gh-button-primary w-full" disabled=submitting>
                                    {move || if submitting() { "⟳ Sending..." } else { "➤ Send Message" }}
                                </button>
                            </form>
                        </div>
                    </Reveal>
                </div>
            </div>
            <Toast notices />
        </section>
    }
}

#[component]
fn ContactDetail(
    icon: &'static str,
    tint: &'static str,
    label: &'static str,
    value: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <div class={format!("h-12 w-12 rounded-full flex items-center justify-center {tint}")}>
                <span class="text-lg">{icon}</span>
            </div>
            <div>
                <p class="text-sm text-[#8b949e]">{label}</p>
                <p class="font-medium">{value}</p>
            </div>
        </div>
    }
}

#[component]
fn Toast(notices: RwSignal<NoticeSlot>) -> impl IntoView {
    move || {
        notices.with(|slot| slot.notice().cloned()).map(|n| {
            let accent = match n.kind {
                NoticeKind::Success => "border-[#238636]",
                NoticeKind::Error => "border-red-500",
            };
            view! {
                <div
                    role="status"
                    class={format!("fixed bottom-6 right-6 z-[100] max-w-sm rounded-md border-l-4 {accent} bg-[#161b22] p-4 shadow-2xl animate-fade-in")}
                >
                    <div class="flex items-start gap-4">
                        <div>
                            <p class="font-semibold text-white">{n.title}</p>
                            <p class="text-sm text-[#8b949e]">{n.description}</p>
                        </div>
                        <button
                            type="button"
                            aria-label="Dismiss"
                            class="text-[#8b949e] hover:text-white"
                            on:click=move |_| notices.update(NoticeSlot::dismiss)
                        >
                            "✕"
                        </button>
                    </div>
                </div>
            }
        })
    }
}

/// The submission mode configured at the application root.
fn contact_mode() -> SubmitMode {
    use_context::<SiteConfig>().unwrap_or_default().contact_mode
}

async fn deliver(mode: &SubmitMode, fields: &ContactFields) -> Result<(), ContactError> {
    if let SubmitMode::Remote { endpoint, subject } = mode {
        return post_form(endpoint, subject, fields).await;
    }
    #[cfg(feature = "hydrate")]
    if let Some(delay) = mode.simulated_delay() {
        gloo_timers::future::sleep(delay).await;
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
async fn post_form(endpoint: &str, subject: &str, fields: &ContactFields) -> Result<(), ContactError> {
    use crate::contact::delivery_outcome;

    let params = web_sys::UrlSearchParams::new()
        .map_err(|_| ContactError::Delivery("could not encode form".to_string()))?;
    for (key, value) in fields.form_pairs(subject) {
        params.append(key, value);
    }
    let resp = gloo_net::http::Request::post(endpoint)
        .header("Accept", "application/json")
        .body(params)
        .map_err(|e| ContactError::Delivery(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Delivery(e.to_string()))?;
    delivery_outcome(resp.status())
}

#[cfg(not(feature = "hydrate"))]
async fn post_form(endpoint: &str, _subject: &str, _fields: &ContactFields) -> Result<(), ContactError> {
    Err(ContactError::Delivery(format!(
        "cannot reach {endpoint} outside the browser"
    )))
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;

    #[test]
    fn test_contact_uses_configured_mode() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(SiteConfig::default().with_contact_setting(Some("remote")));
            assert!(matches!(contact_mode(), SubmitMode::Remote { .. }));
        });
    }

    #[test]
    fn test_contact_falls_back_to_simulated() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(contact_mode(), SubmitMode::default());
        });
    }
}
