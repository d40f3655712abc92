//! Contact section: the enquiry form and the Telegram call to action.

use gallery::forms::{ContactForm, SERVICES};
use leptos::prelude::*;

use crate::components::notification::notify;
use crate::components::reveal::Reveal;
use crate::components::site_header::TELEGRAM_URL;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::util::dom;

const SENT_MESSAGE: &str = "Message sent! I will get back to you soon.";
const FAILED_MESSAGE: &str = "Could not send the message. Try writing in Telegram.";

#[component]
pub fn ContactSection() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let service = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let reset = move || {
        name.set(String::new());
        email.set(String::new());
        service.set(String::new());
        message.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ContactForm { name: name.get(), email: email.get(), service: service.get(), message: message.get() };
        if let Err(e) = form.validate() {
            notify(notices, NoticeKind::Error, e.to_string());
            return;
        }
        busy.set(true);
        let form = form.trimmed();
        leptos::task::spawn_local(async move {
            match crate::net::api::send_contact(&form).await {
                Ok(()) => {
                    notify(notices, NoticeKind::Success, SENT_MESSAGE);
                    reset();
                }
                Err(e) => {
                    log::warn!("contact submit failed: {e}");
                    notify(notices, NoticeKind::Error, FAILED_MESSAGE);
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section id="contact" class="contact">
            <div class="container contact__grid">
                <Reveal class="contact__intro">
                    <h2 class="section-title">"Let's talk"</h2>
                    <p class="section-subtitle">"Tell me about the project, or message me directly."</p>
                    <a
                        href=TELEGRAM_URL
                        class="btn btn-telegram telegram-link"
                        on:click=move |ev| {
                            ev.prevent_default();
                            dom::open_in_new_tab(TELEGRAM_URL);
                        }
                    >
                        "Write in Telegram"
                    </a>
                </Reveal>
                <Reveal class="contact__form-wrap">
                    <form class="contact-form" on:submit=on_submit>
                        <input
                            class="form-input"
                            type="text"
                            name="name"
                            placeholder="Your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <input
                            class="form-input"
                            type="email"
                            name="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <select
                            class="form-input"
                            name="service"
                            prop:value=move || service.get()
                            on:change=move |ev| service.set(event_target_value(&ev))
                        >
                            <option value="">"Service"</option>
                            {SERVICES
                                .iter()
                                .map(|&(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                        <textarea
                            class="form-input"
                            name="message"
                            rows="5"
                            placeholder="Message"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                            <Show when=move || busy.get() fallback=|| "Send message">
                                <span class="loading-dots"><span></span><span></span><span></span></span>
                            </Show>
                        </button>
                    </form>
                </Reveal>
            </div>
        </section>
    }
}
