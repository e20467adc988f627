//! Contact page: validated message form posting to the contact endpoint.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;
use leptos_meta::Title;

#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::ContactMessage;
#[cfg(feature = "csr")]
use crate::state::toast::ToastLevel;
use crate::state::toast::ToastState;
use crate::util::validate::{is_blank, is_valid_email};

/// Shortest message the form accepts, to filter empty pings.
const MIN_MESSAGE_LEN: usize = 10;

/// Field-level validation failures keyed by wire field name.
pub type ContactErrors = Vec<(&'static str, &'static str)>;

/// Validate the form. On success returns the trimmed message payload.
pub fn validate_contact(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<ContactMessage, ContactErrors> {
    let mut errors = ContactErrors::new();
    if is_blank(name) {
        errors.push(("name", "Name is required"));
    }
    if is_blank(email) {
        errors.push(("email", "Email is required"));
    } else if !is_valid_email(email) {
        errors.push(("email", "Enter a valid email address"));
    }
    if is_blank(subject) {
        errors.push(("subject", "Subject is required"));
    }
    if is_blank(message) {
        errors.push(("message", "Message is required"));
    } else if message.trim().len() < MIN_MESSAGE_LEN {
        errors.push(("message", "Message must be at least 10 characters"));
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ContactMessage {
        name: name.trim().to_owned(),
        email: email.trim().to_owned(),
        subject: subject.trim().to_owned(),
        message: message.trim().to_owned(),
    })
}

/// Look up the message recorded for `field`, if any.
pub fn error_for(errors: &ContactErrors, field: &str) -> Option<&'static str> {
    errors.iter().find(|(name, _)| *name == field).map(|(_, message)| *message)
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(ContactErrors::new());
    let sending = RwSignal::new(false);
    let submit_ctx = StoredValue::new(client);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get() {
            return;
        }
        match validate_contact(&name.get(), &email.get(), &subject.get(), &message.get()) {
            Err(found) => errors.set(found),
            Ok(payload) => {
                errors.set(ContactErrors::new());
                sending.set(true);
                #[cfg(feature = "csr")]
                {
                    let client = submit_ctx.get_value();
                    leptos::task::spawn_local(async move {
                        if api::send_contact_message(&client, &payload).await.is_ok() {
                            toasts.update(|toasts| {
                                toasts.push(ToastLevel::Success, "Message sent successfully!");
                            });
                            name.set(String::new());
                            email.set(String::new());
                            subject.set(String::new());
                            message.set(String::new());
                        }
                        // failures were already surfaced by the HTTP layer
                        sending.set(false);
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (&payload, &submit_ctx, &toasts);
                }
            }
        }
    };

    view! {
        <Title text="Contact" />
        <section class="page contact-page">
            <header class="page__header">
                <h1>"Get in Touch"</h1>
                <p class="page__subtitle">"Have a question or an idea? Send a message."</p>
            </header>

            <div class="contact-page__layout">
                <aside class="contact-page__info">
                    <h2>"Contact details"</h2>
                    <p>"hello@folio.dev"</p>
                    <p>"Based in Europe · working remotely"</p>
                    <p>"Usually responds within two business days."</p>
                </aside>

                <form class="contact-form" on:submit=on_submit>
                    <label class="contact-form__label">
                        "Name"
                        <input
                            class="contact-form__input"
                            class:contact-form__input--error=move || error_for(&errors.get(), "name").is_some()
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <ContactFieldError errors=errors field="name" />

                    <label class="contact-form__label">
                        "Email"
                        <input
                            class="contact-form__input"
                            class:contact-form__input--error=move || error_for(&errors.get(), "email").is_some()
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <ContactFieldError errors=errors field="email" />

                    <label class="contact-form__label">
                        "Subject"
                        <input
                            class="contact-form__input"
                            class:contact-form__input--error=move || error_for(&errors.get(), "subject").is_some()
                            type="text"
                            prop:value=move || subject.get()
                            on:input=move |ev| subject.set(event_target_value(&ev))
                        />
                    </label>
                    <ContactFieldError errors=errors field="subject" />

                    <label class="contact-form__label">
                        "Message"
                        <textarea
                            class="contact-form__input contact-form__input--multiline"
                            class:contact-form__input--error=move || error_for(&errors.get(), "message").is_some()
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <ContactFieldError errors=errors field="message" />

                    <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}

/// Inline message for one validated field.
#[component]
fn ContactFieldError(errors: RwSignal<ContactErrors>, field: &'static str) -> impl IntoView {
    view! {
        <Show when=move || error_for(&errors.get(), field).is_some()>
            <span class="form-error">{move || error_for(&errors.get(), field).unwrap_or_default()}</span>
        </Show>
    }
}
