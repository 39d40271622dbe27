use gloo_timers::callback::Timeout;
use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const SUCCESS_TEXT: &str = "Thank you for subscribing! Welcome to The Paddock.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Please enter a valid email address.")]
    Invalid,
}

/// Trims the raw input and returns it if it looks like `local@domain.tld`.
pub fn validate_email(raw: &str) -> Result<String, EmailError> {
    let email = raw.trim();
    if EMAIL_PATTERN.is_match(email) {
        Ok(email.to_string())
    } else {
        Err(EmailError::Invalid)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    fn modifier(self) -> &'static str {
        match self {
            MessageKind::Success => "form-message--success",
            MessageKind::Error => "form-message--error",
        }
    }

    fn color(self) -> &'static str {
        match self {
            MessageKind::Success => "#00CC00",
            MessageKind::Error => "#CC0000",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    Rejected,
    Subscribed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterState {
    pub email: String,
    pub invalid: bool,
    pub message: Option<FormMessage>,
}

impl NewsletterState {
    /// Typing clears the error styling and whatever message is showing.
    pub fn input(&mut self, value: String) {
        self.email = value;
        self.invalid = false;
        self.message = None;
    }

    pub fn submit(&mut self) -> Submission {
        match validate_email(&self.email) {
            Err(err) => {
                self.invalid = true;
                self.message = Some(FormMessage {
                    kind: MessageKind::Error,
                    text: err.to_string(),
                });
                Submission::Rejected
            }
            Ok(email) => {
                self.invalid = false;
                self.email.clear();
                self.message = Some(FormMessage {
                    kind: MessageKind::Success,
                    text: SUCCESS_TEXT.to_string(),
                });
                Submission::Subscribed(email)
            }
        }
    }

    pub fn expire_success(&mut self) {
        if matches!(&self.message, Some(message) if message.kind == MessageKind::Success) {
            self.message = None;
        }
    }
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let state = use_state(NewsletterState::default);
    let input_ref = use_node_ref();
    // Pending removal of the success message. Replacing it cancels the old one.
    let expiry = use_mut_ref(|| None::<Timeout>);

    let on_input = {
        let state = state.clone();
        let expiry = expiry.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*state).clone();
            next.input(input.value());
            expiry.borrow_mut().take();
            state.set(next);
        })
    };

    let on_submit = {
        let state = state.clone();
        let input_ref = input_ref.clone();
        let expiry = expiry.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*state).clone();
            expiry.borrow_mut().take();

            match next.submit() {
                Submission::Rejected => {
                    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                        if let Err(err) = input.focus() {
                            error!("Failed to focus email input: {:?}", err);
                        }
                    }
                }
                Submission::Subscribed(email) => {
                    // No backend behind the form; the subscription is only logged.
                    info!("Newsletter subscription: {}", email);
                    let state = state.clone();
                    let mut expired = next.clone();
                    expired.expire_success();
                    *expiry.borrow_mut() = Some(Timeout::new(config::SUCCESS_MESSAGE_TTL_MS, move || {
                        state.set(expired);
                    }));
                }
            }

            state.set(next);
        })
    };

    let message = match &state.message {
        Some(message) => html! {
            <p
                class={classes!("form-message", message.kind.modifier())}
                style={format!(
                    "margin-top: 1rem; font-size: 0.875rem; font-weight: 600; color: {};",
                    message.kind.color()
                )}
            >
                {message.text.clone()}
            </p>
        },
        None => html! {},
    };

    html! {
        <form id="newsletter-form" class="newsletter-form" onsubmit={on_submit} novalidate=true>
            <div class="form-group">
                <input
                    type="email"
                    id="email"
                    ref={input_ref}
                    class={classes!("newsletter-input", state.invalid.then(|| "error"))}
                    placeholder="Enter your email"
                    aria-invalid={state.invalid.to_string()}
                    value={state.email.clone()}
                    oninput={on_input}
                />
                <button type="submit" class="btn btn-primary">{"Subscribe"}</button>
            </div>
            {message}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert_eq!(validate_email("user@example.com"), Ok("user@example.com".to_string()));
        assert_eq!(validate_email("a@b.co"), Ok("a@b.co".to_string()));
        assert_eq!(validate_email("  fan@paddock.racing \n"), Ok("fan@paddock.racing".to_string()));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for raw in [
            "",
            "   ",
            "bad-email",
            "user@example",
            "userexample.com",
            "@example.com",
            "user@.com",
            "user@example.",
            "a@b@c.com",
            "us er@example.com",
        ] {
            assert_eq!(validate_email(raw), Err(EmailError::Invalid), "{:?}", raw);
        }
    }

    #[test]
    fn test_invalid_submit_keeps_field() {
        let mut state = NewsletterState::default();
        state.input("bad-email".to_string());

        assert_eq!(state.submit(), Submission::Rejected);
        assert!(state.invalid);
        assert_eq!(state.email, "bad-email");
        assert_eq!(
            state.message,
            Some(FormMessage {
                kind: MessageKind::Error,
                text: "Please enter a valid email address.".to_string(),
            })
        );
    }

    #[test]
    fn test_valid_submit_clears_field() {
        let mut state = NewsletterState::default();
        state.input("bad-email".to_string());
        state.submit();
        state.input(" a@b.co ".to_string());

        assert_eq!(state.submit(), Submission::Subscribed("a@b.co".to_string()));
        assert!(!state.invalid);
        assert!(state.email.is_empty());
        assert_eq!(state.message.as_ref().map(|m| m.kind), Some(MessageKind::Success));

        state.expire_success();
        assert_eq!(state.message, None);
    }

    #[test]
    fn test_input_clears_error_and_message() {
        let mut state = NewsletterState::default();
        state.submit();
        assert!(state.invalid);

        state.input("f".to_string());
        assert!(!state.invalid);
        assert_eq!(state.message, None);
    }

    #[test]
    fn test_expiry_leaves_error_message() {
        let mut state = NewsletterState::default();
        state.submit();
        state.expire_success();
        assert_eq!(state.message.as_ref().map(|m| m.kind), Some(MessageKind::Error));
    }
}
