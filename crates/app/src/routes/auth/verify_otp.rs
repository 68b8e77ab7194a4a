use super::looks_like_email;
use crate::routes::Route;
use carelink_client::{api, ApiClient};
use dioxus::prelude::*;
use shared_types::VerifyOtpRequest;
use shared_ui::{Button, Form, FormAlert, TextField};

/// Codes are six digits.
const OTP_LEN: usize = 6;

fn normalize_otp(raw: &str) -> Result<String, String> {
    let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() == OTP_LEN && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(digits)
    } else {
        Err(format!("Enter the {OTP_LEN}-digit code from your email."))
    }
}

#[component]
pub fn VerifyOtp(email: String) -> Element {
    let client = use_context::<ApiClient>();
    let mut address = use_signal(|| email.clone());
    let mut code = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut verified = use_signal(|| None::<String>);

    let submit = move |_: FormEvent| {
        if !looks_like_email(&address()) {
            error.set(Some("Enter a valid email address.".to_string()));
            return;
        }
        let otp = match normalize_otp(&code()) {
            Ok(otp) => otp,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let request = VerifyOtpRequest {
            email: address().trim().to_string(),
            otp,
        };
        let client = client.clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            match api::verify_otp(&client, &request).await {
                Ok(response) => {
                    let message = if response.message.trim().is_empty() {
                        "Your email has been verified.".to_string()
                    } else {
                        response.message
                    };
                    verified.set(Some(message));
                }
                Err(e) => error.set(Some(e.friendly_message())),
            }
            submitting.set(false);
        });
    };

    if let Some(message) = verified() {
        return rsx! {
            h1 { class: "auth-title", "All set" }
            p { class: "auth-subtitle", "{message}" }
            div { class: "auth-links",
                Link { to: Route::SignIn {}, "Continue to sign in" }
            }
        };
    }

    rsx! {
        h1 { class: "auth-title", "Enter your code" }
        p { class: "auth-subtitle", "Check your inbox for a {OTP_LEN}-digit code." }
        Form { onsubmit: submit,
            if let Some(message) = error() {
                FormAlert { message }
            }
            TextField {
                label: "Email",
                value: address(),
                input_type: "email",
                required: true,
                on_input: move |v| address.set(v),
            }
            TextField {
                label: "Code",
                value: code(),
                placeholder: "123456",
                required: true,
                on_input: move |v| code.set(v),
            }
            Button { button_type: "submit", loading: submitting(), "Verify" }
        }
        div { class: "auth-links",
            Link { to: Route::ForgotPassword {}, "Send a new code" }
            Link { to: Route::SignIn {}, "Back to sign in" }
        }
    }
}
