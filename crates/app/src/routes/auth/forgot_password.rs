use super::looks_like_email;
use crate::routes::Route;
use carelink_client::{api, ApiClient};
use dioxus::prelude::*;
use shared_types::ForgotPasswordRequest;
use shared_ui::{Button, Form, FormAlert, TextField};

#[component]
pub fn ForgotPassword() -> Element {
    let client = use_context::<ApiClient>();
    let mut email = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_: FormEvent| {
        let address = email().trim().to_string();
        if !looks_like_email(&address) {
            error.set(Some("Enter a valid email address.".to_string()));
            return;
        }
        let client = client.clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            let request = ForgotPasswordRequest { email: address };
            match api::forgot_password(&client, &request).await {
                Ok(_) => {
                    navigator().replace(Route::VerifyOtp { email: request.email });
                }
                Err(e) => {
                    error.set(Some(e.friendly_message()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        h1 { class: "auth-title", "Reset your password" }
        p { class: "auth-subtitle", "Enter your email and we will send you a one-time code." }
        Form { onsubmit: submit,
            if let Some(message) = error() {
                FormAlert { message }
            }
            TextField {
                label: "Email",
                value: email(),
                input_type: "email",
                required: true,
                on_input: move |v| email.set(v),
            }
            Button { button_type: "submit", loading: submitting(), "Send code" }
        }
        div { class: "auth-links",
            Link { to: Route::SignIn {}, "Back to sign in" }
        }
    }
}
