use super::looks_like_email;
use crate::auth::use_auth;
use crate::routes::Route;
use carelink_client::{api, ApiClient, ApiError};
use dioxus::prelude::*;
use shared_types::{Claims, SignInRequest};
use shared_ui::{Button, Form, FormAlert, TextField};

fn sign_in_error(error: &ApiError) -> String {
    if error.is_unauthorized() {
        "Incorrect email or password.".to_string()
    } else {
        error.friendly_message()
    }
}

fn portal_for(claims: Option<&Claims>) -> Option<Route> {
    claims.map(|c| Route::home(c.role))
}

#[component]
pub fn SignIn() -> Element {
    let mut auth = use_auth();
    let client = use_context::<ApiClient>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Signed in, either already or by the submit below: go to the portal.
    use_effect(move || {
        if let Some(home) = portal_for(auth.claims.read().as_ref()) {
            navigator().replace(home);
        }
    });

    let submit = move |_: FormEvent| {
        if !looks_like_email(&email()) {
            error.set(Some("Enter a valid email address.".to_string()));
            return;
        }
        if password().is_empty() {
            error.set(Some("Enter your password.".to_string()));
            return;
        }
        let request = SignInRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        let client = client.clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            match api::sign_in(&client, &request).await {
                Ok(_) => {
                    auth.refresh(client.session());
                    if !auth.is_authenticated() {
                        tracing::warn!("sign-in returned a token without a usable role");
                        api::sign_out(&client);
                        error.set(Some("This account has no portal access.".to_string()));
                        submitting.set(false);
                    }
                }
                Err(e) => {
                    error.set(Some(sign_in_error(&e)));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        h1 { class: "auth-title", "Sign in" }
        p { class: "auth-subtitle", "Use the email and password for your CareLink account." }
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
            TextField {
                label: "Password",
                value: password(),
                input_type: "password",
                required: true,
                on_input: move |v| password.set(v),
            }
            Button { button_type: "submit", loading: submitting(), "Sign in" }
        }
        div { class: "auth-links",
            Link { to: Route::ForgotPassword {}, "Forgot password?" }
            Link { to: Route::SignUp {}, "Create an account" }
        }
    }
}
