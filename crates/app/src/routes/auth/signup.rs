use super::looks_like_email;
use crate::routes::common::optional;
use crate::routes::Route;
use carelink_client::{api, ApiClient};
use dioxus::prelude::*;
use shared_types::SignUpRequest;
use shared_ui::{Button, Form, FormAlert, TextField};

#[derive(Debug, Clone, Default, PartialEq)]
struct SignUpDraft {
    username: String,
    email: String,
    password: String,
    confirm: String,
}

impl SignUpDraft {
    fn validate(&self) -> Result<SignUpRequest, String> {
        let username = optional(&self.username).ok_or("Choose a username.")?;
        if !looks_like_email(&self.email) {
            return Err("Enter a valid email address.".to_string());
        }
        if self.password.is_empty() {
            return Err("Choose a password.".to_string());
        }
        if self.password != self.confirm {
            return Err("Passwords do not match.".to_string());
        }
        Ok(SignUpRequest {
            username,
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[component]
pub fn SignUp() -> Element {
    let client = use_context::<ApiClient>();
    let mut draft = use_signal(SignUpDraft::default);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_: FormEvent| {
        let request = match draft.read().validate() {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let client = client.clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            match api::sign_up(&client, &request).await {
                Ok(response) => {
                    tracing::info!(message = %response.message, "account created");
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
        h1 { class: "auth-title", "Create an account" }
        p { class: "auth-subtitle", "We will email you a code to confirm your address." }
        Form { onsubmit: submit,
            if let Some(message) = error() {
                FormAlert { message }
            }
            TextField {
                label: "Username",
                value: draft.read().username.clone(),
                required: true,
                on_input: move |v| draft.write().username = v,
            }
            TextField {
                label: "Email",
                value: draft.read().email.clone(),
                input_type: "email",
                required: true,
                on_input: move |v| draft.write().email = v,
            }
            TextField {
                label: "Password",
                value: draft.read().password.clone(),
                input_type: "password",
                required: true,
                on_input: move |v| draft.write().password = v,
            }
            TextField {
                label: "Confirm password",
                value: draft.read().confirm.clone(),
                input_type: "password",
                required: true,
                on_input: move |v| draft.write().confirm = v,
            }
            Button { button_type: "submit", loading: submitting(), "Create account" }
        }
        div { class: "auth-links",
            Link { to: Route::SignIn {}, "Already registered? Sign in" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft() -> SignUpDraft {
        SignUpDraft {
            username: "aowusu".to_string(),
            email: "ama@clinic.org".to_string(),
            password: "s3cure-pass".to_string(),
            confirm: "s3cure-pass".to_string(),
        }
    }

    #[test]
    fn valid_draft_becomes_request() {
        let request = draft().validate().unwrap();
        assert_eq!(request.username, "aowusu");
        assert_eq!(request.email, "ama@clinic.org");
    }

    #[test]
    fn passwords_must_match() {
        let mut d = draft();
        d.confirm = "different".to_string();
        assert_eq!(d.validate(), Err("Passwords do not match.".to_string()));
    }

    #[test]
    fn password_is_required() {
        let mut d = draft();
        d.password.clear();
        d.confirm.clear();
        assert_eq!(d.validate(), Err("Choose a password.".to_string()));
    }
}
