mod forgot_password;
mod signin;
mod signup;
mod verify_otp;

pub use forgot_password::ForgotPassword;
pub use signin::SignIn;
pub use signup::SignUp;
pub use verify_otp::VerifyOtp;

/// Minimal shape check before a request leaves the browser.
fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}
