use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Successful sign-in. Only the bearer token is required; the API may send
/// the username alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInResponse {
    #[serde(alias = "accessToken", alias = "jwt")]
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_response_accepts_token_aliases() {
        let a: SignInResponse = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
        let b: SignInResponse = serde_json::from_str(r#"{"accessToken":"t2","username":"ama"}"#).unwrap();
        let c: SignInResponse = serde_json::from_str(r#"{"jwt":"t3"}"#).unwrap();
        assert_eq!(a.token, "t1");
        assert_eq!(b.token, "t2");
        assert_eq!(b.username.as_deref(), Some("ama"));
        assert_eq!(c.token, "t3");
    }
}
