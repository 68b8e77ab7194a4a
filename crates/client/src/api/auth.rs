use crate::{ApiClient, ApiError};
use shared_types::{
    ForgotPasswordRequest, MessageResponse, SignInRequest, SignInResponse, SignUpRequest,
    VerifyOtpRequest,
};

/// Exchange credentials for a bearer token and store it in the client's session.
pub async fn sign_in(client: &ApiClient, request: &SignInRequest) -> Result<SignInResponse, ApiError> {
    let response: SignInResponse = client.post("/api/auth/signin", request).await?;
    client.session().sign_in(&response.token);
    tracing::info!("signed in");
    Ok(response)
}

pub async fn sign_up(client: &ApiClient, request: &SignUpRequest) -> Result<MessageResponse, ApiError> {
    client.post("/api/auth/signup", request).await
}

pub async fn forgot_password(
    client: &ApiClient,
    request: &ForgotPasswordRequest,
) -> Result<MessageResponse, ApiError> {
    client.post("/api/auth/forgot-password", request).await
}

pub async fn verify_otp(client: &ApiClient, request: &VerifyOtpRequest) -> Result<MessageResponse, ApiError> {
    client.post("/api/auth/verify-otp", request).await
}

/// Client-side only: the API keeps no session to tear down.
pub fn sign_out(client: &ApiClient) {
    client.session().sign_out();
    tracing::info!("signed out");
}
