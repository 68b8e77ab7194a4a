use crate::{ApiClient, ApiError};
use shared_types::{NewUser, User};

pub async fn list_users(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get("/api/users").await
}

pub async fn create_user(client: &ApiClient, user: &NewUser) -> Result<User, ApiError> {
    client.post("/api/users", user).await
}

pub async fn delete_user(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/api/users/{id}")).await
}
