use crate::{ApiClient, ApiError};
use shared_types::{NewParent, Parent};

const PARENTS: &str = "/api/parents";

pub async fn list_parents(client: &ApiClient) -> Result<Vec<Parent>, ApiError> {
    client.get(PARENTS).await
}

pub async fn get_parent(client: &ApiClient, id: i64) -> Result<Parent, ApiError> {
    client.get(&format!("{PARENTS}/{id}")).await
}

pub async fn create_parent(client: &ApiClient, parent: &NewParent) -> Result<Parent, ApiError> {
    client.post(PARENTS, parent).await
}

pub async fn update_parent(client: &ApiClient, id: i64, parent: &NewParent) -> Result<Parent, ApiError> {
    client.put(&format!("{PARENTS}/{id}"), parent).await
}

pub async fn delete_parent(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("{PARENTS}/{id}")).await
}
