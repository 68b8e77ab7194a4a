use crate::{ApiClient, ApiError};
use shared_types::{Infant, NewInfant};

const INFANTS: &str = "/api/infants";

pub async fn list_infants(client: &ApiClient) -> Result<Vec<Infant>, ApiError> {
    client.get(INFANTS).await
}

pub async fn get_infant(client: &ApiClient, id: i64) -> Result<Infant, ApiError> {
    client.get(&format!("{INFANTS}/{id}")).await
}

/// Infants registered under one parent.
pub async fn infants_for_parent(client: &ApiClient, parent_id: i64) -> Result<Vec<Infant>, ApiError> {
    client.get(&format!("/api/parents/{parent_id}/infants")).await
}

pub async fn create_infant(client: &ApiClient, infant: &NewInfant) -> Result<Infant, ApiError> {
    client.post(INFANTS, infant).await
}

pub async fn update_infant(client: &ApiClient, id: i64, infant: &NewInfant) -> Result<Infant, ApiError> {
    client.put(&format!("{INFANTS}/{id}"), infant).await
}

pub async fn delete_infant(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("{INFANTS}/{id}")).await
}
