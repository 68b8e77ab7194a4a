use crate::{ApiClient, ApiError};
use shared_types::{Facility, NewFacility};

const FACILITIES: &str = "/api/facilities";

pub async fn list_facilities(client: &ApiClient) -> Result<Vec<Facility>, ApiError> {
    client.get(FACILITIES).await
}

pub async fn create_facility(client: &ApiClient, facility: &NewFacility) -> Result<Facility, ApiError> {
    client.post(FACILITIES, facility).await
}

pub async fn update_facility(
    client: &ApiClient,
    id: i64,
    facility: &NewFacility,
) -> Result<Facility, ApiError> {
    client.put(&format!("{FACILITIES}/{id}"), facility).await
}

pub async fn delete_facility(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("{FACILITIES}/{id}")).await
}
