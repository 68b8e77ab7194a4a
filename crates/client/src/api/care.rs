use crate::{ApiClient, ApiError};
use shared_types::{NewSchedule, NewVaccination, NewVisit, Schedule, Vaccination, Visit};

pub async fn list_visits(client: &ApiClient) -> Result<Vec<Visit>, ApiError> {
    client.get("/api/visits").await
}

pub async fn create_visit(client: &ApiClient, visit: &NewVisit) -> Result<Visit, ApiError> {
    client.post("/api/visits", visit).await
}

pub async fn list_vaccinations(client: &ApiClient) -> Result<Vec<Vaccination>, ApiError> {
    client.get("/api/vaccinations").await
}

pub async fn record_vaccination(
    client: &ApiClient,
    vaccination: &NewVaccination,
) -> Result<Vaccination, ApiError> {
    client.post("/api/vaccinations", vaccination).await
}

pub async fn list_schedules(client: &ApiClient) -> Result<Vec<Schedule>, ApiError> {
    client.get("/api/schedules").await
}

pub async fn create_schedule(client: &ApiClient, schedule: &NewSchedule) -> Result<Schedule, ApiError> {
    client.post("/api/schedules", schedule).await
}

pub async fn delete_schedule(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/api/schedules/{id}")).await
}
