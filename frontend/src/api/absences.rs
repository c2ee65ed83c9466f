use reqwest::Method;

use super::{
    client::ApiClient,
    errors::ApiError,
    types::{Absence, AbsenceDto, AbsenceStatus},
};

impl ApiClient {
    pub async fn list_absences(&self) -> Result<Vec<Absence>, ApiError> {
        self.send_json(self.request(Method::GET, &["absence"])).await
    }

    pub async fn list_absences_by_status(
        &self,
        status: AbsenceStatus,
    ) -> Result<Vec<Absence>, ApiError> {
        let code = u8::from(status).to_string();
        self.send_json(self.request(Method::GET, &["absence", "status", &code]))
            .await
    }

    pub async fn get_absence(&self, id: i64) -> Result<Absence, ApiError> {
        let id = id.to_string();
        self.send_json(self.request(Method::GET, &["absence", &id]))
            .await
    }

    pub async fn create_absence(&self, dto: &AbsenceDto) -> Result<Absence, ApiError> {
        self.send_json(self.request(Method::POST, &["absence"]).json(dto))
            .await
    }

    /// Also used by the review page to approve or deny.
    pub async fn update_absence(&self, id: i64, dto: &AbsenceDto) -> Result<Absence, ApiError> {
        let id = id.to_string();
        self.send_json(self.request(Method::PUT, &["absence", &id]).json(dto))
            .await
    }

    pub async fn delete_absence(&self, id: i64) -> Result<(), ApiError> {
        let id = id.to_string();
        self.send_empty(self.request(Method::DELETE, &["absence", &id]))
            .await
    }
}
