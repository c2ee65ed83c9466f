use reqwest::Method;

use super::{
    client::ApiClient,
    errors::ApiError,
    types::{User, UserDto},
};

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.send_json(self.request(Method::GET, &["user"])).await
    }

    pub async fn get_user(&self, email: &str) -> Result<User, ApiError> {
        self.send_json(self.request(Method::GET, &["user", email]))
            .await
    }

    pub async fn create_user(&self, dto: &UserDto) -> Result<User, ApiError> {
        self.send_json(self.request(Method::POST, &["user"]).json(dto))
            .await
    }

    /// Updates are addressed by account id, not e-mail.
    pub async fn update_user(&self, id: &str, dto: &UserDto) -> Result<User, ApiError> {
        self.send_json(self.request(Method::PUT, &["user", id]).json(dto))
            .await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &["user", id]))
            .await
    }
}
