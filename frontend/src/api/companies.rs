use reqwest::Method;

use super::{
    client::ApiClient,
    errors::ApiError,
    types::{Company, CompanyDto},
};

impl ApiClient {
    pub async fn list_companies(&self) -> Result<Vec<Company>, ApiError> {
        self.send_json(self.request(Method::GET, &["company"])).await
    }

    pub async fn get_company(&self, cnpj: &str) -> Result<Company, ApiError> {
        self.send_json(self.request(Method::GET, &["company", cnpj]))
            .await
    }

    pub async fn create_company(&self, dto: &CompanyDto) -> Result<Company, ApiError> {
        self.send_json(self.request(Method::POST, &["company"]).json(dto))
            .await
    }

    pub async fn update_company(&self, cnpj: &str, dto: &CompanyDto) -> Result<Company, ApiError> {
        self.send_json(self.request(Method::PUT, &["company", cnpj]).json(dto))
            .await
    }

    pub async fn delete_company(&self, cnpj: &str) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &["company", cnpj]))
            .await
    }
}
