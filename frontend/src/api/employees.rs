use reqwest::Method;

use super::{
    client::ApiClient,
    errors::ApiError,
    types::{Employee, EmployeeDto},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.send_json(self.request(Method::GET, &["employee"])).await
    }

    /// Employees of one company, used to scope client accounts.
    pub async fn list_employees_by_company(&self, cnpj: &str) -> Result<Vec<Employee>, ApiError> {
        self.send_json(self.request(Method::GET, &["employee", "company", cnpj]))
            .await
    }

    pub async fn get_employee(&self, cpf: &str) -> Result<Employee, ApiError> {
        self.send_json(self.request(Method::GET, &["employee", cpf]))
            .await
    }

    pub async fn create_employee(&self, dto: &EmployeeDto) -> Result<Employee, ApiError> {
        self.send_json(self.request(Method::POST, &["employee"]).json(dto))
            .await
    }

    pub async fn update_employee(&self, cpf: &str, dto: &EmployeeDto) -> Result<Employee, ApiError> {
        self.send_json(self.request(Method::PUT, &["employee", cpf]).json(dto))
            .await
    }

    pub async fn delete_employee(&self, cpf: &str) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &["employee", cpf]))
            .await
    }
}
