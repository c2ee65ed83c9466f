use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::permissions::Role;

/// Signed-in console account as returned by login and session recovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub company_cnpj: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    /// Set until the account replaces its initial password.
    #[serde(default)]
    pub first_access: bool,
}

impl UserProfile {
    /// `None` when the API sent a role this console does not know.
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInData {
    pub email: String,
    pub password: String,
}

/// Session issued by login and identity validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: UserProfile,
    pub token: String,
    /// Token lifetime in seconds.
    pub token_expires: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecoverResponse {
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordInfo {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateIdentityInfo {
    pub token: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub cnpj: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<Vec<Employee>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDto {
    pub cnpj: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub dt_birth: DateTime<Utc>,
    pub entry: String,
    pub exit: String,
    pub working_time: f64,
    pub role: String,
    #[serde(default)]
    pub company_cnpj: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Box<Company>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absences: Option<Vec<Absence>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub employee_cpf: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub company_cnpj: String,
    pub role: String,
    pub dt_birth: DateTime<Utc>,
    pub entry: String,
    pub exit: String,
    pub working_time: f64,
}

/// Console account managed under `/user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub company_cnpj: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub company_cnpj: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AbsenceStatus {
    Denied,
    AwaitingReview,
    Approved,
}

impl TryFrom<u8> for AbsenceStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AbsenceStatus::Denied),
            1 => Ok(AbsenceStatus::AwaitingReview),
            2 => Ok(AbsenceStatus::Approved),
            other => Err(format!("unknown absence status {}", other)),
        }
    }
}

impl From<AbsenceStatus> for u8 {
    fn from(status: AbsenceStatus) -> Self {
        match status {
            AbsenceStatus::Denied => 0,
            AbsenceStatus::AwaitingReview => 1,
            AbsenceStatus::Approved => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Absence {
    pub id: i64,
    pub status: AbsenceStatus,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub employee_cpf: String,
    #[serde(default)]
    pub justification: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Box<Employee>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceDto {
    pub status: AbsenceStatus,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub justification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_cpf: Option<String>,
}

/// A clock-in registered by an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub id: i64,
    pub employee_cpf: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Box<Employee>>,
}
