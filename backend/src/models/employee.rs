use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{absence::Absence, company::Company, point::Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub dt_birth: DateTime<Utc>,
    /// Shift start, `HH:MM`.
    pub entry: String,
    /// Shift end, `HH:MM`.
    pub exit: String,
    /// Daily workload in hours.
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
