use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
/// Review state of an absence request, encoded as an integer by the API.
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
            other => Err(format!("unknown absence status: {}", other)),
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
    /// Forwarded as-is; the console only displays the embedded employee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Value>,
}
