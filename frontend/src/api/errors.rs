//! Failures from the PointControl API and their user-facing wording.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error payload shape used by the PointControl API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ServerErrorBody {
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// `message` when present, else `error`, else empty.
    pub fn text(&self) -> &str {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Status {status}: {}", .body.text())]
    Status { status: u16, body: ServerErrorBody },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn kind(&self) -> ServerErrorKind {
        match self {
            ApiError::Status { body, .. } => ServerErrorKind::classify(body),
            _ => ServerErrorKind::Other,
        }
    }

    pub fn user_message(&self) -> UserMessage {
        match self {
            ApiError::Status { body, .. } => user_message(ServerErrorKind::classify(body), body),
            ApiError::Request(_) => UserMessage::general("Could not reach the server. Try again."),
            ApiError::Decode(_) => UserMessage::general(GENERIC_MESSAGE),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err.to_string())
        }
    }
}

/// API messages the console knows how to explain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerErrorKind {
    UserNotFound,
    InvalidPassword,
    InvalidCode,
    TokenExpired,
    CompanyAlreadyExists,
    EmployeeAlreadyExists,
    UserAlreadyExists,
    Other,
}

impl ServerErrorKind {
    pub fn classify(body: &ServerErrorBody) -> Self {
        match body.text().trim() {
            "User not found" => ServerErrorKind::UserNotFound,
            "Invalid password" => ServerErrorKind::InvalidPassword,
            "Invalid code" => ServerErrorKind::InvalidCode,
            "Token expired" => ServerErrorKind::TokenExpired,
            "Company already exists" => ServerErrorKind::CompanyAlreadyExists,
            "Employee already exists" => ServerErrorKind::EmployeeAlreadyExists,
            "User already exists" => ServerErrorKind::UserAlreadyExists,
            _ => ServerErrorKind::Other,
        }
    }
}

/// Form field an error message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
    Code,
    Cnpj,
    Cpf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    /// `None` for messages shown as a notification.
    pub field: Option<FormField>,
    pub text: String,
}

impl UserMessage {
    fn for_field(field: FormField, text: &str) -> Self {
        Self {
            field: Some(field),
            text: text.to_string(),
        }
    }

    fn general(text: &str) -> Self {
        Self {
            field: None,
            text: text.to_string(),
        }
    }
}

pub const GENERIC_MESSAGE: &str = "Something went wrong. Try again.";

pub fn user_message(kind: ServerErrorKind, body: &ServerErrorBody) -> UserMessage {
    match kind {
        ServerErrorKind::UserNotFound => UserMessage::for_field(FormField::Email, "User not registered."),
        ServerErrorKind::InvalidPassword => UserMessage::for_field(FormField::Password, "Invalid password."),
        ServerErrorKind::InvalidCode => UserMessage::for_field(FormField::Code, "Invalid code."),
        ServerErrorKind::TokenExpired => {
            UserMessage::general("This link has expired. Request a new one.")
        }
        ServerErrorKind::CompanyAlreadyExists => {
            UserMessage::for_field(FormField::Cnpj, "A company with this CNPJ already exists.")
        }
        ServerErrorKind::EmployeeAlreadyExists => {
            UserMessage::for_field(FormField::Cpf, "An employee with this CPF already exists.")
        }
        ServerErrorKind::UserAlreadyExists => {
            UserMessage::for_field(FormField::Email, "A user with this e-mail already exists.")
        }
        ServerErrorKind::Other => match body.text().trim() {
            "" => UserMessage::general(GENERIC_MESSAGE),
            text => UserMessage::general(text),
        },
    }
}
