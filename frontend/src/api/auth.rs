use reqwest::Method;

use super::{
    client::ApiClient,
    errors::ApiError,
    types::{
        ChangePasswordRequest, RecoverResponse, ResetPasswordInfo, SessionResponse, SignInData,
        UserProfile, ValidateIdentityInfo,
    },
};

impl ApiClient {
    pub async fn login(&self, credentials: &SignInData) -> Result<SessionResponse, ApiError> {
        let builder = self
            .request(Method::POST, &["user", "login", "admin"])
            .json(credentials);
        self.send_json(builder).await
    }

    /// Profile of the session the current bearer token belongs to.
    pub async fn recover_session(&self) -> Result<UserProfile, ApiError> {
        let builder = self.request(Method::GET, &["user", "recover"]);
        let response: RecoverResponse = self.send_json(builder).await?;
        Ok(response.user)
    }

    /// Asks the API to e-mail a recovery code.
    pub async fn reset_password(&self, info: &ResetPasswordInfo) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, &["user", "reset", "password", "admin"])
            .json(info);
        self.send_empty(builder).await
    }

    pub async fn validate_identity(
        &self,
        info: &ValidateIdentityInfo,
    ) -> Result<SessionResponse, ApiError> {
        let builder = self
            .request(Method::POST, &["user", "validate", "identity"])
            .json(info);
        self.send_json(builder).await
    }

    /// Succeeds while a recovery link is still redeemable.
    pub async fn validate_token(&self, token: &str) -> Result<(), ApiError> {
        let builder = self.request(Method::GET, &["user", "validate", "token", token]);
        self.send_empty(builder).await
    }

    pub async fn change_password(&self, new_password: &str) -> Result<UserProfile, ApiError> {
        let builder = self
            .request(Method::PATCH, &["user", "change", "password", "admin"])
            .json(&ChangePasswordRequest {
                new_password: new_password.to_string(),
            });
        self.send_json(builder).await
    }
}
