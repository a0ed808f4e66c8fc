use gloo_net::http::Request;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::admin::{Admin, ChangePasswordInput, Credentials, LoginData, RegisterInput};

#[derive(Clone, Copy, Debug)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub(super) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(self, credentials: &Credentials) -> Result<LoginData, ApiError> {
        let url = self.client.endpoint("auth/login");
        self.client.send_json(&url, Request::post(&url), credentials).await
    }

    pub async fn logout(self) -> Result<(), ApiError> {
        let url = self.client.endpoint("auth/logout");
        self.client.send_empty(&url, Request::post(&url)).await
    }

    pub async fn register(self, input: &RegisterInput) -> Result<Admin, ApiError> {
        let url = self.client.endpoint("auth/register");
        self.client.send_json(&url, Request::post(&url), input).await
    }

    pub async fn change_password(self, input: &ChangePasswordInput) -> Result<(), ApiError> {
        let url = self.client.endpoint("auth/change-password");
        let _: serde_json::Value = self.client.send_json(&url, Request::put(&url), input).await?;
        Ok(())
    }

    pub async fn admins(self) -> Result<Vec<Admin>, ApiError> {
        self.client.get("auth/admins").await
    }
}
