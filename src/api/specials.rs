use gloo_net::http::Request;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::special::{Special, SpecialInput};

#[derive(Clone, Copy, Debug)]
pub struct SpecialsApi {
    client: ApiClient,
}

impl SpecialsApi {
    pub(super) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(self) -> Result<Vec<Special>, ApiError> {
        self.client.get("specials").await
    }

    pub async fn get(self, id: i64) -> Result<Special, ApiError> {
        self.client.get(&format!("specials/{}", id)).await
    }

    pub async fn create(self, input: &SpecialInput) -> Result<Special, ApiError> {
        let url = self.client.endpoint("specials");
        self.client.send_json(&url, Request::post(&url), input).await
    }

    pub async fn update(self, id: i64, input: &SpecialInput) -> Result<Special, ApiError> {
        let url = self.client.endpoint(&format!("specials/{}", id));
        self.client.send_json(&url, Request::put(&url), input).await
    }

    pub async fn delete(self, id: i64) -> Result<(), ApiError> {
        let url = self.client.endpoint(&format!("specials/{}", id));
        self.client.send_empty(&url, Request::delete(&url)).await
    }
}
