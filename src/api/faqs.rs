use gloo_net::http::Request;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::faq::{Faq, FaqInput};

#[derive(Clone, Copy, Debug)]
pub struct FaqsApi {
    client: ApiClient,
}

impl FaqsApi {
    pub(super) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(self) -> Result<Vec<Faq>, ApiError> {
        self.client.get("faqs").await
    }

    pub async fn get(self, id: i64) -> Result<Faq, ApiError> {
        self.client.get(&format!("faqs/{}", id)).await
    }

    pub async fn create(self, input: &FaqInput) -> Result<Faq, ApiError> {
        let url = self.client.endpoint("faqs");
        self.client.send_json(&url, Request::post(&url), input).await
    }

    pub async fn update(self, id: i64, input: &FaqInput) -> Result<Faq, ApiError> {
        let url = self.client.endpoint(&format!("faqs/{}", id));
        self.client.send_json(&url, Request::put(&url), input).await
    }

    pub async fn delete(self, id: i64) -> Result<(), ApiError> {
        let url = self.client.endpoint(&format!("faqs/{}", id));
        self.client.send_empty(&url, Request::delete(&url)).await
    }
}
