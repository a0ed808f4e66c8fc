use gloo_net::http::Request;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::category::{Category, CategoryInput};

#[derive(Clone, Copy, Debug)]
pub struct CategoriesApi {
    client: ApiClient,
}

impl CategoriesApi {
    pub(super) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(self) -> Result<Vec<Category>, ApiError> {
        self.client.get("categories").await
    }

    pub async fn get(self, id: i64) -> Result<Category, ApiError> {
        self.client.get(&format!("categories/{}", id)).await
    }

    pub async fn create(self, input: &CategoryInput) -> Result<Category, ApiError> {
        let url = self.client.endpoint("categories");
        self.client.send_json(&url, Request::post(&url), input).await
    }

    pub async fn update(self, id: i64, input: &CategoryInput) -> Result<Category, ApiError> {
        let url = self.client.endpoint(&format!("categories/{}", id));
        self.client.send_json(&url, Request::put(&url), input).await
    }

    /// Rejected by the server while any menu item still references the category.
    pub async fn delete(self, id: i64) -> Result<(), ApiError> {
        let url = self.client.endpoint(&format!("categories/{}", id));
        self.client.send_empty(&url, Request::delete(&url)).await
    }
}
