use gloo_net::http::Request;
use web_sys::File;

use super::{ApiClient, Multipart};
use crate::error::ApiError;
use crate::models::gallery::GalleryImage;

#[derive(Clone, Copy, Debug)]
pub struct GalleryApi {
    client: ApiClient,
}

impl GalleryApi {
    pub(super) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Multipart body for a gallery upload; `image` is optional on update.
    pub fn form(caption: &str, image: Option<File>) -> Multipart {
        let form = Multipart::new().text_if_present("caption", caption);
        match image {
            Some(file) => form.file("image", file),
            None => form,
        }
    }

    pub async fn get_all(self) -> Result<Vec<GalleryImage>, ApiError> {
        self.client.get("gallery").await
    }

    pub async fn get(self, id: i64) -> Result<GalleryImage, ApiError> {
        self.client.get(&format!("gallery/{}", id)).await
    }

    pub async fn create(self, form: Multipart) -> Result<GalleryImage, ApiError> {
        let url = self.client.endpoint("gallery");
        self.client.send_multipart(&url, Request::post(&url), form).await
    }

    pub async fn update(self, id: i64, form: Multipart) -> Result<GalleryImage, ApiError> {
        let url = self.client.endpoint(&format!("gallery/{}", id));
        self.client.send_multipart(&url, Request::put(&url), form).await
    }

    pub async fn delete(self, id: i64) -> Result<(), ApiError> {
        let url = self.client.endpoint(&format!("gallery/{}", id));
        self.client.send_empty(&url, Request::delete(&url)).await
    }
}
