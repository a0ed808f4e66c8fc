use gloo_net::http::Request;
use web_sys::File;

use super::{ApiClient, Multipart};
use crate::error::ApiError;
use crate::forms::image_staging::ImageUploader;
use crate::models::menu_item::{MenuItem, MenuSection};

/// `available` filter of the menu listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Availability {
    /// Let the server decide (public listing: available items only).
    #[default]
    Default,
    /// Every item, including ones marked unavailable.
    All,
    Only(bool),
}

impl Availability {
    pub fn query(&self) -> Option<String> {
        let value = match self {
            Availability::Default => return None,
            Availability::All => "all",
            Availability::Only(true) => "true",
            Availability::Only(false) => "false",
        };
        Some(format!("available={}", urlencoding::encode(value)))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MenuApi {
    client: ApiClient,
}

impl MenuApi {
    pub(super) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(self, availability: Availability) -> Result<Vec<MenuItem>, ApiError> {
        match availability.query() {
            Some(query) => self.client.get(&format!("menu?{}", query)).await,
            None => self.client.get("menu").await,
        }
    }

    pub async fn by_category(self) -> Result<Vec<MenuSection>, ApiError> {
        self.client.get("menu/by-category").await
    }

    pub async fn get(self, id: i64) -> Result<MenuItem, ApiError> {
        self.client.get(&format!("menu/{}", id)).await
    }

    pub async fn create(self, form: Multipart) -> Result<MenuItem, ApiError> {
        let url = self.client.endpoint("menu");
        self.client.send_multipart(&url, Request::post(&url), form).await
    }

    pub async fn update(self, id: i64, form: Multipart) -> Result<MenuItem, ApiError> {
        let url = self.client.endpoint(&format!("menu/{}", id));
        self.client.send_multipart(&url, Request::put(&url), form).await
    }

    pub async fn delete(self, id: i64) -> Result<(), ApiError> {
        let url = self.client.endpoint(&format!("menu/{}", id));
        self.client.send_empty(&url, Request::delete(&url)).await
    }

    pub async fn upload_voice(self, id: i64, file: File) -> Result<(), ApiError> {
        let url = self.client.endpoint(&format!("menu/{}/voice", id));
        let form = Multipart::new().file("voice_file", file);
        self.client.send_multipart_empty(&url, Request::post(&url), form).await
    }

    pub async fn upload_image(self, id: i64, file: File) -> Result<(), ApiError> {
        let url = self.client.endpoint(&format!("menu/{}/images", id));
        let form = Multipart::new().file("image", file);
        self.client.send_multipart_empty(&url, Request::post(&url), form).await
    }

    pub async fn delete_image(self, id: i64, image_id: i64) -> Result<(), ApiError> {
        let url = self.client.endpoint(&format!("menu/{}/images/{}", id, image_id));
        self.client.send_empty(&url, Request::delete(&url)).await
    }

    pub async fn set_main_image(self, id: i64, image_id: i64) -> Result<(), ApiError> {
        let url = self.client.endpoint(&format!("menu/{}/images/{}/main", id, image_id));
        self.client.send_empty(&url, Request::patch(&url)).await
    }
}

impl ImageUploader<File> for MenuApi {
    async fn upload(&self, item_id: i64, file: &File) -> Result<(), ApiError> {
        self.upload_image(item_id, file.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_query() {
        assert_eq!(Availability::Default.query(), None);
        assert_eq!(Availability::All.query().as_deref(), Some("available=all"));
        assert_eq!(Availability::Only(false).query().as_deref(), Some("available=false"));
    }
}
