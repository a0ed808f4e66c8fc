use serde::{Deserialize, Serialize};

use crate::config::{file_url, PLACEHOLDER_IMAGE};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct GalleryImage {
    pub id: i64,
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

impl GalleryImage {
    pub fn resolved_url(&self) -> String {
        file_url(Some(&self.image_url)).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    }

    pub fn caption(&self) -> &str {
        self.caption.as_deref().unwrap_or_default()
    }
}
