use serde::{Deserialize, Serialize};

use crate::config::{file_url, PLACEHOLDER_IMAGE};
use crate::models::category::CategoryRef;

/// One of the (at most four) photos attached to a menu item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MenuImage {
    pub id: i64,
    pub image_url: String,
    #[serde(default)]
    pub is_main: bool,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

impl MenuImage {
    pub fn resolved_url(&self) -> String {
        file_url(Some(&self.image_url)).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    }
}

/// A sellable bakery product.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Price in rupiah.
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub price_display: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub voice_file: Option<String>,
    #[serde(default)]
    pub voice_description: Option<String>,
    /// Single-image field from before items carried an image list.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<MenuImage>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub unit: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl MenuItem {
    pub fn tag(&self) -> Option<&str> {
        non_blank(&self.tag)
    }

    pub fn voice_file(&self) -> Option<&str> {
        non_blank(&self.voice_file)
    }

    pub fn voice_description(&self) -> Option<&str> {
        non_blank(&self.voice_description)
    }

    pub fn has_voice(&self) -> bool {
        self.voice_file().is_some() || self.voice_description().is_some()
    }

    /// Category label, whichever way the endpoint chose to send it.
    pub fn category_label(&self) -> Option<&str> {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .or(self.category_name.as_deref())
            .filter(|n| !n.is_empty())
    }

    /// The image flagged main, else the first one.
    pub fn main_image(&self) -> Option<&MenuImage> {
        self.images
            .iter()
            .find(|img| img.is_main)
            .or_else(|| self.images.first())
    }

    /// URL for the card thumbnail, falling back to the legacy field and then
    /// to the stock photo.
    pub fn main_image_url(&self) -> String {
        if let Some(img) = self.main_image() {
            return img.resolved_url();
        }
        file_url(self.image_url.as_deref()).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    }

    /// Every image URL for the detail carousel, never empty.
    pub fn carousel_urls(&self) -> Vec<String> {
        if !self.images.is_empty() {
            return self.images.iter().map(MenuImage::resolved_url).collect();
        }
        vec![self.main_image_url()]
    }
}

/// A category together with its items, as served by `menu/by-category`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MenuSection {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: i64, url: &str, is_main: bool) -> MenuImage {
        MenuImage {
            id,
            image_url: url.into(),
            is_main,
            sort_order: None,
        }
    }

    #[test]
    fn test_decodes_sparse_item() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id":7,"name":"Nastar","price":85000,"category_id":2,"is_featured":true}"#,
        )
        .unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.price, 85_000);
        assert!(item.is_featured);
        assert!(item.images.is_empty());
        assert_eq!(item.tag(), None);
    }

    #[test]
    fn test_main_image_prefers_flag_then_first() {
        let mut item = MenuItem {
            images: vec![
                image(1, "https://img/a.jpg", false),
                image(2, "https://img/b.jpg", true),
            ],
            ..Default::default()
        };
        assert_eq!(item.main_image().map(|i| i.id), Some(2));

        item.images[1].is_main = false;
        assert_eq!(item.main_image().map(|i| i.id), Some(1));
    }

    #[test]
    fn test_main_image_url_falls_back_to_legacy_then_placeholder() {
        let mut item = MenuItem {
            image_url: Some("https://img/legacy.jpg".into()),
            ..Default::default()
        };
        assert_eq!(item.main_image_url(), "https://img/legacy.jpg");

        item.image_url = None;
        assert_eq!(item.main_image_url(), PLACEHOLDER_IMAGE);
        assert_eq!(item.carousel_urls(), vec![PLACEHOLDER_IMAGE.to_string()]);
    }

    #[test]
    fn test_blank_voice_fields_count_as_absent() {
        let item = MenuItem {
            voice_file: Some("".into()),
            voice_description: Some("   ".into()),
            ..Default::default()
        };
        assert!(!item.has_voice());
    }

    #[test]
    fn test_category_label_sources() {
        let mut item = MenuItem {
            category_name: Some("Kue Kering".into()),
            ..Default::default()
        };
        assert_eq!(item.category_label(), Some("Kue Kering"));

        item.category = Some(CategoryRef { id: 1, name: "Roti".into() });
        assert_eq!(item.category_label(), Some("Roti"));
    }
}
