use super::required;
use crate::api::Multipart;
use crate::error::ValidationError;
use crate::models::menu_item::MenuItem;

/// Fields of the add/edit menu item modal, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuForm {
    pub name: String,
    /// Selected `<option>` value; empty until a category is picked.
    pub category_id: String,
    pub price: String,
    pub price_display: String,
    pub description: String,
    pub voice_description: String,
    pub tag: String,
    pub is_featured: bool,
}

impl MenuForm {
    /// Empty form preselecting the first category, if there is one.
    pub fn blank(default_category: Option<i64>) -> Self {
        Self {
            category_id: default_category.map(|id| id.to_string()).unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            category_id: item.category_id.map(|id| id.to_string()).unwrap_or_default(),
            price: item.price.to_string(),
            price_display: item.price_display.clone().unwrap_or_default(),
            description: item.description.clone(),
            voice_description: item.voice_description.clone().unwrap_or_default(),
            tag: item.tag.clone().unwrap_or_default(),
            is_featured: item.is_featured,
        }
    }

    pub fn parsed_price(&self) -> Result<i64, ValidationError> {
        let raw = required(&self.price, "Price")?;
        match raw.parse::<i64>() {
            Ok(price) if price >= 0 => Ok(price),
            _ => Err(ValidationError::InvalidPrice),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        required(&self.name, "Item name")?;
        required(&self.category_id, "Category")?;
        self.parsed_price()?;
        required(&self.description, "Description")?;
        Ok(())
    }

    /// Multipart body for create/update. Blank optional fields are left out;
    /// the voice clip is attached by the caller when one was picked.
    pub fn to_multipart(&self) -> Result<Multipart, ValidationError> {
        self.validate()?;
        let price = self.parsed_price()?;
        Ok(Multipart::new()
            .text_if_present("name", self.name.trim())
            .text_if_present("category_id", self.category_id.trim())
            .text("price", price.to_string())
            .text_if_present("price_display", self.price_display.trim())
            .text_if_present("description", self.description.trim())
            .text_if_present("voice_description", self.voice_description.trim())
            .text_if_present("tag", self.tag.trim())
            .text("is_featured", self.is_featured.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> MenuForm {
        MenuForm {
            name: "Nastar Premium".into(),
            category_id: "2".into(),
            price: "85000".into(),
            description: "Nastar lembut isi selai nanas".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_preselects_first_category() {
        assert_eq!(MenuForm::blank(Some(5)).category_id, "5");
        assert_eq!(MenuForm::blank(None).category_id, "");
    }

    #[test]
    fn test_required_fields() {
        assert!(filled().validate().is_ok());

        let mut form = filled();
        form.name = "  ".into();
        assert_eq!(form.validate(), Err(ValidationError::Required("Item name")));

        let mut form = filled();
        form.category_id.clear();
        assert_eq!(form.validate(), Err(ValidationError::Required("Category")));

        let mut form = filled();
        form.price.clear();
        assert_eq!(form.validate(), Err(ValidationError::Required("Price")));

        let mut form = filled();
        form.description.clear();
        assert_eq!(form.validate(), Err(ValidationError::Required("Description")));
    }

    #[test]
    fn test_price_must_be_whole_rupiah() {
        let mut form = filled();
        form.price = "55.5".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidPrice));
        form.price = "-10".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidPrice));
        form.price = " 55000 ".into();
        assert_eq!(form.parsed_price(), Ok(55_000));
    }

    #[test]
    fn test_multipart_omits_blank_optionals() {
        let mut form = filled();
        form.tag = "Best Seller".into();
        let body = form.to_multipart().unwrap();
        assert_eq!(
            body.field_names(),
            vec!["name", "category_id", "price", "description", "tag", "is_featured"]
        );
        assert_eq!(body.field("price"), Some("85000"));
        assert_eq!(body.field("is_featured"), Some("false"));
    }

    #[test]
    fn test_from_item_round_trips_into_form() {
        let item = MenuItem {
            id: 9,
            name: "Bolu Pandan".into(),
            category_id: Some(3),
            price: 60_000,
            price_display: Some("60K".into()),
            description: "Bolu pandan wangi".into(),
            tag: Some("Baru".into()),
            is_featured: true,
            ..Default::default()
        };
        let form = MenuForm::from_item(&item);
        assert_eq!(form.category_id, "3");
        assert_eq!(form.price, "60000");
        assert_eq!(form.price_display, "60K");
        assert!(form.is_featured);
        assert_eq!(form.voice_description, "");
    }
}
