//! Form state for the admin dashboard and login page.
//!
//! Each form keeps the raw text the user typed and only turns it into an API
//! payload after validation, so the view can stay a thin binding layer.

pub mod account;
pub mod content;
pub mod image_staging;
pub mod menu_form;

use crate::error::ValidationError;

pub(crate) fn required<'a>(value: &'a str, label: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(label))
    } else {
        Ok(trimmed)
    }
}
