use super::required;
use crate::error::ValidationError;
use crate::models::category::CategoryInput;
use crate::models::faq::{Faq, FaqInput};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaqForm {
    pub question: String,
    pub answer: String,
}

impl FaqForm {
    pub fn from_faq(faq: &Faq) -> Self {
        Self {
            question: faq.question.clone(),
            answer: faq.answer.clone(),
        }
    }

    pub fn to_input(&self) -> Result<FaqInput, ValidationError> {
        Ok(FaqInput {
            question: required(&self.question, "Question")?.to_string(),
            answer: required(&self.answer, "Answer")?.to_string(),
        })
    }
}

/// Payload for the inline "+ Add category" field; `None` while it is blank.
pub fn new_category(name: &str) -> Option<CategoryInput> {
    let name = name.trim();
    (!name.is_empty()).then(|| CategoryInput::named(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_requires_both_fields() {
        let form = FaqForm {
            question: "Bisa pesan antar?".into(),
            answer: String::new(),
        };
        assert_eq!(form.to_input(), Err(ValidationError::Required("Answer")));

        let form = FaqForm {
            question: " Bisa pesan antar? ".into(),
            answer: "Bisa, via WhatsApp.".into(),
        };
        let input = form.to_input().unwrap();
        assert_eq!(input.question, "Bisa pesan antar?");
    }

    #[test]
    fn test_new_category_trims() {
        assert_eq!(new_category("   "), None);
        assert_eq!(new_category(" Roti Manis ").map(|c| c.name), Some("Roti Manis".to_string()));
    }
}
