pub mod admin;
pub mod category;
pub mod faq;
pub mod gallery;
pub mod menu_item;
pub mod special;
pub mod stats;

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope every API response is wrapped in.
///
/// A missing or null `data` field decodes to `T::default()`, so an empty
/// listing and an absent one look the same to callers.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of an error response.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::faq::Faq;

    #[test]
    fn test_envelope_defaults_missing_data() {
        let env: ApiEnvelope<Vec<Faq>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(env.success);
        assert!(env.data.is_empty());

        let env: ApiEnvelope<Vec<Faq>> = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(env.data.is_empty());

        let env: ApiEnvelope<Vec<Faq>> = serde_json::from_str(
            r#"{"success":true,"data":[{"id":3,"question":"Buka jam berapa?","answer":"08:00"}]}"#,
        )
        .unwrap();
        assert_eq!(env.data.len(), 1);
        assert_eq!(env.data[0].id, 3);
    }

    #[test]
    fn test_error_body_message() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Invalid credentials"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"Not found"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Not found"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"message":""}"#).unwrap();
        assert_eq!(body.into_message(), None);
    }
}
