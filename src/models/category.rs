use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Category embedded in a menu item response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

/// Create/update payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CategoryInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}
