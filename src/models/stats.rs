use serde::{Deserialize, Serialize};

/// Dashboard counters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub total_categories: u32,
    #[serde(default)]
    pub featured_items: u32,
    #[serde(default)]
    pub voice_enabled: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_camel_case_counters() {
        let stats: Stats = serde_json::from_str(
            r#"{"totalItems":24,"totalCategories":5,"featuredItems":6,"voiceEnabled":3}"#,
        )
        .unwrap();
        assert_eq!(stats.total_items, 24);
        assert_eq!(stats.voice_enabled, 3);

        let stats: Stats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, Stats::default());
    }
}
