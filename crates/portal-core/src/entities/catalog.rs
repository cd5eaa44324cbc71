use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A service offered through the portal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name_ar: String,
    pub name_en: String,
    pub description_ar: String,
    pub description_en: String,
    pub icon: String,
    pub category: String,
    pub base_price: f64,
    pub estimated_days: u32,
    #[serde(default)]
    pub required_documents: Vec<String>,
}

/// One "how it works" step shown on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub step: String,
    pub step_en: String,
    pub title_ar: String,
    pub title_en: String,
    pub desc_ar: String,
    pub desc_en: String,
    pub icon: String,
    pub color: String,
}
