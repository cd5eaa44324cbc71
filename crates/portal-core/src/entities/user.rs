use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The logged-in citizen. Identified by QID in the mock login flow.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub qid: String,
    pub email: String,
    pub name_ar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
