use leerpad_utils::id_map::ItemId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CodeExample {
    /// # Unique identifier of the example within its lesson
    pub id: String,
    /// # Title of the example
    pub title: String,
    /// # Language of the snippet
    /// Used by the frontend for syntax highlighting
    pub language: String,
    /// # The snippet itself
    /// Illustrative source code, never executed by the platform
    pub code: String,
    /// # Explanation rendered next to the snippet
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// # Deep link into the external code sandbox
    pub sandbox_url: Option<String>,
}

impl ItemId for CodeExample {
    fn id(&self) -> &str {
        &self.id
    }
}
