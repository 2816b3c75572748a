use leerpad_utils::id_map::ItemId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

#[derive(Serialize, Deserialize, ToSchema, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentKind {
    Project,
    Analysis,
    Challenge,
    Quiz,
    Coding,
    Practice,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Assignment {
    /// # Unique identifier of the assignment within its lesson
    pub id: String,
    /// # Title of the assignment
    pub title: String,
    /// # Description of the task
    pub description: String,
    /// # Difficulty shown to the user
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    /// # Kind of assignment
    /// Drives which workspace the frontend opens for it
    pub kind: AssignmentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// # Starter code preloaded into the workspace
    pub initial_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// # Reference solution
    /// Revealed by the frontend after the assignment is submitted
    pub solution: Option<String>,
    #[serde(default)]
    /// # Hints, in the order they are revealed
    pub hints: Vec<String>,
}

impl ItemId for Assignment {
    fn id(&self) -> &str {
        &self.id
    }
}
