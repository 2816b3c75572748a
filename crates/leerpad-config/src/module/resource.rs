use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Article,
    Documentation,
    Dataset,
    Guide,
    Tool,
    Template,
    Video,
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind_str = match self {
            ResourceKind::Article => "article",
            ResourceKind::Documentation => "documentation",
            ResourceKind::Dataset => "dataset",
            ResourceKind::Guide => "guide",
            ResourceKind::Tool => "tool",
            ResourceKind::Template => "template",
            ResourceKind::Video => "video",
        };
        write!(f, "{kind_str}")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Resource {
    /// # Display title of the resource
    pub title: String,
    /// # Link to the resource
    pub url: String,
    #[serde(rename = "type")]
    /// # Kind of resource
    /// Used by the frontend to pick an icon for the link
    pub kind: ResourceKind,
}
