use std::collections::HashMap;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::generic::Metadata;
use crate::module::v01::lesson::{AssignmentV01, LessonV01};
use crate::module::v01::validate_id;

#[derive(Deserialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ModuleV01 {
    #[serde(deserialize_with = "validate_id")]
    /// # Unique identifier of the module
    pub(crate) id: String,
    /// # Title of the module
    pub(crate) title: String,
    /// # Description of the module
    pub(crate) description: String,
    /// # Lessons of the module
    /// The declared order is the canonical curriculum order
    pub(crate) lessons: Vec<LessonV01>,
    /// # Optional module-wide project
    /// A larger assignment spanning the contents of the whole module
    pub(crate) project: Option<AssignmentV01>,
    pub(crate) metadata: Option<Metadata>,
    #[schemars(with = "Option<HashMap<String, serde_json::Value>>")]
    pub(crate) custom: Option<HashMap<String, serde_yml::Value>>,
}
