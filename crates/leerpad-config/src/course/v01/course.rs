use schemars::JsonSchema;
use serde::Deserialize;

use crate::module::v01::validate_id;

#[derive(Debug, Deserialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CourseV01 {
    #[serde(deserialize_with = "validate_id")]
    /// # Unique identifier of the course
    pub(crate) id: String,
    /// # Title of the course
    pub(crate) title: String,
    /// # Description of the course
    pub(crate) description: Option<String>,
    /// # Module ids in curriculum order
    /// Each entry references a module file in the modules/ directory.
    /// The declared order is the canonical display and progression order
    pub(crate) modules: Vec<String>,
}
