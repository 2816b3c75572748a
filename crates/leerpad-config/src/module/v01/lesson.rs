use std::collections::HashMap;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::generic::Metadata;
use crate::module::assignment::Assignment;
use crate::module::code_example::CodeExample;
use crate::module::quiz::Quiz;
use crate::module::resource::Resource;
use crate::module::v01::validate_id;

pub(crate) type CodeExampleV01 = CodeExample;
pub(crate) type AssignmentV01 = Assignment;
pub(crate) type QuizV01 = Quiz;
pub(crate) type ResourceV01 = Resource;

#[derive(Debug, Deserialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct LessonV01 {
    #[serde(deserialize_with = "validate_id")]
    /// # Unique identifier of the lesson
    /// Lesson ids are used in frontend routes and must be unique across the whole course
    pub(crate) id: String,
    /// # Title of the lesson
    pub(crate) title: String,
    /// # Estimated duration as shown to the user
    /// Free text in the course language, e.g. "60 minuten"
    pub(crate) duration: String,
    /// # Body of the lesson as markdown
    /// Fenced code blocks should carry a language tag for syntax highlighting
    pub(crate) content: String,
    #[serde(default)]
    /// # Code examples shown with the lesson
    pub(crate) code_examples: Vec<CodeExampleV01>,
    #[serde(default)]
    /// # Assignments attached to the lesson
    pub(crate) assignments: Vec<AssignmentV01>,
    /// # Optional quiz closing the lesson
    pub(crate) quiz: Option<QuizV01>,
    #[serde(default)]
    /// # Further reading and tooling links
    pub(crate) resources: Vec<ResourceV01>,
    pub(crate) metadata: Option<Metadata>,
    #[schemars(with = "Option<HashMap<String, serde_json::Value>>")]
    /// # Free-form extras passed through to the frontend
    /// Used for interactive placeholders the renderer resolves itself
    pub(crate) custom: Option<HashMap<String, serde_yml::Value>>,
}
