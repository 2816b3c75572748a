use std::collections::HashMap;

use futures::StreamExt;
use indexmap::IndexMap;
use leerpad_utils::id_map::{ItemId, id_map};
use leerpad_utils::loader::file::File;
use leerpad_utils::loader::{Filter, LoaderTrait};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::generic::Metadata;
use crate::module::assignment::Assignment;
use crate::module::error::ModuleError;
use crate::module::lesson::Lesson;

pub mod assignment;
pub mod code_example;
pub mod error;
pub mod lesson;
pub mod quiz;
pub mod resource;
pub mod v01;

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
#[serde(tag = "version")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { module: v01::module::ModuleV01 },
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(with = "id_map")]
    #[schema(value_type = Vec<Lesson>)]
    pub lessons: IndexMap<String, Lesson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Assignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub custom: Option<HashMap<String, serde_yml::Value>>,
}

impl ItemId for Module {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Module {
    pub(crate) fn from_v01(module: v01::module::ModuleV01) -> Result<Self, ModuleError> {
        let v01::module::ModuleV01 {
            id,
            title,
            description,
            lessons,
            project,
            metadata,
            custom,
        } = module;

        if lessons.is_empty() {
            tracing::error!(module_id = %id, "module defines no lessons");
            return Err(ModuleError::EmptyModule(id));
        }

        let mut converted = IndexMap::with_capacity(lessons.len());
        for lesson in lessons {
            let lesson = Lesson::from_v01(lesson)?;
            let lesson_id = lesson.id.clone();
            if converted.insert(lesson_id.clone(), lesson).is_some() {
                tracing::error!(module_id = %id, lesson_id = %lesson_id, "duplicate lesson id");
                return Err(ModuleError::DuplicateLesson {
                    module: id,
                    lesson: lesson_id,
                });
            }
        }

        Ok(Self {
            id,
            title,
            description,
            lessons: converted,
            project,
            metadata,
            custom,
        })
    }

    #[must_use]
    pub fn get(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.get(lesson_id)
    }

    #[must_use]
    pub fn lessons(&self) -> &IndexMap<String, Lesson> {
        &self.lessons
    }
}

/// Load every module file below `path`, in directory order. Ordering across
/// modules is decided by the course manifest, not by the file system.
pub async fn load_config<L: LoaderTrait>(loader: &L, path: &str) -> Result<Vec<Module>, ModuleError> {
    tracing::debug!("Loading modules");
    let mut modules = Vec::new();
    let mut stream = loader.load_dir(path, Filter::Yaml);
    while let Some(file) = stream.next().await {
        modules.push(load(&file?)?);
    }
    Ok(modules)
}

fn load(file: &File) -> Result<Module, ModuleError> {
    let VersionConfig::V01 { module } = serde_yml::from_slice::<VersionConfig>(&file.content)?;
    let module = Module::from_v01(module)?;
    tracing::debug!(module_id = %module.id, source = %file.metadata.key, "loaded module");
    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::read_to_string;

    #[test]
    fn test_module_loading() {
        let module_file = read_to_string("test_configs/test.module.yaml").unwrap();
        let VersionConfig::V01 { module } = serde_yml::from_str::<VersionConfig>(&module_file).unwrap();
        assert_eq!(module.id, "module-1");

        let module = Module::from_v01(module).unwrap();
        assert_eq!(module.lessons.len(), 2);
        let lesson = module.get("lesson-1-1").unwrap();
        assert_eq!(lesson.duration, "60 minuten");
        assert_eq!(lesson.code_examples.len(), 1);
        assert!(module.get("lesson-9-9").is_none());
    }

    #[test]
    fn test_lesson_order_is_preserved() {
        let module_file = read_to_string("test_configs/test.module.yaml").unwrap();
        let VersionConfig::V01 { module } = serde_yml::from_str::<VersionConfig>(&module_file).unwrap();
        let module = Module::from_v01(module).unwrap();
        let ids: Vec<_> = module.lessons.keys().cloned().collect();
        assert_eq!(ids, ["lesson-1-1", "lesson-1-2"]);
    }

    #[test]
    fn test_empty_module() {
        let yaml = r#"
version: "0.1"
module:
  id: module-1
  title: Leeg
  description: Zonder lessen.
  lessons: []
"#;
        let VersionConfig::V01 { module } = serde_yml::from_str::<VersionConfig>(yaml).unwrap();
        let Err(ModuleError::EmptyModule(id)) = Module::from_v01(module) else {
            panic!("expected EmptyModule error");
        };
        assert_eq!(id, "module-1");
    }

    #[test]
    fn test_duplicate_lesson_id() {
        let yaml = r#"
version: "0.1"
module:
  id: module-1
  title: Dubbel
  description: Twee lessen met hetzelfde id.
  lessons:
    - id: lesson-1-1
      title: Eerste
      duration: 10 minuten
      content: Tekst.
    - id: lesson-1-1
      title: Tweede
      duration: 10 minuten
      content: Tekst.
"#;
        let VersionConfig::V01 { module } = serde_yml::from_str::<VersionConfig>(yaml).unwrap();
        let Err(ModuleError::DuplicateLesson { module, lesson }) = Module::from_v01(module) else {
            panic!("expected DuplicateLesson error");
        };
        assert_eq!(module, "module-1");
        assert_eq!(lesson, "lesson-1-1");
    }
}
