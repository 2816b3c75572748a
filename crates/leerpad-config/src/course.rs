use std::collections::HashMap;

use indexmap::IndexMap;
use leerpad_utils::id_map::id_map;
use leerpad_utils::loader::LoaderTrait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::course::error::CourseError;
use crate::course::v01::course::CourseV01;
use crate::module::lesson::Lesson;
use crate::module::{self, Module};

pub mod error;
pub mod v01;

/// File names a course directory is expected to use.
pub const COURSE_MANIFEST: &str = "course.yaml";
pub const MODULES_DIR: &str = "modules";

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
#[serde(tag = "version")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { course: CourseV01 },
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "id_map")]
    #[schema(value_type = Vec<Module>)]
    pub modules: IndexMap<String, Module>,
}

impl Course {
    /// Compose loaded modules into a course, in manifest order.
    ///
    /// Modules are never reordered or deduplicated by content: only the
    /// declared id list decides what ends up in the course, and id collisions
    /// are errors.
    pub fn assemble(manifest: CourseV01, modules: Vec<Module>) -> Result<Self, CourseError> {
        let CourseV01 {
            id,
            title,
            description,
            modules: order,
        } = manifest;

        if order.is_empty() {
            tracing::error!(course_id = %id, "course references no modules");
            return Err(CourseError::EmptyCourse(id));
        }

        let mut by_id: IndexMap<String, Module> = IndexMap::with_capacity(modules.len());
        for module in modules {
            let module_id = module.id.clone();
            if by_id.insert(module_id.clone(), module).is_some() {
                tracing::error!(module_id = %module_id, "duplicate module id");
                return Err(CourseError::DuplicateModule(module_id));
            }
        }

        let mut ordered = IndexMap::with_capacity(order.len());
        for module_id in order {
            let Some(module) = by_id.shift_remove(&module_id) else {
                if ordered.contains_key(&module_id) {
                    return Err(CourseError::DuplicateModule(module_id));
                }
                tracing::error!(course_id = %id, module_id = %module_id, "module not found for course");
                return Err(CourseError::ModuleNotFound {
                    course: id,
                    module: module_id,
                });
            };
            ordered.insert(module_id, module);
        }

        for module_id in by_id.keys() {
            tracing::warn!(course_id = %id, module_id = %module_id, "module file is not referenced by the course and is ignored");
        }

        // Lesson ids end up in frontend routes, so they are unique per course,
        // not just per module.
        let mut owners: HashMap<&str, &str> = HashMap::new();
        for module in ordered.values() {
            for lesson_id in module.lessons.keys() {
                if let Some(first) = owners.insert(lesson_id.as_str(), module.id.as_str()) {
                    return Err(CourseError::DuplicateLessonId {
                        lesson: lesson_id.clone(),
                        first: first.to_owned(),
                        second: module.id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            id,
            title,
            description,
            modules: ordered,
        })
    }

    #[must_use]
    pub fn get(&self, module_id: &str) -> Option<&Module> {
        self.modules.get(module_id)
    }

    #[must_use]
    pub fn modules(&self) -> &IndexMap<String, Module> {
        &self.modules
    }

    /// Every lesson of the course, in curriculum order.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.modules.values().flat_map(|module| module.lessons.values())
    }
}

/// Load a course directory: the `course.yaml` manifest plus the module files
/// below `modules/`.
pub async fn load<L: LoaderTrait>(loader: &L) -> Result<Course, CourseError> {
    tracing::debug!("Loading course");
    let file = loader.load_file(COURSE_MANIFEST).await?;
    let VersionConfig::V01 { course } = serde_yml::from_slice::<VersionConfig>(&file.content)?;
    let modules = module::load_config(loader, MODULES_DIR).await?;
    let course = Course::assemble(course, modules)?;
    tracing::debug!(course_id = %course.id, modules = course.modules.len(), "loaded course");
    Ok(course)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::VersionConfig as ModuleVersionConfig;
    use std::fs::read_to_string;

    fn manifest(yaml: &str) -> CourseV01 {
        let VersionConfig::V01 { course } = serde_yml::from_str::<VersionConfig>(yaml).unwrap();
        course
    }

    fn fixture_module(name: &str) -> Module {
        let file = read_to_string(format!("test_configs/{name}")).unwrap();
        let ModuleVersionConfig::V01 { module } = serde_yml::from_str::<ModuleVersionConfig>(&file).unwrap();
        Module::from_v01(module).unwrap()
    }

    #[test]
    fn test_course_loading() {
        let manifest_file = read_to_string("test_configs/test.course.yaml").unwrap();
        let manifest = manifest(&manifest_file);
        assert_eq!(manifest.id, "chatgpt-gemini-masterclass");

        let modules = vec![fixture_module("test.module.yaml"), fixture_module("test.gemini.module.yaml")];
        let course = Course::assemble(manifest, modules).unwrap();
        assert_eq!(course.modules.len(), 2);
        assert!(course.get("module-1").is_some());
        assert_eq!(course.lessons().count(), 3);
    }

    #[test]
    fn test_manifest_order_wins() {
        let manifest = manifest(
            r#"
version: "0.1"
course:
  id: omgekeerd
  title: Omgekeerde volgorde
  modules: [module-2, module-1]
"#,
        );
        // Loaded in file system order, declared the other way around.
        let modules = vec![fixture_module("test.module.yaml"), fixture_module("test.gemini.module.yaml")];
        let course = Course::assemble(manifest, modules).unwrap();
        let ids: Vec<_> = course.modules.keys().cloned().collect();
        assert_eq!(ids, ["module-2", "module-1"]);
    }

    #[test]
    fn test_rebuild_is_identical() {
        let manifest_file = read_to_string("test_configs/test.course.yaml").unwrap();
        let modules = || vec![fixture_module("test.module.yaml"), fixture_module("test.gemini.module.yaml")];

        let first = Course::assemble(manifest(&manifest_file), modules()).unwrap();
        let second = Course::assemble(manifest(&manifest_file), modules()).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_unknown_module_reference() {
        let manifest = manifest(
            r#"
version: "0.1"
course:
  id: kapot
  title: Verwijst naar niets
  modules: [module-1, module-99]
"#,
        );
        let Err(CourseError::ModuleNotFound { module, .. }) =
            Course::assemble(manifest, vec![fixture_module("test.module.yaml")])
        else {
            panic!("expected ModuleNotFound error");
        };
        assert_eq!(module, "module-99");
    }

    #[test]
    fn test_empty_course() {
        let manifest = manifest(
            r#"
version: "0.1"
course:
  id: leeg
  title: Geen modules
  modules: []
"#,
        );
        let Err(CourseError::EmptyCourse(id)) = Course::assemble(manifest, vec![]) else {
            panic!("expected EmptyCourse error");
        };
        assert_eq!(id, "leeg");
    }

    #[test]
    fn test_duplicate_module_id() {
        let manifest = manifest(
            r#"
version: "0.1"
course:
  id: dubbel
  title: Dubbele module
  modules: [module-1]
"#,
        );
        let modules = vec![fixture_module("test.module.yaml"), fixture_module("test.module.yaml")];
        let Err(CourseError::DuplicateModule(id)) = Course::assemble(manifest, modules) else {
            panic!("expected DuplicateModule error");
        };
        assert_eq!(id, "module-1");
    }

    #[test]
    fn test_course_round_trip_as_json() {
        let manifest_file = read_to_string("test_configs/test.course.yaml").unwrap();
        let modules = vec![fixture_module("test.module.yaml"), fixture_module("test.gemini.module.yaml")];
        let course = Course::assemble(manifest(&manifest_file), modules).unwrap();

        let json = serde_json::to_string(&course).unwrap();
        let parsed: Course = serde_json::from_str(&json).unwrap();
        let ids: Vec<_> = parsed.modules.keys().cloned().collect();
        assert_eq!(ids, ["module-1", "module-2"]);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), json);
    }
}
