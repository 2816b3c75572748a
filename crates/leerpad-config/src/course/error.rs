use leerpad_utils::loader::error::LoadingError;
use thiserror::Error;

use crate::module::error::ModuleError;

#[derive(Error, Debug)]
pub enum CourseError {
    #[error(transparent)]
    Parse(#[from] serde_yml::Error),

    #[error(transparent)]
    Loading(#[from] LoadingError),

    #[error(transparent)]
    Module(#[from] ModuleError),

    #[error("course {0} references no modules")]
    EmptyCourse(String),

    #[error("course {course} references unknown module {module}")]
    ModuleNotFound { course: String, module: String },

    #[error("duplicate module id {0}")]
    DuplicateModule(String),

    #[error("lesson id {lesson} is used by module {first} and module {second}")]
    DuplicateLessonId { lesson: String, first: String, second: String },
}
