use leerpad_utils::loader::error::LoadingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModuleError {
    #[error(transparent)]
    Parse(#[from] serde_yml::Error),

    #[error(transparent)]
    Loading(#[from] LoadingError),

    #[error("module {0} defines no lessons")]
    EmptyModule(String),

    #[error("duplicate lesson id {lesson} in module {module}")]
    DuplicateLesson { module: String, lesson: String },

    #[error("lesson {lesson} has no content")]
    EmptyContent { lesson: String },

    #[error("duplicate code example id {example} in lesson {lesson}")]
    DuplicateCodeExample { lesson: String, example: String },

    #[error("duplicate assignment id {assignment} in lesson {lesson}")]
    DuplicateAssignment { lesson: String, assignment: String },

    #[error("lesson {lesson} has a quiz without questions")]
    EmptyQuiz { lesson: String },

    #[error("quiz answer index {answer} is out of range in lesson {lesson}: {options} options")]
    AnswerOutOfRange { lesson: String, answer: i32, options: usize },
}
