use std::collections::HashMap;

use indexmap::IndexMap;
use leerpad_utils::id_map::{ItemId, id_map};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::generic::Metadata;
use crate::module::assignment::Assignment;
use crate::module::code_example::CodeExample;
use crate::module::error::ModuleError;
use crate::module::quiz::Quiz;
use crate::module::resource::Resource;
use crate::module::v01::lesson::LessonV01;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    /// Estimated duration as authored, e.g. "60 minuten". Shown verbatim.
    pub duration: String,
    /// Markdown body of the lesson.
    pub content: String,
    #[serde(with = "id_map")]
    #[schema(value_type = Vec<CodeExample>)]
    pub code_examples: IndexMap<String, CodeExample>,
    #[serde(with = "id_map")]
    #[schema(value_type = Vec<Assignment>)]
    pub assignments: IndexMap<String, Assignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
    pub resources: Vec<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub custom: Option<HashMap<String, serde_yml::Value>>,
}

impl ItemId for Lesson {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Lesson {
    pub(crate) fn from_v01(lesson: LessonV01) -> Result<Self, ModuleError> {
        let LessonV01 {
            id,
            title,
            duration,
            content,
            code_examples,
            assignments,
            quiz,
            resources,
            metadata,
            custom,
        } = lesson;

        if content.trim().is_empty() {
            tracing::error!(lesson_id = %id, "lesson has no content");
            return Err(ModuleError::EmptyContent { lesson: id });
        }

        let mut examples = IndexMap::with_capacity(code_examples.len());
        for example in code_examples {
            let example_id = example.id.clone();
            if examples.insert(example_id.clone(), example).is_some() {
                tracing::error!(lesson_id = %id, example_id = %example_id, "duplicate code example id");
                return Err(ModuleError::DuplicateCodeExample {
                    lesson: id,
                    example: example_id,
                });
            }
        }

        let mut tasks = IndexMap::with_capacity(assignments.len());
        for assignment in assignments {
            let assignment_id = assignment.id.clone();
            if tasks.insert(assignment_id.clone(), assignment).is_some() {
                tracing::error!(lesson_id = %id, assignment_id = %assignment_id, "duplicate assignment id");
                return Err(ModuleError::DuplicateAssignment {
                    lesson: id,
                    assignment: assignment_id,
                });
            }
        }

        if let Some(quiz) = &quiz {
            if quiz.questions.is_empty() {
                tracing::error!(lesson_id = %id, "quiz has no questions");
                return Err(ModuleError::EmptyQuiz { lesson: id });
            }
            for question in &quiz.questions {
                if !question.is_self_assessment() && question.correct_option().is_none() {
                    tracing::error!(
                        lesson_id = %id,
                        answer = question.correct_answer,
                        options = question.options.len(),
                        "quiz answer index out of range"
                    );
                    return Err(ModuleError::AnswerOutOfRange {
                        lesson: id,
                        answer: question.correct_answer,
                        options: question.options.len(),
                    });
                }
            }
        }

        Ok(Self {
            id,
            title,
            duration,
            content,
            code_examples: examples,
            assignments: tasks,
            quiz,
            resources,
            metadata,
            custom,
        })
    }

    #[must_use]
    pub fn code_example(&self, id: &str) -> Option<&CodeExample> {
        self.code_examples.get(id)
    }

    #[must_use]
    pub fn assignment(&self, id: &str) -> Option<&Assignment> {
        self.assignments.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::quiz::QuizQuestion;

    fn lesson_v01(yaml: &str) -> LessonV01 {
        serde_yml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_duplicate_code_example() {
        let lesson = lesson_v01(
            r"
id: lesson-1-1
title: Prompts
duration: 30 minuten
content: Eerste les.
code-examples:
  - id: example-1
    title: a
    language: python
    code: print(1)
    explanation: eerste
  - id: example-1
    title: b
    language: python
    code: print(2)
    explanation: tweede
",
        );
        let Err(ModuleError::DuplicateCodeExample { lesson, example }) = Lesson::from_v01(lesson) else {
            panic!("expected DuplicateCodeExample error");
        };
        assert_eq!(lesson, "lesson-1-1");
        assert_eq!(example, "example-1");
    }

    #[test]
    fn test_empty_content() {
        let lesson = lesson_v01("{id: lesson-1-1, title: Leeg, duration: 5 minuten, content: \"  \"}");
        let Err(ModuleError::EmptyContent { lesson }) = Lesson::from_v01(lesson) else {
            panic!("expected EmptyContent error");
        };
        assert_eq!(lesson, "lesson-1-1");
    }

    #[test]
    fn test_answer_out_of_range() {
        let lesson = lesson_v01(
            r"
id: lesson-1-1
title: Quizles
duration: 10 minuten
content: Les met quiz.
quiz:
  questions:
    - question: Hoeveel opties zijn er?
      options: [Een, Twee, Drie, Vier]
      correct-answer: 5
      explanation: n.v.t.
",
        );
        let Err(ModuleError::AnswerOutOfRange { answer: 5, options: 4, .. }) = Lesson::from_v01(lesson) else {
            panic!("expected AnswerOutOfRange error");
        };
    }

    #[test]
    fn test_self_assessment_is_accepted() {
        let lesson = lesson_v01(
            r"
id: lesson-1-1
title: Zelftest
duration: 10 minuten
content: Les met zelftest.
quiz:
  questions:
    - question: Welke persona past bij jou?
      options: [Coach, Analist, Creatief]
      correct-answer: -1
      explanation: Elke keuze is goed.
",
        );
        let lesson = Lesson::from_v01(lesson).unwrap();
        let questions: &[QuizQuestion] = &lesson.quiz.as_ref().unwrap().questions;
        assert!(questions[0].is_self_assessment());
    }
}
