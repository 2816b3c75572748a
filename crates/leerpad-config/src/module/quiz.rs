use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reserved `correct-answer` value for self-assessment questions: every
/// answer is accepted and the explanation is shown regardless of the choice.
pub const SELF_ASSESSMENT: i32 = -1;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct QuizQuestion {
    /// # The question text
    pub question: String,
    /// # Answer options, in display order
    pub options: Vec<String>,
    /// # Index of the correct option
    /// `-1` marks a self-assessment question without a wrong answer
    pub correct_answer: i32,
    /// # Explanation shown after answering
    pub explanation: String,
}

impl QuizQuestion {
    #[must_use]
    pub fn is_self_assessment(&self) -> bool {
        self.correct_answer == SELF_ASSESSMENT
    }

    /// The option `correct-answer` points at, `None` for self-assessment
    /// questions and out-of-range indices.
    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        usize::try_from(self.correct_answer)
            .ok()
            .and_then(|index| self.options.get(index))
            .map(String::as_str)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Quiz {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// # Optional title of the quiz
    pub title: Option<String>,
    /// # Questions, in display order
    pub questions: Vec<QuizQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct_answer: i32) -> QuizQuestion {
        QuizQuestion {
            question: "Welke uitspraak klopt?".to_owned(),
            options: vec!["A".to_owned(), "B".to_owned(), "C".to_owned()],
            correct_answer,
            explanation: String::new(),
        }
    }

    #[test]
    fn test_correct_option() {
        assert_eq!(question(1).correct_option(), Some("B"));
        assert_eq!(question(3).correct_option(), None);
        assert_eq!(question(-2).correct_option(), None);
    }

    #[test]
    fn test_self_assessment_sentinel() {
        let q = question(SELF_ASSESSMENT);
        assert!(q.is_self_assessment());
        assert_eq!(q.correct_option(), None);
        assert!(!question(0).is_self_assessment());
    }
}
