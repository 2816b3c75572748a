pub mod lesson;
pub mod module;

/// Content ids are kebab-case: they end up in frontend routes and anchors.
pub(crate) fn validate_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let id: String = serde::Deserialize::deserialize(deserializer)?;
    let well_formed = !id.is_empty()
        && !id.starts_with('-')
        && !id.ends_with('-')
        && id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !well_formed {
        return Err(serde::de::Error::custom(format!(
            "The id '{id}' is not kebab-case. Ids may only contain lowercase letters, digits and '-'."
        )));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::lesson::LessonV01;

    #[test]
    fn test_malformed_id_is_rejected() {
        let result = serde_yml::from_str::<LessonV01>(
            "{id: Lesson_1, title: t, duration: 5 minuten, content: tekst}",
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("kebab-case"), "unexpected error: {message}");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = serde_yml::from_str::<LessonV01>(
            "{id: lesson-1-1, title: t, duration: 5 minuten, content: tekst, body: oeps}",
        );
        assert!(result.is_err());
    }
}
