use futures::StreamExt;
use indexmap::IndexMap;
use leerpad_utils::loader::error::LoadingError;
use leerpad_utils::loader::{Filter, LoaderTrait};
use serde::Serialize;
use url::Url;

use crate::course;
use crate::course::v01::course::CourseV01;
use crate::module;
use crate::module::v01::lesson::LessonV01;
use crate::module::v01::module::ModuleV01;

#[derive(Serialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    DuplicateId,
    EmptyCollection,
    MissingLanguageTag,
    DanglingReference,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Where in the course tree the violation sits, e.g. `module-1/lesson-1-2`.
    pub path: String,
    pub kind: ViolationKind,
    pub message: String,
}

/// Outcome of a validation pass. Errors block publishing, warnings do not.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, kind: ViolationKind, message: impl Into<String>) {
        self.errors.push(Violation {
            path: path.into(),
            kind,
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, kind: ViolationKind, message: impl Into<String>) {
        self.warnings.push(Violation {
            path: path.into(),
            kind,
            message: message.into(),
        });
    }
}

/// Walk a raw course tree and collect every violation instead of failing on
/// the first one. Pure: the same input always yields the same report.
///
/// Modules are passed together with the key of the file they came from so
/// duplicate ids can point the author at both files.
pub fn validate_course(manifest: &CourseV01, modules: &[(String, ModuleV01)]) -> ValidationReport {
    let mut report = ValidationReport::default();

    validate_manifest(manifest, modules, &mut report);

    let mut lesson_owners: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for (_, module) in modules {
        validate_module(module, &mut report);
        for lesson in &module.lessons {
            let owners = lesson_owners.entry(&lesson.id).or_default();
            if !owners.contains(&module.id.as_str()) {
                owners.push(&module.id);
            }
        }
    }

    // Lesson ids are routing keys: collisions across modules break deep links
    // even when every module is valid on its own.
    for (lesson_id, owners) in lesson_owners {
        if owners.len() > 1 {
            report.error(
                lesson_id,
                ViolationKind::DuplicateId,
                format!("lesson id '{}' is declared by modules {}", lesson_id, owners.join(" and ")),
            );
        }
    }

    report
}

fn validate_manifest(manifest: &CourseV01, modules: &[(String, ModuleV01)], report: &mut ValidationReport) {
    if manifest.modules.is_empty() {
        report.error(
            &manifest.id,
            ViolationKind::EmptyCollection,
            "course references no modules",
        );
    }

    let mut listed: IndexMap<&str, Vec<usize>> = IndexMap::new();
    for (position, module_id) in manifest.modules.iter().enumerate() {
        listed.entry(module_id).or_default().push(position);
    }
    for (module_id, positions) in &listed {
        if positions.len() > 1 {
            report.error(
                format!("{}/modules", manifest.id),
                ViolationKind::DuplicateId,
                format!("module '{module_id}' is listed {} times", positions.len()),
            );
        }
    }

    let mut declared: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for (source, module) in modules {
        declared.entry(&module.id).or_default().push(source);
    }
    for (module_id, sources) in &declared {
        if sources.len() > 1 {
            report.error(
                *module_id,
                ViolationKind::DuplicateId,
                format!("module id '{}' is declared by {}", module_id, sources.join(" and ")),
            );
        }
    }

    for (position, module_id) in manifest.modules.iter().enumerate() {
        if !declared.contains_key(module_id.as_str()) {
            report.error(
                format!("{}/modules[{position}]", manifest.id),
                ViolationKind::DanglingReference,
                format!("references unknown module '{module_id}'"),
            );
        }
    }
}

fn validate_module(module: &ModuleV01, report: &mut ValidationReport) {
    if module.lessons.is_empty() {
        report.error(&module.id, ViolationKind::EmptyCollection, "module defines no lessons");
    }

    let mut ids: IndexMap<&str, Vec<usize>> = IndexMap::new();
    for (position, lesson) in module.lessons.iter().enumerate() {
        ids.entry(&lesson.id).or_default().push(position);
    }
    for (lesson_id, positions) in &ids {
        if positions.len() > 1 {
            let paths: Vec<_> = positions.iter().map(|p| format!("lessons[{p}]")).collect();
            report.error(
                format!("{}/{}", module.id, lesson_id),
                ViolationKind::DuplicateId,
                format!(
                    "lesson id '{}' is declared by {} of module '{}'",
                    lesson_id,
                    paths.join(" and "),
                    module.id
                ),
            );
        }
    }

    for lesson in &module.lessons {
        validate_lesson(&module.id, lesson, report);
    }
}

fn validate_lesson(module_id: &str, lesson: &LessonV01, report: &mut ValidationReport) {
    let path = format!("{}/{}", module_id, lesson.id);

    if lesson.content.trim().is_empty() {
        report.error(&path, ViolationKind::EmptyCollection, "lesson content is empty");
    }
    for line in untagged_fences(&lesson.content) {
        report.warn(
            &path,
            ViolationKind::MissingLanguageTag,
            format!("fenced code block at line {line} has no language tag"),
        );
    }

    let mut example_ids: IndexMap<&str, usize> = IndexMap::new();
    for example in &lesson.code_examples {
        let example_path = format!("{path}/code-examples/{}", example.id);
        if *example_ids.entry(&example.id).and_modify(|n| *n += 1).or_insert(1) > 1 {
            report.error(
                &example_path,
                ViolationKind::DuplicateId,
                format!("code example id '{}' is declared more than once", example.id),
            );
        }
        if example.language.trim().is_empty() {
            report.warn(
                &example_path,
                ViolationKind::MissingLanguageTag,
                "code example has no language",
            );
        }
        if let Some(sandbox_url) = &example.sandbox_url {
            if Url::parse(sandbox_url).is_err() {
                report.warn(
                    &example_path,
                    ViolationKind::DanglingReference,
                    format!("sandbox url '{sandbox_url}' is not a valid URL"),
                );
            }
        }
    }

    let mut assignment_ids: IndexMap<&str, usize> = IndexMap::new();
    for assignment in &lesson.assignments {
        if *assignment_ids.entry(&assignment.id).and_modify(|n| *n += 1).or_insert(1) > 1 {
            report.error(
                format!("{path}/assignments/{}", assignment.id),
                ViolationKind::DuplicateId,
                format!("assignment id '{}' is declared more than once", assignment.id),
            );
        }
    }

    if let Some(quiz) = &lesson.quiz {
        if quiz.questions.is_empty() {
            report.error(
                format!("{path}/quiz"),
                ViolationKind::EmptyCollection,
                "quiz has no questions",
            );
        }
        for (position, question) in quiz.questions.iter().enumerate() {
            let question_path = format!("{path}/quiz/questions[{position}]");
            if question.options.is_empty() {
                report.error(&question_path, ViolationKind::EmptyCollection, "question has no options");
            } else if !question.is_self_assessment() && question.correct_option().is_none() {
                report.error(
                    &question_path,
                    ViolationKind::DanglingReference,
                    format!(
                        "correct-answer {} does not reference any of the {} options",
                        question.correct_answer,
                        question.options.len()
                    ),
                );
            }
        }
    }

    for (position, resource) in lesson.resources.iter().enumerate() {
        if Url::parse(&resource.url).is_err() {
            report.warn(
                format!("{path}/resources[{position}]"),
                ViolationKind::DanglingReference,
                format!("resource url '{}' is not a valid URL", resource.url),
            );
        }
    }
}

/// Line numbers (1-based) of opening fences without a language tag.
fn untagged_fences(content: &str) -> Vec<usize> {
    let mut untagged = Vec::new();
    let mut open = false;
    for (number, line) in content.lines().enumerate() {
        if let Some(info) = line.trim_start().strip_prefix("```") {
            if open {
                open = false;
                continue;
            }
            open = true;
            if info.trim().is_empty() {
                untagged.push(number + 1);
            }
        }
    }
    untagged
}

/// Load the raw course tree below `loader` and validate it.
///
/// Files that do not parse at all are fatal: a malformed document cannot be
/// walked, so it never reaches the report.
pub async fn run<L: LoaderTrait>(loader: &L) -> Result<ValidationReport, LoadingError> {
    let file = loader.load_file(course::COURSE_MANIFEST).await?;
    let course::VersionConfig::V01 { course: manifest } =
        serde_yml::from_slice::<course::VersionConfig>(&file.content)?;

    let mut modules = Vec::new();
    let mut stream = loader.load_dir(course::MODULES_DIR, Filter::Yaml);
    while let Some(file) = stream.next().await {
        let file = file?;
        tracing::debug!(source = %file.metadata.key, hash = ?file.metadata.hash, "collected module file");
        let module::VersionConfig::V01 { module } = serde_yml::from_slice::<module::VersionConfig>(&file.content)?;
        modules.push((file.metadata.key.clone(), module));
    }

    Ok(validate_course(&manifest, &modules))
}
