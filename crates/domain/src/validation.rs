use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::{DraftExercise, DraftExerciseID, DraftTemplate};

pub const TITLE_ERROR: &str = "프로그램 제목을 입력하세요.";
pub const DESCRIPTION_ERROR: &str = "전체 가이드를 입력하세요.";
pub const SUMMARY_SUFFIX: &str = "을 입력해주세요";
pub const FALLBACK_SUMMARY: &str = "운동 이름, 세트 수를 입력해주세요";

/// Required fields of a draft exercise, in the order they are checked and reported.
#[derive(strum::EnumIter, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExerciseField {
    Name,
    TargetSets,
    RepRange,
    RestSeconds,
}

impl ExerciseField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ExerciseField::Name => "운동명",
            ExerciseField::TargetSets => "세트 수",
            ExerciseField::RepRange => "횟수(최소/최대)",
            ExerciseField::RestSeconds => "휴식 시간(초)",
        }
    }

    fn check(self, exercise: &DraftExercise) -> Option<IssueKind> {
        match self {
            ExerciseField::Name => exercise.name.trim().is_empty().then_some(IssueKind::Missing),
            ExerciseField::TargetSets => match exercise.target_sets.value() {
                None => Some(IssueKind::Missing),
                Some(sets) if sets < 1 => Some(IssueKind::OutOfRange),
                Some(_) => None,
            },
            ExerciseField::RepRange => (exercise.rep_range.min.is_unset()
                || exercise.rep_range.max.is_unset())
            .then_some(IssueKind::Missing),
            ExerciseField::RestSeconds => match exercise.rest_seconds.value() {
                None => Some(IssueKind::Missing),
                Some(rest) if rest < 0 => Some(IssueKind::OutOfRange),
                Some(_) => None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseIssue {
    pub field: ExerciseField,
    pub kind: IssueKind,
}

/// Determines all missing or invalid required fields of an exercise.
///
/// This is the single check used both when a field is edited and when a template is submitted.
#[must_use]
pub fn missing_fields(exercise: &DraftExercise) -> Vec<ExerciseIssue> {
    ExerciseField::iter()
        .filter_map(|field| field.check(exercise).map(|kind| ExerciseIssue { field, kind }))
        .collect()
}

#[must_use]
pub fn missing_summary(exercise: &DraftExercise) -> Option<String> {
    let issues = missing_fields(exercise);
    if issues.is_empty() {
        return None;
    }
    Some(summary(&issues))
}

fn summary(issues: &[ExerciseIssue]) -> String {
    let labels = issues
        .iter()
        .map(|issue| issue.field.label())
        .collect::<Vec<_>>();
    format!("{}{SUMMARY_SUFFIX}", labels.join(", "))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseError {
    pub issues: Vec<ExerciseIssue>,
}

impl ExerciseError {
    #[must_use]
    pub fn summary(&self) -> String {
        if self.issues.is_empty() {
            return FALLBACK_SUMMARY.to_string();
        }
        summary(&self.issues)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub title_error: Option<String>,
    pub description_error: Option<String>,
    pub exercise_errors: BTreeMap<DraftExerciseID, ExerciseError>,
}

impl ValidationResult {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.title_error.is_none()
            && self.description_error.is_none()
            && self.exercise_errors.is_empty()
    }

    #[must_use]
    pub fn exercise_summary(&self, id: DraftExerciseID) -> Option<String> {
        self.exercise_errors.get(&id).map(ExerciseError::summary)
    }
}

#[must_use]
pub fn exercise_errors(exercises: &[DraftExercise]) -> BTreeMap<DraftExerciseID, ExerciseError> {
    exercises
        .iter()
        .filter_map(|exercise| {
            let issues = missing_fields(exercise);
            if issues.is_empty() {
                None
            } else {
                Some((exercise.id, ExerciseError { issues }))
            }
        })
        .collect()
}

#[must_use]
pub fn validate(template: &DraftTemplate) -> ValidationResult {
    ValidationResult {
        title_error: template
            .title
            .trim()
            .is_empty()
            .then(|| TITLE_ERROR.to_string()),
        description_error: template
            .description
            .trim()
            .is_empty()
            .then(|| DESCRIPTION_ERROR.to_string()),
        exercise_errors: exercise_errors(&template.exercises),
    }
}
