use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, ValidationResult, missing_fields, validate};

#[allow(async_fn_in_trait)]
pub trait TemplateService {
    async fn create_template(&self, template: Template) -> Result<Template, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait TemplateRepository {
    async fn create_template(&self, template: Template) -> Result<Template, CreateError>;
}

/// A workout program template as it is edited in a form.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftTemplate {
    pub title: String,
    pub description: String,
    pub exercises: Vec<DraftExercise>,
}

impl DraftTemplate {
    /// Creates an empty draft containing a single blank exercise.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            exercises: vec![DraftExercise::new()],
        }
    }

    #[must_use]
    pub fn exercise(&self, id: DraftExerciseID) -> Option<&DraftExercise> {
        self.exercises.iter().find(|e| e.id == id)
    }
}

impl Default for DraftTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftExercise {
    pub id: DraftExerciseID,
    pub name: String,
    pub target_sets: NumberInput,
    pub rep_range: DraftRepRange,
    pub rest_seconds: NumberInput,
    pub intention: String,
    pub note: String,
}

impl DraftExercise {
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(DraftExerciseID::new())
    }

    #[must_use]
    pub fn with_id(id: DraftExerciseID) -> Self {
        Self {
            id,
            name: String::new(),
            target_sets: NumberInput::Unset,
            rep_range: DraftRepRange::default(),
            rest_seconds: NumberInput::Unset,
            intention: String::new(),
            note: String::new(),
        }
    }

    /// Returns a copy of the exercise with a single field changed.
    #[must_use]
    pub fn edited(&self, edit: ExerciseEdit) -> Self {
        let mut exercise = self.clone();
        match edit {
            ExerciseEdit::Name(name) => exercise.name = name,
            ExerciseEdit::TargetSets(sets) => exercise.target_sets = sets,
            ExerciseEdit::MinReps(min) => exercise.rep_range.min = min,
            ExerciseEdit::MaxReps(max) => exercise.rep_range.max = max,
            ExerciseEdit::RestSeconds(rest) => exercise.rest_seconds = rest,
            ExerciseEdit::Intention(intention) => exercise.intention = intention,
            ExerciseEdit::Note(note) => exercise.note = note,
        }
        exercise
    }
}

impl Default for DraftExercise {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deref, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DraftExerciseID(Uuid);

impl DraftExerciseID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DraftExerciseID {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for DraftExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for DraftExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DraftRepRange {
    pub min: NumberInput,
    pub max: NumberInput,
}

/// Content of a numeric form field. `Unset` is distinct from `Value(0)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NumberInput {
    #[default]
    Unset,
    Value(i32),
}

impl NumberInput {
    #[must_use]
    pub fn value(self) -> Option<i32> {
        match self {
            NumberInput::Unset => None,
            NumberInput::Value(value) => Some(value),
        }
    }

    #[must_use]
    pub fn is_unset(self) -> bool {
        self == NumberInput::Unset
    }
}

impl From<i32> for NumberInput {
    fn from(value: i32) -> Self {
        NumberInput::Value(value)
    }
}

impl TryFrom<&str> for NumberInput {
    type Error = NumberInputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed_value = value.trim();

        if trimmed_value.is_empty() {
            return Ok(NumberInput::Unset);
        }

        match trimmed_value.parse::<i32>() {
            Ok(parsed_value) => Ok(NumberInput::Value(parsed_value)),
            Err(_) => Err(NumberInputError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NumberInputError {
    #[error("Value must be an integer")]
    ParseError,
}

/// A change of a single field of a draft exercise.
#[derive(Debug, Clone, PartialEq)]
pub enum ExerciseEdit {
    Name(String),
    TargetSets(NumberInput),
    MinReps(NumberInput),
    MaxReps(NumberInput),
    RestSeconds(NumberInput),
    Intention(String),
    Note(String),
}

impl ExerciseEdit {
    /// Free-text fields are never required and do not trigger revalidation.
    #[must_use]
    pub fn is_validated(&self) -> bool {
        !matches!(self, ExerciseEdit::Intention(_) | ExerciseEdit::Note(_))
    }
}

/// A template that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub title: String,
    pub description: String,
    pub exercises: Vec<TemplateExercise>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateExercise {
    pub id: DraftExerciseID,
    pub name: String,
    pub target_sets: u32,
    pub rep_range: RepRange,
    pub rest_seconds: u32,
    pub intention: String,
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepRange {
    pub min: i32,
    pub max: i32,
}

impl TryFrom<&DraftTemplate> for Template {
    type Error = ValidationResult;

    fn try_from(draft: &DraftTemplate) -> Result<Self, Self::Error> {
        let result = validate(draft);

        if !result.is_ok() {
            return Err(result);
        }

        Ok(Template {
            title: draft.title.clone(),
            description: draft.description.clone(),
            exercises: draft.exercises.iter().map(validated_exercise).collect(),
        })
    }
}

/// Converts an exercise for which [`missing_fields`] reported no issues.
///
/// All numeric fields are set and non-negative in that case.
fn validated_exercise(exercise: &DraftExercise) -> TemplateExercise {
    debug_assert!(missing_fields(exercise).is_empty());
    TemplateExercise {
        id: exercise.id,
        name: exercise.name.clone(),
        target_sets: unsigned(exercise.target_sets),
        rep_range: RepRange {
            min: exercise.rep_range.min.value().unwrap_or_default(),
            max: exercise.rep_range.max.value().unwrap_or_default(),
        },
        rest_seconds: unsigned(exercise.rest_seconds),
        intention: exercise.intention.clone(),
        note: exercise.note.clone(),
    }
}

fn unsigned(input: NumberInput) -> u32 {
    u32::try_from(input.value().unwrap_or_default()).unwrap_or_default()
}
