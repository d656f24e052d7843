use log::debug;

use crate::{
    DraftExercise, DraftExerciseID, DraftTemplate, ExerciseEdit, Template, ValidationResult,
    exercise_errors,
};

/// Editing state of a new template: the draft and the errors currently shown for it.
#[derive(Debug, Clone, Default)]
pub struct TemplateEditor {
    draft: DraftTemplate,
    errors: ValidationResult,
}

impl TemplateEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &DraftTemplate {
        &self.draft
    }

    #[must_use]
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn set_title(&mut self, title: &str) {
        self.draft.title = title.to_string();
        self.errors.title_error = None;
    }

    pub fn set_description(&mut self, description: &str) {
        self.draft.description = description.to_string();
        self.errors.description_error = None;
    }

    pub fn add_exercise(&mut self) -> DraftExerciseID {
        let exercise = DraftExercise::new();
        let id = exercise.id;
        self.draft.exercises.push(exercise);
        id
    }

    pub fn remove_exercise(&mut self, id: DraftExerciseID) {
        self.draft.exercises.retain(|e| e.id != id);
        self.errors.exercise_errors.remove(&id);
    }

    /// Applies an edit to a single exercise.
    ///
    /// Edits of required fields replace the errors of all exercises with freshly computed ones.
    pub fn edit_exercise(&mut self, id: DraftExerciseID, edit: ExerciseEdit) {
        let Some(index) = self.draft.exercises.iter().position(|e| e.id == id) else {
            debug!("ignored edit of unknown exercise {}", *id);
            return;
        };

        let revalidate = edit.is_validated();
        self.draft.exercises[index] = self.draft.exercises[index].edited(edit);

        if revalidate {
            self.errors.exercise_errors = exercise_errors(&self.draft.exercises);
        }
    }

    /// Validates the draft and replaces all errors by the result.
    ///
    /// On success the errors are cleared and the validated template is returned.
    pub fn submit(&mut self) -> Result<Template, ValidationResult> {
        match Template::try_from(&self.draft) {
            Ok(template) => {
                self.errors = ValidationResult::default();
                Ok(template)
            }
            Err(errors) => {
                debug!(
                    "template not submitted: {} exercise(s) with errors",
                    errors.exercise_errors.len()
                );
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}
