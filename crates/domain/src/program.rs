use derive_more::Deref;
use uuid::Uuid;

use crate::ReadError;

#[allow(async_fn_in_trait)]
pub trait ProgramService {
    async fn get_programs(&self) -> Result<Vec<Program>, ReadError>;

    async fn get_program(&self, id: ProgramID) -> Result<Option<Program>, ReadError> {
        Ok(find_program(&self.get_programs().await?, id).cloned())
    }
}

#[allow(async_fn_in_trait)]
pub trait ProgramRepository {
    async fn read_programs(&self) -> Result<Vec<Program>, ReadError>;
}

/// A saved workout program that can be started as a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub id: ProgramID,
    pub title: String,
    pub description: String,
    pub exercises: Vec<ProgramExercise>,
}

impl Program {
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    /// Returns the exercises in the order in which they are performed.
    #[must_use]
    pub fn ordered_exercises(&self) -> Vec<&ProgramExercise> {
        let mut exercises = self.exercises.iter().collect::<Vec<_>>();
        exercises.sort_by_key(|e| e.order);
        exercises
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProgramID(Uuid);

impl From<Uuid> for ProgramID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ProgramID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramExercise {
    pub id: ProgramExerciseID,
    pub name: String,
    pub target_sets: u32,
    pub target_reps: u32,
    pub rest_seconds: u32,
    pub intention: String,
    pub order: u32,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProgramExerciseID(Uuid);

impl From<Uuid> for ProgramExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ProgramExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[must_use]
pub fn find_program(programs: &[Program], id: ProgramID) -> Option<&Program> {
    programs.iter().find(|p| p.id == id)
}
