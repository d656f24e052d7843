//! Wire representation of the data exchanged with the server.

use chrono::{DateTime, Utc};
use liftbook_domain as domain;
use log::warn;
use uuid::Uuid;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("set number must be 1 or greater")]
    InvalidSetNumber,
    #[error("set {0} of {1} recorded more than once")]
    DuplicateSetNumber(u32, String),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<Uuid>,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<&domain::WorkoutSession> for WorkoutSession {
    fn from(value: &domain::WorkoutSession) -> Self {
        Self {
            id: *value.id,
            program_id: value.program_id.map(|id| *id),
            started_at: value.started_at,
            ended_at: value.ended_at,
            note: value.note.clone(),
        }
    }
}

impl From<WorkoutSession> for domain::WorkoutSession {
    fn from(value: WorkoutSession) -> Self {
        Self {
            id: value.id.into(),
            program_id: value.program_id.map(domain::ProgramID::from),
            started_at: value.started_at,
            ended_at: value.ended_at,
            note: value.note,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutSet {
    pub id: Uuid,
    pub session_id: Uuid,
    pub exercise_name: String,
    pub set_number: u32,
    pub weight: f32,
    pub reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f32>,
}

impl From<&domain::WorkoutSet> for WorkoutSet {
    fn from(value: &domain::WorkoutSet) -> Self {
        Self {
            id: *value.id,
            session_id: *value.session_id,
            exercise_name: value.exercise_name.clone(),
            set_number: value.set_number,
            weight: value.weight,
            reps: value.reps,
            rpe: value.rpe,
        }
    }
}

impl TryFrom<WorkoutSet> for domain::WorkoutSet {
    type Error = Error;

    fn try_from(value: WorkoutSet) -> Result<Self, Self::Error> {
        if value.set_number < 1 {
            return Err(Error::InvalidSetNumber);
        }
        Ok(Self {
            id: value.id.into(),
            session_id: value.session_id.into(),
            exercise_name: value.exercise_name,
            set_number: value.set_number,
            weight: value.weight,
            reps: value.reps,
            rpe: value.rpe,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutLog {
    #[serde(flatten)]
    pub session: WorkoutSession,
    pub sets: Vec<WorkoutSet>,
    #[serde(
        rename = "programTitle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub program_title: Option<String>,
}

impl From<&domain::WorkoutLog> for WorkoutLog {
    fn from(value: &domain::WorkoutLog) -> Self {
        Self {
            session: WorkoutSession::from(&value.session),
            sets: value.sets.iter().map(WorkoutSet::from).collect(),
            program_title: value.program_title.clone(),
        }
    }
}

impl TryFrom<WorkoutLog> for domain::WorkoutLog {
    type Error = Error;

    fn try_from(value: WorkoutLog) -> Result<Self, Self::Error> {
        let sets = value
            .sets
            .into_iter()
            .map(domain::WorkoutSet::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        for group in domain::group_by_exercise(&sets) {
            let mut set_numbers = group.sets.iter().map(|s| s.set_number).collect::<Vec<_>>();
            set_numbers.sort_unstable();
            if let Some(window) = set_numbers.windows(2).find(|w| w[0] == w[1]) {
                return Err(Error::DuplicateSetNumber(window[0], group.exercise_name));
            }
        }

        Ok(Self {
            session: value.session.into(),
            sets,
            program_title: value.program_title,
        })
    }
}

/// Converts received logs, skipping those that cannot be represented.
#[must_use]
pub fn workout_logs(logs: Vec<WorkoutLog>) -> Vec<domain::WorkoutLog> {
    logs.into_iter()
        .filter_map(|log| {
            let id = log.session.id;
            domain::WorkoutLog::try_from(log)
                .inspect_err(|err| warn!("skipped workout log {id}: {err}"))
                .ok()
        })
        .collect()
}

/// Template as sent to the server: `{title, description, exercises}`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Template {
    pub title: String,
    pub description: String,
    pub exercises: Vec<TemplateExercise>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct TemplateExercise {
    pub id: Uuid,
    pub name: String,
    pub target: Target,
    #[serde(rename = "restSeconds")]
    pub rest_seconds: u32,
    pub intention: String,
    pub note: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub sets: u32,
    pub reps: RepRange,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepRange {
    pub min: i32,
    pub max: i32,
}

impl From<&domain::Template> for Template {
    fn from(value: &domain::Template) -> Self {
        Self {
            title: value.title.clone(),
            description: value.description.clone(),
            exercises: value
                .exercises
                .iter()
                .map(|e| TemplateExercise {
                    id: *e.id,
                    name: e.name.clone(),
                    target: Target {
                        sets: e.target_sets,
                        reps: RepRange {
                            min: e.rep_range.min,
                            max: e.rep_range.max,
                        },
                    },
                    rest_seconds: e.rest_seconds,
                    intention: e.intention.clone(),
                    note: e.note.clone(),
                })
                .collect(),
        }
    }
}

impl From<Template> for domain::Template {
    fn from(value: Template) -> Self {
        Self {
            title: value.title,
            description: value.description,
            exercises: value
                .exercises
                .into_iter()
                .map(|e| domain::TemplateExercise {
                    id: e.id.into(),
                    name: e.name,
                    target_sets: e.target.sets,
                    rep_range: domain::RepRange {
                        min: e.target.reps.min,
                        max: e.target.reps.max,
                    },
                    rest_seconds: e.rest_seconds,
                    intention: e.intention,
                    note: e.note,
                })
                .collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Program {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub exercises: Vec<ProgramExercise>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ProgramExercise {
    pub id: Uuid,
    pub program_id: Uuid,
    pub name: String,
    pub target_sets: u32,
    pub target_reps: u32,
    pub rest_seconds: u32,
    pub intention: String,
    pub order: u32,
}

impl From<&domain::Program> for Program {
    fn from(value: &domain::Program) -> Self {
        Self {
            id: *value.id,
            title: value.title.clone(),
            description: value.description.clone(),
            exercises: value
                .exercises
                .iter()
                .map(|e| ProgramExercise {
                    id: *e.id,
                    program_id: *value.id,
                    name: e.name.clone(),
                    target_sets: e.target_sets,
                    target_reps: e.target_reps,
                    rest_seconds: e.rest_seconds,
                    intention: e.intention.clone(),
                    order: e.order,
                })
                .collect(),
        }
    }
}

impl From<Program> for domain::Program {
    fn from(value: Program) -> Self {
        Self {
            id: value.id.into(),
            title: value.title,
            description: value.description,
            exercises: value
                .exercises
                .into_iter()
                .map(|e| domain::ProgramExercise {
                    id: e.id.into(),
                    name: e.name,
                    target_sets: e.target_sets,
                    target_reps: e.target_reps,
                    rest_seconds: e.rest_seconds,
                    intention: e.intention,
                    order: e.order,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::{TEMPLATE, WORKOUT_LOG, WORKOUT_LOG_2};

    use super::*;

    #[test]
    fn test_workout_log_from_json() {
        let value = json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "started_at": "2024-01-01T10:00:00Z",
            "ended_at": "2024-01-01T11:05:00Z",
            "note": "좋은 컨디션",
            "programTitle": "상체 근력 운동",
            "sets": [
                {
                    "id": "00000000-0000-0000-0000-000000000002",
                    "session_id": "00000000-0000-0000-0000-000000000001",
                    "exercise_name": "벤치프레스",
                    "set_number": 1,
                    "weight": 60.0,
                    "reps": 10,
                    "rpe": 8.0
                }
            ]
        });

        let log = domain::WorkoutLog::try_from(
            serde_json::from_value::<WorkoutLog>(value).unwrap(),
        )
        .unwrap();

        assert_eq!(log.session.id, 1.into());
        assert_eq!(log.session.program_id, None);
        assert_eq!(log.session.duration_label(), "1시간 5분");
        assert_eq!(log.program_title.as_deref(), Some("상체 근력 운동"));
        assert_eq!(log.sets.len(), 1);
        assert_eq!(log.sets[0].session_id, 1.into());
        assert_eq!(log.sets[0].rpe, Some(8.0));
    }

    #[test]
    fn test_workout_log_conversion() {
        assert_eq!(
            domain::WorkoutLog::try_from(WorkoutLog::from(&*WORKOUT_LOG)),
            Ok(WORKOUT_LOG.clone())
        );
    }

    #[rstest]
    #[case::invalid_set_number(
        |log: &mut WorkoutLog| log.sets[0].set_number = 0,
        Error::InvalidSetNumber
    )]
    #[case::duplicate_set_number(
        |log: &mut WorkoutLog| {
            let mut set = log.sets[0].clone();
            set.id = Uuid::from_u128(99);
            log.sets.push(set);
        },
        Error::DuplicateSetNumber(2, String::from("벤치프레스"))
    )]
    fn test_workout_log_invalid_sets(
        #[case] modify: fn(&mut WorkoutLog),
        #[case] expected: Error,
    ) {
        let mut log = WorkoutLog::from(&*WORKOUT_LOG);
        modify(&mut log);
        assert_eq!(domain::WorkoutLog::try_from(log), Err(expected));
    }

    #[test]
    fn test_workout_logs_skips_invalid_logs() {
        let mut invalid = WorkoutLog::from(&*WORKOUT_LOG_2);
        invalid.sets[0].set_number = 0;

        assert_eq!(
            workout_logs(vec![WorkoutLog::from(&*WORKOUT_LOG), invalid]),
            vec![WORKOUT_LOG.clone()]
        );
    }

    #[test]
    fn test_template_to_json() {
        assert_eq!(
            serde_json::to_value(Template::from(&*TEMPLATE)).unwrap(),
            json!({
                "title": "상체 근력 운동",
                "description": "가슴, 어깨, 팔 중심의 근력 강화 프로그램",
                "exercises": [
                    {
                        "id": "00000000-0000-0000-0000-000000000001",
                        "name": "벤치프레스",
                        "target": { "sets": 3, "reps": { "min": 8, "max": 12 } },
                        "restSeconds": 90,
                        "intention": "가슴 근력 향상",
                        "note": ""
                    }
                ]
            })
        );
    }

    #[test]
    fn test_template_conversion() {
        assert_eq!(
            domain::Template::from(Template::from(&*TEMPLATE)),
            TEMPLATE.clone()
        );
    }

    #[test]
    fn test_program_conversion() {
        let program = &domain::PROGRAMS[0];
        let wire = Program::from(program);
        assert!(wire.exercises.iter().all(|e| e.program_id == *program.id));
        assert_eq!(&domain::Program::from(wire), program);
    }
}
