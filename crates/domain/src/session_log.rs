use chrono::{DateTime, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{ProgramID, ReadError};

pub const IN_PROGRESS: &str = "진행 중";

#[allow(async_fn_in_trait)]
pub trait WorkoutLogService {
    async fn get_workout_logs(&self) -> Result<Vec<WorkoutLog>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutLogRepository {
    async fn read_workout_logs(&self) -> Result<Vec<WorkoutLog>, ReadError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    pub id: WorkoutSessionID,
    pub program_id: Option<ProgramID>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

impl WorkoutSession {
    #[must_use]
    pub fn duration_label(&self) -> String {
        duration_label(self.started_at, self.ended_at)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutSessionID(Uuid);

impl From<Uuid> for WorkoutSessionID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutSessionID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSet {
    pub id: WorkoutSetID,
    pub session_id: WorkoutSessionID,
    pub exercise_name: String,
    pub set_number: u32,
    pub weight: f32,
    pub reps: u32,
    pub rpe: Option<f32>,
}

impl WorkoutSet {
    #[must_use]
    pub fn set_label(&self) -> String {
        format!("{}세트", self.set_number)
    }

    #[must_use]
    pub fn performance_label(&self, show_rpe: bool) -> String {
        let label = format!("{}kg × {}회", self.weight, self.reps);
        match self.rpe {
            Some(rpe) if show_rpe => format!("{label} (RPE {rpe})"),
            _ => label,
        }
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutSetID(Uuid);

impl From<Uuid> for WorkoutSetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutSetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// A session together with its recorded sets, as shown in the workout history.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutLog {
    pub session: WorkoutSession,
    pub sets: Vec<WorkoutSet>,
    pub program_title: Option<String>,
}

impl WorkoutLog {
    #[must_use]
    pub fn exercises(&self) -> Vec<ExerciseSetGroup> {
        group_by_exercise(&self.sets)
    }

    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercises().len()
    }

    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.sets.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSetGroup {
    pub exercise_name: String,
    pub sets: Vec<WorkoutSet>,
}

impl ExerciseSetGroup {
    #[must_use]
    pub fn sorted_by_set_number(&self) -> Vec<&WorkoutSet> {
        let mut sets = self.sets.iter().collect::<Vec<_>>();
        sets.sort_by_key(|s| s.set_number);
        sets
    }
}

/// Groups sets by exact exercise name.
///
/// Groups appear in the order in which their exercise name first occurs. Within a group the sets
/// keep their input order.
#[must_use]
pub fn group_by_exercise(sets: &[WorkoutSet]) -> Vec<ExerciseSetGroup> {
    let mut groups: Vec<ExerciseSetGroup> = vec![];
    for set in sets {
        match groups
            .iter_mut()
            .find(|g| g.exercise_name == set.exercise_name)
        {
            Some(group) => group.sets.push(set.clone()),
            None => groups.push(ExerciseSetGroup {
                exercise_name: set.exercise_name.clone(),
                sets: vec![set.clone()],
            }),
        }
    }
    groups
}

#[must_use]
pub fn duration_label(started_at: DateTime<Utc>, ended_at: Option<DateTime<Utc>>) -> String {
    let Some(ended_at) = ended_at else {
        return IN_PROGRESS.to_string();
    };

    let minutes = elapsed_minutes(started_at, ended_at);

    if minutes < 60 {
        return format!("{minutes}분");
    }

    format!("{}시간 {}분", minutes.div_euclid(60), minutes.rem_euclid(60))
}

/// Elapsed time in whole minutes, rounded half up.
fn elapsed_minutes(started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> i64 {
    let milliseconds = (ended_at - started_at).num_milliseconds();
    (milliseconds + 30_000).div_euclid(60_000)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn set(id: u128, exercise_name: &str, set_number: u32) -> WorkoutSet {
        WorkoutSet {
            id: id.into(),
            session_id: 1.into(),
            exercise_name: exercise_name.to_string(),
            set_number,
            weight: 60.0,
            reps: 10,
            rpe: None,
        }
    }

    fn time(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value).unwrap().to_utc()
    }

    #[test]
    fn test_group_by_exercise() {
        let sets = vec![set(1, "Squat", 2), set(2, "Squat", 1), set(3, "Row", 1)];

        let groups = group_by_exercise(&sets);

        assert_eq!(
            groups,
            vec![
                ExerciseSetGroup {
                    exercise_name: String::from("Squat"),
                    sets: vec![set(1, "Squat", 2), set(2, "Squat", 1)],
                },
                ExerciseSetGroup {
                    exercise_name: String::from("Row"),
                    sets: vec![set(3, "Row", 1)],
                },
            ]
        );
        assert_eq!(
            groups[0]
                .sorted_by_set_number()
                .iter()
                .map(|s| s.set_number)
                .collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_group_by_exercise_is_case_sensitive() {
        let sets = vec![set(1, "Squat", 1), set(2, "squat", 1), set(3, "Squat ", 1)];

        assert_eq!(
            group_by_exercise(&sets)
                .iter()
                .map(|g| g.exercise_name.as_str())
                .collect::<Vec<_>>(),
            vec!["Squat", "squat", "Squat "]
        );
    }

    #[test]
    fn test_group_by_exercise_empty() {
        assert!(group_by_exercise(&[]).is_empty());
    }

    #[test]
    fn test_workout_log_counts() {
        let log = WorkoutLog {
            session: WorkoutSession {
                id: 1.into(),
                program_id: None,
                started_at: time("2024-01-01T10:00:00Z"),
                ended_at: None,
                note: None,
            },
            sets: vec![
                set(1, "벤치프레스", 1),
                set(2, "바벨로우", 1),
                set(3, "벤치프레스", 2),
            ],
            program_title: Some(String::from("상체 근력 운동")),
        };

        assert_eq!(log.exercise_count(), 2);
        assert_eq!(log.total_sets(), 3);
        assert_eq!(log.session.duration_label(), IN_PROGRESS);
    }

    #[rstest]
    #[case("2024-01-01T11:05:00Z", "1시간 5분")]
    #[case("2024-01-01T10:45:00Z", "45분")]
    #[case("2024-01-01T10:00:00Z", "0분")]
    #[case("2024-01-01T11:00:00Z", "1시간 0분")]
    #[case("2024-01-01T10:59:29Z", "59분")]
    #[case("2024-01-01T10:59:30Z", "1시간 0분")]
    #[case("2024-01-01T10:00:29Z", "0분")]
    #[case("2024-01-01T12:30:30Z", "2시간 31분")]
    #[case("2024-01-01T09:55:00Z", "-5분")]
    fn test_duration_label(#[case] ended_at: &str, #[case] expected: &str) {
        assert_eq!(
            duration_label(time("2024-01-01T10:00:00Z"), Some(time(ended_at))),
            expected
        );
    }

    #[test]
    fn test_duration_label_in_progress() {
        assert_eq!(
            duration_label(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(), None),
            "진행 중"
        );
    }

    #[rstest]
    #[case(None, true, "62.5kg × 8회")]
    #[case(Some(8.5), true, "62.5kg × 8회 (RPE 8.5)")]
    #[case(Some(8.0), true, "62.5kg × 8회 (RPE 8)")]
    #[case(Some(8.5), false, "62.5kg × 8회")]
    fn test_workout_set_labels(
        #[case] rpe: Option<f32>,
        #[case] show_rpe: bool,
        #[case] expected: &str,
    ) {
        let set = WorkoutSet {
            weight: 62.5,
            reps: 8,
            rpe,
            ..set(1, "Squat", 3)
        };
        assert_eq!(set.set_label(), "3세트");
        assert_eq!(set.performance_label(show_rpe), expected);
    }
}
