use chrono::{TimeZone, Utc};
use liftbook_domain as domain;

pub static WORKOUT_LOGS: std::sync::LazyLock<Vec<domain::WorkoutLog>> =
    std::sync::LazyLock::new(|| vec![WORKOUT_LOG.clone(), WORKOUT_LOG_2.clone()]);

pub static WORKOUT_LOG: std::sync::LazyLock<domain::WorkoutLog> =
    std::sync::LazyLock::new(|| domain::WorkoutLog {
        session: domain::WorkoutSession {
            id: 1.into(),
            program_id: Some(1.into()),
            started_at: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            ended_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 11, 5, 0).unwrap()),
            note: Some(String::from("좋은 컨디션")),
        },
        sets: vec![
            set(1, 1, "벤치프레스", 2, 62.5, 8, Some(8.5)),
            set(2, 1, "벤치프레스", 1, 60.0, 10, None),
            set(3, 1, "바벨로우", 1, 50.0, 10, Some(7.0)),
        ],
        program_title: Some(String::from("상체 근력 운동")),
    });

pub static WORKOUT_LOG_2: std::sync::LazyLock<domain::WorkoutLog> =
    std::sync::LazyLock::new(|| domain::WorkoutLog {
        session: domain::WorkoutSession {
            id: 2.into(),
            program_id: None,
            started_at: Utc.with_ymd_and_hms(2024, 1, 3, 9, 0, 0).unwrap(),
            ended_at: None,
            note: None,
        },
        sets: vec![set(4, 2, "스쿼트", 1, 80.0, 5, None)],
        program_title: None,
    });

pub static TEMPLATE: std::sync::LazyLock<domain::Template> =
    std::sync::LazyLock::new(|| domain::Template {
        title: String::from("상체 근력 운동"),
        description: String::from("가슴, 어깨, 팔 중심의 근력 강화 프로그램"),
        exercises: vec![domain::TemplateExercise {
            id: 1.into(),
            name: String::from("벤치프레스"),
            target_sets: 3,
            rep_range: domain::RepRange { min: 8, max: 12 },
            rest_seconds: 90,
            intention: String::from("가슴 근력 향상"),
            note: String::new(),
        }],
    });

fn set(
    id: u128,
    session_id: u128,
    exercise_name: &str,
    set_number: u32,
    weight: f32,
    reps: u32,
    rpe: Option<f32>,
) -> domain::WorkoutSet {
    domain::WorkoutSet {
        id: id.into(),
        session_id: session_id.into(),
        exercise_name: exercise_name.to_string(),
        set_number,
        weight,
        reps,
        rpe,
    }
}
