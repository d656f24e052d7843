use crate::{Program, ProgramExercise};

struct CatalogProgram {
    id: u128,
    title: &'static str,
    description: &'static str,
    exercises: &'static [CatalogExercise],
}

struct CatalogExercise {
    id: u128,
    name: &'static str,
    target_sets: u32,
    target_reps: u32,
    rest_seconds: u32,
    intention: &'static str,
}

impl From<&CatalogProgram> for Program {
    fn from(value: &CatalogProgram) -> Self {
        Program {
            id: value.id.into(),
            title: value.title.to_string(),
            description: value.description.to_string(),
            exercises: value
                .exercises
                .iter()
                .zip(1..)
                .map(|(e, order)| ProgramExercise {
                    id: e.id.into(),
                    name: e.name.to_string(),
                    target_sets: e.target_sets,
                    target_reps: e.target_reps,
                    rest_seconds: e.rest_seconds,
                    intention: e.intention.to_string(),
                    order,
                })
                .collect(),
        }
    }
}

/// Programs available without a server connection.
pub static PROGRAMS: std::sync::LazyLock<Vec<Program>> =
    std::sync::LazyLock::new(|| CATALOG.iter().map(Program::from).collect());

const CATALOG: &[CatalogProgram] = &[
    CatalogProgram {
        id: 1,
        title: "상체 근력 운동",
        description: "가슴, 어깨, 팔 중심의 근력 강화 프로그램",
        exercises: &[
            CatalogExercise {
                id: 11,
                name: "벤치프레스",
                target_sets: 3,
                target_reps: 10,
                rest_seconds: 90,
                intention: "가슴 근력 향상",
            },
            CatalogExercise {
                id: 12,
                name: "숄더프레스",
                target_sets: 3,
                target_reps: 12,
                rest_seconds: 60,
                intention: "어깨 근력 강화",
            },
            CatalogExercise {
                id: 13,
                name: "바벨로우",
                target_sets: 4,
                target_reps: 10,
                rest_seconds: 90,
                intention: "등 근육 발달",
            },
        ],
    },
    CatalogProgram {
        id: 2,
        title: "하체 집중 훈련",
        description: "스쿼트, 데드리프트 등 하체 근육 발달을 위한 프로그램",
        exercises: &[
            CatalogExercise {
                id: 21,
                name: "스쿼트",
                target_sets: 4,
                target_reps: 10,
                rest_seconds: 120,
                intention: "하체 전체 근력",
            },
            CatalogExercise {
                id: 22,
                name: "데드리프트",
                target_sets: 3,
                target_reps: 8,
                rest_seconds: 180,
                intention: "후면 사슬 강화",
            },
            CatalogExercise {
                id: 23,
                name: "런지",
                target_sets: 3,
                target_reps: 12,
                rest_seconds: 90,
                intention: "하체 안정성",
            },
            CatalogExercise {
                id: 24,
                name: "레그컬",
                target_sets: 3,
                target_reps: 15,
                rest_seconds: 60,
                intention: "햄스트링 강화",
            },
        ],
    },
];
