use log::{debug, error};

use crate::{
    CreateError, Program, ProgramRepository, ProgramService, ReadError, Settings,
    SettingsRepository, SettingsService, Template, TemplateRepository, TemplateService,
    UpdateError, WorkoutLog, WorkoutLogRepository, WorkoutLogService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: WorkoutLogRepository> WorkoutLogService for Service<R> {
    async fn get_workout_logs(&self) -> Result<Vec<WorkoutLog>, ReadError> {
        log_on_error!(
            self.repository.read_workout_logs(),
            ReadError,
            "get",
            "workout logs"
        )
    }
}

impl<R: TemplateRepository> TemplateService for Service<R> {
    async fn create_template(&self, template: Template) -> Result<Template, CreateError> {
        log_on_error!(
            self.repository.create_template(template),
            CreateError,
            "create",
            "template"
        )
    }
}

impl<R: ProgramRepository> ProgramService for Service<R> {
    async fn get_programs(&self) -> Result<Vec<Program>, ReadError> {
        log_on_error!(
            self.repository.read_programs(),
            ReadError,
            "get",
            "programs"
        )
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    async fn get_settings(&self) -> Result<Settings, ReadError> {
        log_on_error!(
            self.repository.read_settings(),
            ReadError,
            "get",
            "settings"
        )
    }

    async fn set_settings(&self, settings: Settings) -> Result<(), UpdateError> {
        log_on_error!(
            self.repository.write_settings(settings),
            UpdateError,
            "set",
            "settings"
        )
    }
}
