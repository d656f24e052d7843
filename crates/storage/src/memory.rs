//! In-memory storage
//!
//! Keeps all data for the lifetime of the process. Saved templates are not sent anywhere, their
//! payload is only logged.

use std::{cell::RefCell, collections::VecDeque, sync::Mutex};

use liftbook_domain::{self as domain, log};

use crate::model;

#[derive(Default)]
pub struct Memory {
    workout_logs: Vec<domain::WorkoutLog>,
    programs: Vec<domain::Program>,
    templates: RefCell<Vec<domain::Template>>,
    settings: RefCell<Option<domain::Settings>>,
}

impl Memory {
    #[must_use]
    pub fn new(workout_logs: Vec<domain::WorkoutLog>) -> Self {
        Self {
            workout_logs,
            programs: domain::PROGRAMS.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn templates(&self) -> Vec<domain::Template> {
        self.templates.borrow().clone()
    }
}

impl domain::WorkoutLogRepository for Memory {
    async fn read_workout_logs(&self) -> Result<Vec<domain::WorkoutLog>, domain::ReadError> {
        Ok(self.workout_logs.clone())
    }
}

impl domain::TemplateRepository for Memory {
    async fn create_template(
        &self,
        template: domain::Template,
    ) -> Result<domain::Template, domain::CreateError> {
        let payload = serde_json::to_string_pretty(&model::Template::from(&template))
            .map_err(|err| domain::CreateError::Other(err.into()))?;
        ::log::info!("saved template:\n{payload}");
        self.templates.borrow_mut().push(template.clone());
        Ok(template)
    }
}

impl domain::ProgramRepository for Memory {
    async fn read_programs(&self) -> Result<Vec<domain::Program>, domain::ReadError> {
        Ok(self.programs.clone())
    }
}

impl domain::SettingsRepository for Memory {
    async fn read_settings(&self) -> Result<domain::Settings, domain::ReadError> {
        Ok(self.settings.borrow().unwrap_or_default())
    }

    async fn write_settings(&self, settings: domain::Settings) -> Result<(), domain::UpdateError> {
        *self.settings.borrow_mut() = Some(settings);
        Ok(())
    }
}

#[derive(Default)]
pub struct Log {
    entries: Mutex<VecDeque<log::Entry>>,
}

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| log::Error::Unknown(err.to_string()))?;
        log::push_entry(&mut entries, entry);
        Ok(())
    }
}
