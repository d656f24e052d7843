use std::collections::VecDeque;

use gloo_storage::Storage as GlooStorage;
use liftbook_domain::{self as domain, log};

const KEY_SETTINGS: &str = "settings";
const KEY_LOG: &str = "log";

pub struct LocalStorage;

impl domain::SettingsRepository for LocalStorage {
    async fn read_settings(&self) -> Result<domain::Settings, domain::ReadError> {
        match gloo_storage::LocalStorage::get(KEY_SETTINGS) {
            Ok(settings) => Ok(settings),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => {
                Ok(domain::Settings::default())
            }
            Err(err) => Err(domain::ReadError::Storage(domain::StorageError::Other(
                err.into(),
            ))),
        }
    }

    async fn write_settings(&self, settings: domain::Settings) -> Result<(), domain::UpdateError> {
        gloo_storage::LocalStorage::set(KEY_SETTINGS, settings)
            .map_err(|err| domain::UpdateError::Storage(domain::StorageError::Other(err.into())))
    }
}

pub struct Log;

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::push_entry(&mut entries, entry);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
