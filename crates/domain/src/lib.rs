#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod format;
pub mod log;

mod editor;
mod error;
mod program;
mod service;
mod session_log;
mod settings;
mod template;
mod validation;

pub use catalog::PROGRAMS;
pub use editor::*;
pub use error::*;
pub use program::*;
pub use service::*;
pub use session_log::*;
pub use settings::*;
pub use template::*;
pub use validation::*;
