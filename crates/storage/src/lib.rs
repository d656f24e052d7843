#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod memory;
pub mod model;

#[cfg(target_arch = "wasm32")]
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
#[cfg(target_arch = "wasm32")]
pub mod rest;
