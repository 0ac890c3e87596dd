//! lxr-init: scaffold new LeanIX custom report projects.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{InitOptions, InstallOptions, init, install};
pub use domain::{AnswerSet, AnswerValue, AppError, Field};
