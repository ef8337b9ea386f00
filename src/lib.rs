#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod intake;
pub mod store;
pub mod strategy;
pub mod ui;
pub mod wizard;

pub use config::Config;
pub use intake::{IntakePatch, IntakeRecord, Stage};
pub use strategy::Strategy;
pub use wizard::{GenerateOutcome, GenerationStatus, WizardSession};
