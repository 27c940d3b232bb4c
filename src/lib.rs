pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command, OutputFormat};

pub use app::dashboard::{CloneReport, Dashboard};
pub use config::Settings;
pub use core::clone::{CloneOutcome, FailureBanner, FormState};
pub use core::form::CloneForm;
pub use core::search::SearchResult;
pub use domain::model::{Account, Announcement, CloneRequest, Status};
pub use utils::error::{DashError, ErrorKind, Result};
