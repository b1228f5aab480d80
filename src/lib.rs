pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::binder::DeleteBinder;
pub use core::datetime::parse_timestamp;
pub use core::engine::SweepEngine;
pub use core::pipeline::ListingSweep;
pub use core::source::{FilePage, HttpPage};
pub use domain::model::{DeleteOutcome, SweepReport, VenueControl};
pub use utils::error::{Result, SweepError};
