pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "venue-sweep")]
#[command(about = "Scans a venue listing page and fires background deletion requests")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:5000")]
    pub base_url: String,

    #[arg(long, default_value = "/venues")]
    pub listing_path: String,

    #[arg(long, default_value = "venue-delete")]
    pub marker_class: String,

    #[arg(long, default_value = "data-id")]
    pub id_attribute: String,

    #[arg(long, help = "Read the listing markup from a file instead of HTTP")]
    pub from_file: Option<String>,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Keep venues whose data-next-show is still in the future")]
    pub keep_upcoming: bool,

    #[arg(long, help = "Scan and report without issuing deletions")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn listing_path(&self) -> &str {
        &self.listing_path
    }

    fn marker_class(&self) -> &str {
        &self.marker_class
    }

    fn id_attribute(&self) -> &str {
        &self.id_attribute
    }

    fn keep_upcoming(&self) -> bool {
        self.keep_upcoming
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_leading_slash("listing_path", &self.listing_path)?;
        validation::validate_non_empty_string("marker_class", &self.marker_class)?;
        validation::validate_non_empty_string("id_attribute", &self.id_attribute)?;
        Ok(())
    }
}
