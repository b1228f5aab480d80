pub mod binder;
pub mod datetime;
pub mod engine;
pub mod page;
pub mod pipeline;
pub mod schedule;
pub mod source;

pub use crate::domain::model::{DeleteOutcome, SweepReport, VenueControl};
pub use crate::domain::ports::{ConfigProvider, PageSource, SweepPipeline};
pub use crate::utils::error::Result;
