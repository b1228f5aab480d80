use crate::domain::model::{SweepReport, VenueControl};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the venue listing markup comes from: an HTTP endpoint in
/// production, a saved file or canned string in tests.
pub trait PageSource: Send + Sync {
    fn fetch(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn listing_path(&self) -> &str;
    fn marker_class(&self) -> &str;
    fn id_attribute(&self) -> &str;
    fn keep_upcoming(&self) -> bool;
    fn dry_run(&self) -> bool;
}

#[async_trait]
pub trait SweepPipeline: Send + Sync {
    async fn scan(&self) -> Result<Vec<VenueControl>>;
    async fn sweep(&self, controls: Vec<VenueControl>) -> Result<SweepReport>;
}
