use crate::core::binder::DeleteBinder;
use crate::core::page;
use crate::core::{ConfigProvider, PageSource, SweepPipeline, SweepReport, VenueControl};
use crate::utils::error::Result;

/// The one-page sweep: fetch the listing markup, scan it for delete
/// controls, then trigger each bound control once.
pub struct ListingSweep<S: PageSource, C: ConfigProvider + Clone> {
    source: S,
    config: C,
}

impl<S: PageSource, C: ConfigProvider + Clone> ListingSweep<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }
}

#[async_trait::async_trait]
impl<S: PageSource, C: ConfigProvider + Clone> SweepPipeline for ListingSweep<S, C> {
    async fn scan(&self) -> Result<Vec<VenueControl>> {
        let html = self.source.fetch().await?;
        let controls = page::scan_controls(
            &html,
            self.config.marker_class(),
            self.config.id_attribute(),
        );
        tracing::debug!(
            "Scanned {} bytes of markup, found {} '{}' controls",
            html.len(),
            controls.len(),
            self.config.marker_class()
        );
        Ok(controls)
    }

    async fn sweep(&self, controls: Vec<VenueControl>) -> Result<SweepReport> {
        let mut report = SweepReport {
            scanned: controls.len(),
            ..Default::default()
        };

        // Binding happens once per page load, same as the listing page.
        let mut binder = DeleteBinder::new(self.config.clone());
        binder.bind(controls);

        for (venue_id, outcome) in binder.trigger_all().await {
            report.record(venue_id, outcome);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DeleteOutcome;
    use httpmock::prelude::*;

    #[derive(Clone)]
    struct MockConfig {
        base_url: String,
        dry_run: bool,
    }

    impl ConfigProvider for MockConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn listing_path(&self) -> &str {
            "/venues"
        }

        fn marker_class(&self) -> &str {
            "venue-delete"
        }

        fn id_attribute(&self) -> &str {
            "data-id"
        }

        fn keep_upcoming(&self) -> bool {
            false
        }

        fn dry_run(&self) -> bool {
            self.dry_run
        }
    }

    struct CannedPage(String);

    impl PageSource for CannedPage {
        async fn fetch(&self) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_scan_lifts_controls_from_source_markup() {
        let page = CannedPage(
            r#"<button class="venue-delete" data-id="1"></button>
               <button class="venue-delete" data-id="2"></button>"#
                .to_string(),
        );
        let config = MockConfig {
            base_url: "http://unused".to_string(),
            dry_run: true,
        };

        let pipeline = ListingSweep::new(page, config);
        let controls = pipeline.scan().await.unwrap();

        assert_eq!(controls.len(), 2);
        assert_eq!(controls[0].venue_id, "1");
        assert_eq!(controls[1].venue_id, "2");
    }

    #[tokio::test]
    async fn test_sweep_triggers_each_control_once() {
        let server = MockServer::start();
        let first = server.mock(|when, then| {
            when.method(POST).path("/venues/1/delete");
            then.status(200);
        });
        let second = server.mock(|when, then| {
            when.method(POST).path("/venues/2/delete");
            then.status(404);
        });

        let page = CannedPage(String::new());
        let config = MockConfig {
            base_url: server.base_url(),
            dry_run: false,
        };
        let pipeline = ListingSweep::new(page, config);

        let controls = vec![VenueControl::new("1"), VenueControl::new("2")];
        let report = pipeline.sweep(controls).await.unwrap();

        first.assert();
        second.assert();
        assert_eq!(report.scanned, 2);
        assert_eq!(report.delivered(), 2);
        assert_eq!(
            report.entries[1].outcome,
            DeleteOutcome::Delivered { status: 404 }
        );
    }

    #[tokio::test]
    async fn test_sweep_with_no_controls_is_empty_report() {
        let page = CannedPage("<p>nothing here</p>".to_string());
        let config = MockConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            dry_run: false,
        };
        let pipeline = ListingSweep::new(page, config);

        let controls = pipeline.scan().await.unwrap();
        let report = pipeline.sweep(controls).await.unwrap();

        assert_eq!(report.scanned, 0);
        assert!(report.entries.is_empty());
    }
}
