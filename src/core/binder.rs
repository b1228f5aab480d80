use crate::core::schedule;
use crate::domain::model::{DeleteOutcome, VenueControl};
use crate::domain::ports::ConfigProvider;
use chrono::Utc;
use reqwest::Client;
use std::collections::BTreeMap;

/// Dispatches deletion requests for the controls found on one listing
/// page. A single binder covers the whole page and looks controls up by
/// venue id, rather than holding a closure per element.
pub struct DeleteBinder<C: ConfigProvider> {
    config: C,
    client: Client,
    controls: BTreeMap<String, VenueControl>,
}

impl<C: ConfigProvider> DeleteBinder<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
            controls: BTreeMap::new(),
        }
    }

    /// Registers controls for dispatch. A later control with the same
    /// venue id replaces the earlier one.
    pub fn bind(&mut self, controls: Vec<VenueControl>) {
        for control in controls {
            self.controls.insert(control.venue_id.clone(), control);
        }
    }

    pub fn bound(&self) -> usize {
        self.controls.len()
    }

    /// The click analog: issues one background deletion request for the
    /// bound control. Any HTTP response counts as delivered, whatever
    /// the status code; only a request that never completes is a
    /// failure. Neither case returns an error.
    pub async fn trigger(&self, venue_id: &str) -> DeleteOutcome {
        match self.controls.get(venue_id) {
            Some(control) => self.dispatch(control).await,
            None => {
                tracing::warn!("No control bound for venue {}", venue_id);
                DeleteOutcome::Skipped {
                    reason: "not bound".to_string(),
                }
            }
        }
    }

    /// Triggers every bound control once, in venue id order. Requests
    /// are independent; one venue failing does not stop the rest.
    pub async fn trigger_all(&self) -> Vec<(String, DeleteOutcome)> {
        let mut outcomes = Vec::with_capacity(self.controls.len());
        for (venue_id, control) in &self.controls {
            outcomes.push((venue_id.clone(), self.dispatch(control).await));
        }
        outcomes
    }

    async fn dispatch(&self, control: &VenueControl) -> DeleteOutcome {
        if self.config.keep_upcoming() {
            if let Some(raw) = &control.next_show {
                if schedule::is_upcoming(raw, Utc::now()) {
                    tracing::info!(
                        "Venue {} still has an upcoming show, keeping it",
                        control.venue_id
                    );
                    return DeleteOutcome::Skipped {
                        reason: "upcoming show".to_string(),
                    };
                }
            }
        }

        if self.config.dry_run() {
            tracing::info!("Dry run, would delete venue {}", control.venue_id);
            return DeleteOutcome::Skipped {
                reason: "dry run".to_string(),
            };
        }

        let url = format!(
            "{}/venues/{}/delete",
            self.config.base_url().trim_end_matches('/'),
            control.venue_id
        );
        tracing::debug!("POST {}", url);

        match self.client.post(&url).send().await {
            Ok(response) => {
                // The page script never looked at the status code, so a
                // 500 lands on the success diagnostic too.
                tracing::info!("delete successful");
                tracing::debug!("Delete response status: {}", response.status());
                DeleteOutcome::Delivered {
                    status: response.status().as_u16(),
                }
            }
            Err(e) => {
                tracing::warn!("Delete request for venue {} failed: {}", control.venue_id, e);
                DeleteOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
