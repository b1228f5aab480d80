use serde::{Deserialize, Serialize};

/// A delete control lifted from the venue listing markup: one element with
/// the marker class and a per-element venue identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueControl {
    /// Opaque identifier read from the id attribute, kept verbatim.
    pub venue_id: String,
    /// Raw `data-next-show` timestamp, if the element carries one.
    pub next_show: Option<String>,
}

impl VenueControl {
    pub fn new(venue_id: impl Into<String>) -> Self {
        Self {
            venue_id: venue_id.into(),
            next_show: None,
        }
    }
}

/// What happened to a single delete trigger. Deletion is fire-and-forget,
/// so failures are reported as values rather than bubbling up as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// The request completed with some HTTP response. The status code is
    /// recorded but not interpreted; a 500 still counts as delivered.
    Delivered { status: u16 },
    /// The request never completed (connection refused, DNS, timeout).
    Failed { reason: String },
    /// No request was issued: dry run, or the upcoming-show guard held it.
    Skipped { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepEntry {
    pub venue_id: String,
    #[serde(flatten)]
    pub outcome: DeleteOutcome,
}

/// Summary of one sweep over the listing page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepReport {
    pub scanned: usize,
    pub entries: Vec<SweepEntry>,
}

impl SweepReport {
    pub fn record(&mut self, venue_id: impl Into<String>, outcome: DeleteOutcome) {
        self.entries.push(SweepEntry {
            venue_id: venue_id.into(),
            outcome,
        });
    }

    pub fn delivered(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, DeleteOutcome::Delivered { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, DeleteOutcome::Failed { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, DeleteOutcome::Skipped { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_by_outcome() {
        let mut report = SweepReport::default();
        report.scanned = 3;
        report.record("1", DeleteOutcome::Delivered { status: 200 });
        report.record(
            "2",
            DeleteOutcome::Failed {
                reason: "connection refused".to_string(),
            },
        );
        report.record(
            "3",
            DeleteOutcome::Skipped {
                reason: "dry run".to_string(),
            },
        );

        assert_eq!(report.delivered(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 1);
    }

    #[test]
    fn test_entry_serializes_with_outcome_tag() {
        let entry = SweepEntry {
            venue_id: "42".to_string(),
            outcome: DeleteOutcome::Delivered { status: 500 },
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["venue_id"], "42");
        assert_eq!(json["outcome"], "delivered");
        assert_eq!(json["status"], 500);
    }
}
