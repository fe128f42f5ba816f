//! Wallet view composition and search state
//!
//! `WalletView` bundles the three derived outputs (stats, chart series,
//! table rows) for one address. Each is computed independently from the same
//! activity list. `SearchState` is the request/response state the UI owns:
//! which address was asked for, and whether the answer is pending, loaded or
//! failed.

use {
    crate::{
        activity::WalletActivity,
        client::FetchError,
        rows::{normalize_rows, ActivityRow},
        series::{ChartPoint, SeriesBuilder},
        stats::WalletStats,
    },
    serde::Serialize,
};

/// Everything the presentation layer needs for one wallet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletView {
    pub address: String,
    pub stats: WalletStats,
    pub series: Vec<ChartPoint>,
    pub rows: Vec<ActivityRow>,
}

impl WalletView {
    /// Recompute all derived outputs from scratch
    pub fn build(address: &str, activities: &[WalletActivity], series: &SeriesBuilder) -> Self {
        Self {
            address: address.to_string(),
            stats: WalletStats::from_activities(activities),
            series: series.build(activities),
            rows: normalize_rows(activities),
        }
    }

    /// No activities at all for this wallet
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// At least one activity has a known amount
    pub fn has_chart_data(&self) -> bool {
        !self.series.is_empty()
    }
}

/// Phase of the current search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Loaded(WalletView),
    Failed(String),
}

/// Explicit request/response state for wallet searches
///
/// Each `begin` issues a new request id; results for older ids are dropped,
/// so a new search always supersedes one still in flight.
#[derive(Debug, Clone)]
pub struct SearchState {
    address: Option<String>,
    phase: SearchPhase,
    request_id: u64,
    series: SeriesBuilder,
}

impl SearchState {
    pub fn new(series: SeriesBuilder) -> Self {
        Self {
            address: None,
            phase: SearchPhase::Idle,
            request_id: 0,
            series,
        }
    }

    /// Start a search, clearing any previous result
    pub fn begin(&mut self, address: &str) -> u64 {
        self.request_id += 1;
        self.address = Some(address.to_string());
        self.phase = SearchPhase::Loading;
        self.request_id
    }

    /// Apply a fetch result
    ///
    /// Returns false (and changes nothing) when `request_id` is stale. A
    /// failed fetch never reaches the pipeline.
    pub fn complete(
        &mut self,
        request_id: u64,
        result: Result<Vec<WalletActivity>, FetchError>,
    ) -> bool {
        if request_id != self.request_id {
            log::debug!("Dropping stale result for request {}", request_id);
            return false;
        }

        let address = self.address.clone().unwrap_or_default();
        self.phase = match result {
            Ok(activities) => SearchPhase::Loaded(WalletView::build(&address, &activities, &self.series)),
            Err(e) => {
                log::warn!("Search for {} failed: {}", address, e);
                SearchPhase::Failed(e.to_string())
            }
        };
        true
    }

    /// Record a failure that happened before any request was sent
    pub fn reject(&mut self, message: String) {
        self.request_id += 1;
        self.address = None;
        self.phase = SearchPhase::Failed(message);
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn view(&self) -> Option<&WalletView> {
        match &self.phase {
            SearchPhase::Loaded(view) => Some(view),
            _ => None,
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(SeriesBuilder::default())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::activity::TxStatus};

    fn create_test_activity(signature: &str, sol_amount: Option<f64>) -> WalletActivity {
        WalletActivity {
            signature: signature.to_string(),
            timestamp: Some(1_700_000_000),
            slot: 1,
            confirmation_status: Some("finalized".to_string()),
            sol_amount,
            fee: Some(5000),
            status: TxStatus::Success,
            block_time: None,
        }
    }

    #[test]
    fn test_build_view() {
        let activities = vec![
            create_test_activity("b", Some(-1.0)),
            create_test_activity("a", None),
        ];
        let view = WalletView::build("wallet", &activities, &SeriesBuilder::default());

        assert_eq!(view.address, "wallet");
        assert_eq!(view.stats.total, 2);
        assert_eq!(view.series.len(), 1);
        assert_eq!(view.rows.len(), 2);
        assert!(!view.is_empty());
        assert!(view.has_chart_data());
    }

    #[test]
    fn test_no_known_amounts_has_no_chart_data() {
        let activities = vec![create_test_activity("a", None)];
        let view = WalletView::build("wallet", &activities, &SeriesBuilder::default());
        assert!(!view.is_empty());
        assert!(!view.has_chart_data());
    }

    #[test]
    fn test_empty_view() {
        let view = WalletView::build("wallet", &[], &SeriesBuilder::default());
        assert!(view.is_empty());
        assert!(!view.has_chart_data());
        assert!(view.rows.is_empty());
    }

    #[test]
    fn test_search_lifecycle() {
        let mut search = SearchState::default();
        assert_eq!(search.phase(), &SearchPhase::Idle);

        let id = search.begin("wallet");
        assert!(search.is_loading());
        assert_eq!(search.address(), Some("wallet"));

        assert!(search.complete(id, Ok(vec![create_test_activity("a", Some(1.0))])));
        let view = search.view().unwrap();
        assert_eq!(view.stats.total_received, 1.0);
        assert!(search.error().is_none());
    }

    #[test]
    fn test_failed_fetch_short_circuits() {
        let mut search = SearchState::default();
        let id = search.begin("wallet");

        let err = FetchError::Api {
            status: 400,
            message: "Invalid address: wallet".to_string(),
        };
        assert!(search.complete(id, Err(err)));
        assert_eq!(search.error(), Some("Invalid address: wallet"));
        assert!(search.view().is_none());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut search = SearchState::default();
        let first = search.begin("first");
        let second = search.begin("second");

        assert!(!search.complete(first, Ok(vec![create_test_activity("a", Some(1.0))])));
        assert!(search.is_loading());

        assert!(search.complete(second, Ok(vec![])));
        let view = search.view().unwrap();
        assert_eq!(view.address, "second");
        assert!(view.is_empty());
    }

    #[test]
    fn test_reject_invalidates_in_flight() {
        let mut search = SearchState::default();
        let id = search.begin("wallet");
        search.reject("Wallet address is empty".to_string());

        assert!(!search.complete(id, Ok(vec![])));
        assert_eq!(search.error(), Some("Wallet address is empty"));
        assert_eq!(search.address(), None);
    }
}
