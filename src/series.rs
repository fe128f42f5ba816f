//! Chart series builder
//!
//! Turns an activity list into the oldest-first `(label, value)` sequence the
//! bar chart plots. Records without a known SOL amount are skipped.
//!
//! ## Ordering
//!
//! The wallet API returns activities newest-first, so the default
//! `InputOrder::NewestFirst` simply reverses the filtered points. If the
//! upstream order is not guaranteed, use `InputOrder::Unordered`, which sorts
//! the points by `(slot, timestamp)` instead.

use {
    crate::{activity::WalletActivity, format::{format_sol, to_fixed}},
    serde::Serialize,
    std::str::FromStr,
};

/// Ordering contract of the activity list handed to the builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputOrder {
    /// Newest activity first (wallet API order)
    #[default]
    NewestFirst,
    /// No ordering guarantee; sort by ledger position
    Unordered,
}

impl FromStr for InputOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest_first" | "newest-first" => Ok(InputOrder::NewestFirst),
            "unordered" => Ok(InputOrder::Unordered),
            other => Err(format!("unknown series input order: {}", other)),
        }
    }
}

/// A single bar in the activity chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// X-axis label (block time)
    pub label: String,
    /// Net SOL change
    pub value: f64,
    pub signature: String,
}

impl ChartPoint {
    /// Inflows (including zero) are drawn in the "received" colour
    pub fn is_inflow(&self) -> bool {
        self.value >= 0.0
    }

    pub fn tooltip(&self) -> String {
        format!("{} SOL", to_fixed(self.value, 4))
    }
}

/// Builds chart series from activity lists
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesBuilder {
    order: InputOrder,
}

impl SeriesBuilder {
    pub fn new(order: InputOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> InputOrder {
        self.order
    }

    /// Build the oldest-first series
    ///
    /// An empty result means there is nothing to chart; it is not an error.
    pub fn build(&self, activities: &[WalletActivity]) -> Vec<ChartPoint> {
        let mut keyed: Vec<((u64, i64), ChartPoint)> = activities
            .iter()
            .filter_map(|activity| {
                let value = activity.sol_amount?;
                let key = (activity.slot, activity.timestamp.unwrap_or(0));
                Some((
                    key,
                    ChartPoint {
                        label: activity.time_label(),
                        value,
                        signature: activity.signature.clone(),
                    },
                ))
            })
            .collect();

        match self.order {
            InputOrder::NewestFirst => keyed.reverse(),
            // Stable: equal keys keep their input order
            InputOrder::Unordered => keyed.sort_by_key(|(key, _)| *key),
        }

        let points: Vec<ChartPoint> = keyed.into_iter().map(|(_, point)| point).collect();
        log::debug!(
            "Built chart series: {} of {} activities chartable",
            points.len(),
            activities.len()
        );
        points
    }
}

/// Build the series for newest-first input (wallet API order)
pub fn build_series(activities: &[WalletActivity]) -> Vec<ChartPoint> {
    SeriesBuilder::default().build(activities)
}

/// Format a series total for the chart caption
pub fn series_caption(points: &[ChartPoint]) -> String {
    let net: f64 = points.iter().map(|p| p.value).sum();
    format!("{} points, net {}", points.len(), format_sol(net))
}
