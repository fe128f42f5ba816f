use {
    crate::{
        activity::{TxStatus, WalletActivity},
        format::{format_sol, to_fixed, LAMPORTS_PER_SOL},
    },
    serde::Serialize,
};

/// Summary statistics over a wallet's activity list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WalletStats {
    /// Sum of positive SOL amounts
    pub total_received: f64,
    /// Magnitude of the sum of negative SOL amounts
    pub total_sent: f64,
    /// Sum of all present fees, in SOL
    pub total_fees: f64,
    pub success_count: usize,
    pub failed_count: usize,
    pub total: usize,
}

impl WalletStats {
    /// Aggregate an activity list in a single pass
    ///
    /// Records without a known amount still count towards the status
    /// counters and the fee total.
    pub fn from_activities(activities: &[WalletActivity]) -> Self {
        let mut received = 0.0_f64;
        let mut sent = 0.0_f64;
        let mut fee_lamports: u128 = 0;
        let mut success_count = 0;
        let mut failed_count = 0;

        for activity in activities {
            match activity.sol_amount {
                Some(amount) if amount > 0.0 => received += amount,
                Some(amount) if amount < 0.0 => sent += amount,
                _ => {}
            }

            fee_lamports += u128::from(activity.fee.unwrap_or(0));

            match activity.status {
                TxStatus::Success => success_count += 1,
                TxStatus::Failed => failed_count += 1,
            }
        }

        let stats = Self {
            total_received: received,
            // Sum the outflows first, then flip the sign once
            total_sent: sent.abs(),
            total_fees: fee_lamports as f64 / LAMPORTS_PER_SOL as f64,
            success_count,
            failed_count,
            total: activities.len(),
        };

        log::debug!(
            "Aggregated {} activities: received={:.6} sent={:.6} fees={:.9}",
            stats.total,
            stats.total_received,
            stats.total_sent,
            stats.total_fees
        );

        stats
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Net SOL flow (received - sent)
    pub fn net_flow(&self) -> f64 {
        self.total_received - self.total_sent
    }

    /// Project the statistics into the dashboard's four summary cards
    pub fn stat_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                title: "Total Received",
                value: format_sol(self.total_received),
                subtitle: None,
                tone: CardTone::Positive,
            },
            StatCard {
                title: "Total Sent",
                value: format_sol(self.total_sent),
                subtitle: None,
                tone: CardTone::Negative,
            },
            StatCard {
                title: "Total Fees",
                value: format!("{} SOL", to_fixed(self.total_fees, 6)),
                subtitle: None,
                tone: CardTone::Fees,
            },
            StatCard {
                title: "Transactions",
                value: format!("{} / {}", self.success_count, self.total),
                subtitle: Some(format!("{} failed", self.failed_count)),
                tone: CardTone::Neutral,
            },
        ]
    }
}

/// Colour hint for a summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTone {
    Positive,
    Negative,
    Fees,
    Neutral,
}

/// One display card (title, headline value, optional subtitle)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub subtitle: Option<String>,
    pub tone: CardTone,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_activity(sol_amount: Option<f64>, fee: Option<u64>, status: TxStatus) -> WalletActivity {
        WalletActivity {
            signature: "sig".to_string(),
            timestamp: Some(1_700_000_000),
            slot: 1,
            confirmation_status: Some("finalized".to_string()),
            sol_amount,
            fee,
            status,
            block_time: None,
        }
    }

    #[test]
    fn test_empty_list() {
        let stats = WalletStats::from_activities(&[]);
        assert_eq!(stats, WalletStats::default());
        assert!(stats.is_empty());
    }

    #[test]
    fn test_single_received() {
        let activities = vec![create_test_activity(Some(1.0), Some(5000), TxStatus::Success)];
        let stats = WalletStats::from_activities(&activities);

        assert_eq!(stats.total_received, 1.0);
        assert_eq!(stats.total_sent, 0.0);
        assert_eq!(stats.total_fees, 0.000005);
        assert_eq!(stats.success_count, 1);
        assert_eq!(stats.failed_count, 0);
        assert_eq!(stats.total, 1);
    }

    #[test]
    fn test_sign_bucketing() {
        let activities = vec![
            create_test_activity(Some(2.0), None, TxStatus::Success),
            create_test_activity(Some(-0.5), Some(5000), TxStatus::Success),
            create_test_activity(Some(-1.5), Some(10_000), TxStatus::Failed),
            create_test_activity(Some(0.0), None, TxStatus::Success),
            create_test_activity(None, Some(5000), TxStatus::Failed),
        ];
        let stats = WalletStats::from_activities(&activities);

        assert_eq!(stats.total_received, 2.0);
        assert_eq!(stats.total_sent, 2.0);
        assert_eq!(stats.total_fees, 0.00002);
        assert_eq!(stats.success_count, 3);
        assert_eq!(stats.failed_count, 2);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.net_flow(), 0.0);
    }

    #[test]
    fn test_fee_sum_does_not_overflow() {
        let activities = vec![
            create_test_activity(None, Some(u64::MAX), TxStatus::Success),
            create_test_activity(None, Some(u64::MAX), TxStatus::Success),
        ];
        let stats = WalletStats::from_activities(&activities);
        assert!(stats.total_fees > 0.0);
    }

    #[test]
    fn test_stat_cards_round_ties_up() {
        let activities = vec![
            create_test_activity(Some(0.03125), Some(7_812_500), TxStatus::Success),
            create_test_activity(Some(-0.03125), None, TxStatus::Success),
        ];
        let cards = WalletStats::from_activities(&activities).stat_cards();

        assert_eq!(cards[0].value, "0.0313 SOL");
        assert_eq!(cards[1].value, "0.0313 SOL");
        assert_eq!(cards[2].value, "0.007813 SOL");
    }

    #[test]
    fn test_stat_cards() {
        let activities = vec![
            create_test_activity(Some(1.0), Some(5000), TxStatus::Success),
            create_test_activity(Some(-0.25), None, TxStatus::Failed),
        ];
        let cards = WalletStats::from_activities(&activities).stat_cards();

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "1.0000 SOL");
        assert_eq!(cards[1].value, "0.2500 SOL");
        assert_eq!(cards[2].value, "0.000005 SOL");
        assert_eq!(cards[3].value, "1 / 2");
        assert_eq!(cards[3].subtitle.as_deref(), Some("1 failed"));
        assert_eq!(cards[3].tone, CardTone::Neutral);
    }
}
