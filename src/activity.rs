use serde::{Deserialize, Serialize};

/// Outcome of a transaction as reported by the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Failed,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Success => "success",
            TxStatus::Failed => "failed",
        }
    }
}

/// One observed transaction touching the tracked address
///
/// Records are produced upstream (already decoded) and treated as read-only
/// input: every derived view borrows them and builds new values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletActivity {
    /// Transaction signature (opaque, expected unique within a list)
    pub signature: String,
    /// Block time in seconds since epoch, absent until the chain confirms it
    pub timestamp: Option<i64>,
    /// Ledger position
    pub slot: u64,
    /// Informational commitment tag, e.g. "finalized"
    pub confirmation_status: Option<String>,
    /// Net balance change for the tracked address, in whole SOL
    pub sol_amount: Option<f64>,
    /// Transaction fee in lamports
    pub fee: Option<u64>,
    pub status: TxStatus,
    /// Pre-formatted block time, preferred over `timestamp` for display
    pub block_time: Option<String>,
}

impl WalletActivity {
    pub fn is_success(&self) -> bool {
        self.status == TxStatus::Success
    }

    /// Display label for the activity's time: `block_time` if the upstream
    /// provided one, otherwise derived from `timestamp`
    pub fn time_label(&self) -> String {
        match &self.block_time {
            Some(block_time) if !block_time.is_empty() => block_time.clone(),
            _ => crate::format::format_timestamp(self.timestamp),
        }
    }
}

/// Error body returned by the wallet API on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{
            "signature": "5h6xBEauJ3PK6SWCZ1PGjBvj8vDdWG3KpwATGy1ARAXFSDwt8GFXM7W5Ncn16wmqokgpiKRLuS83KUxyZyv2sUYv",
            "timestamp": 1700000000,
            "slot": 230000000,
            "confirmation_status": "Finalized",
            "sol_amount": -0.25,
            "fee": 5000,
            "status": "success",
            "block_time": "2023-11-14 22:13:20 UTC"
        }"#;

        let activity: WalletActivity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.slot, 230_000_000);
        assert_eq!(activity.sol_amount, Some(-0.25));
        assert_eq!(activity.fee, Some(5000));
        assert_eq!(activity.status, TxStatus::Success);
        assert_eq!(activity.time_label(), "2023-11-14 22:13:20 UTC");
    }

    #[test]
    fn test_deserialize_nulls() {
        let json = r#"{
            "signature": "abc",
            "timestamp": null,
            "slot": 1,
            "confirmation_status": null,
            "sol_amount": null,
            "fee": null,
            "status": "failed",
            "block_time": null
        }"#;

        let activity: WalletActivity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.sol_amount, None);
        assert_eq!(activity.fee, None);
        assert!(!activity.is_success());
        assert_eq!(activity.time_label(), "N/A");
    }

    #[test]
    fn test_zero_amount_is_not_absent() {
        let json = r#"{"signature":"z","timestamp":null,"slot":1,"confirmation_status":null,
            "sol_amount":0.0,"fee":null,"status":"success","block_time":null}"#;
        let activity: WalletActivity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.sol_amount, Some(0.0));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let json = r#"{"signature":"z","timestamp":null,"slot":1,"confirmation_status":null,
            "sol_amount":null,"fee":null,"status":"pending","block_time":null}"#;
        assert!(serde_json::from_str::<WalletActivity>(json).is_err());
    }
}
