use {
    crate::{
        activity::{TxStatus, WalletActivity},
        format::{format_fee_sol, format_sol_amount, shorten_identifier, NOT_AVAILABLE},
    },
    serde::Serialize,
};

/// Explorer URL prefix; the transaction signature is appended
pub const EXPLORER_TX_URL: &str = "https://explorer.solana.com/tx/";

/// Characters kept on each side of a shortened signature in the table
pub const SIGNATURE_KEEP: usize = 8;

/// Sign classification of an activity's SOL amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountSign {
    Positive,
    Negative,
    /// Absent or exactly zero
    Neutral,
}

impl AmountSign {
    pub fn classify(amount: Option<f64>) -> Self {
        match amount {
            Some(value) if value > 0.0 => AmountSign::Positive,
            Some(value) if value < 0.0 => AmountSign::Negative,
            _ => AmountSign::Neutral,
        }
    }
}

/// Status indicator shown in the first table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusGlyph {
    Check,
    Cross,
}

impl StatusGlyph {
    pub fn for_status(status: TxStatus) -> Self {
        match status {
            TxStatus::Success => StatusGlyph::Check,
            TxStatus::Failed => StatusGlyph::Cross,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            StatusGlyph::Check => "✔",
            StatusGlyph::Cross => "✘",
        }
    }
}

/// Display-ready table row for one activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRow {
    pub status: TxStatus,
    pub glyph: StatusGlyph,
    pub signature: String,
    pub short_signature: String,
    pub amount: String,
    pub amount_sign: AmountSign,
    pub fee: String,
    pub time: String,
    pub confirmation: String,
    pub explorer_url: String,
}

impl ActivityRow {
    pub fn from_activity(activity: &WalletActivity) -> Self {
        Self {
            status: activity.status,
            glyph: StatusGlyph::for_status(activity.status),
            signature: activity.signature.clone(),
            short_signature: shorten_identifier(&activity.signature, SIGNATURE_KEEP),
            amount: format_sol_amount(activity.sol_amount),
            amount_sign: AmountSign::classify(activity.sol_amount),
            fee: format_fee_sol(activity.fee),
            time: activity.time_label(),
            confirmation: activity
                .confirmation_status
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            explorer_url: explorer_url(&activity.signature),
        }
    }
}

/// Explorer link for a transaction signature
pub fn explorer_url(signature: &str) -> String {
    format!("{}{}", EXPLORER_TX_URL, signature)
}

/// Map every activity to a table row, preserving input order
pub fn normalize_rows(activities: &[WalletActivity]) -> Vec<ActivityRow> {
    activities.iter().map(ActivityRow::from_activity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_activity(signature: &str, sol_amount: Option<f64>, status: TxStatus) -> WalletActivity {
        WalletActivity {
            signature: signature.to_string(),
            timestamp: None,
            slot: 42,
            confirmation_status: None,
            sol_amount,
            fee: Some(5000),
            status,
            block_time: Some("2023-11-14 22:13:20 UTC".to_string()),
        }
    }

    #[test]
    fn test_amount_sign() {
        assert_eq!(AmountSign::classify(Some(0.1)), AmountSign::Positive);
        assert_eq!(AmountSign::classify(Some(-0.1)), AmountSign::Negative);
        assert_eq!(AmountSign::classify(Some(0.0)), AmountSign::Neutral);
        assert_eq!(AmountSign::classify(None), AmountSign::Neutral);
    }

    #[test]
    fn test_row_fields() {
        let signature = "5h6xBEauJ3PK6SWCZ1PGjBvj8vDdWG3KpwATGy1ARAXF";
        let row = ActivityRow::from_activity(&create_test_activity(signature, Some(-2.5), TxStatus::Failed));

        assert_eq!(row.glyph, StatusGlyph::Cross);
        assert_eq!(row.glyph.symbol(), "✘");
        assert_eq!(row.short_signature, "5h6xBEau...Gy1ARAXF");
        assert_eq!(row.amount, "-2.5000 SOL");
        assert_eq!(row.amount_sign, AmountSign::Negative);
        assert_eq!(row.fee, "0.000005 SOL");
        assert_eq!(row.time, "2023-11-14 22:13:20 UTC");
        assert_eq!(row.confirmation, "N/A");
        assert_eq!(
            row.explorer_url,
            format!("https://explorer.solana.com/tx/{}", signature)
        );
    }

    #[test]
    fn test_preserves_order() {
        let activities = vec![
            create_test_activity("one", Some(1.0), TxStatus::Success),
            create_test_activity("two", None, TxStatus::Success),
            create_test_activity("three", Some(-1.0), TxStatus::Failed),
        ];
        let rows = normalize_rows(&activities);

        let signatures: Vec<&str> = rows.iter().map(|r| r.signature.as_str()).collect();
        assert_eq!(signatures, vec!["one", "two", "three"]);
        assert_eq!(rows[0].glyph, StatusGlyph::Check);
        assert_eq!(rows[1].amount, "N/A");
        assert_eq!(rows[1].amount_sign, AmountSign::Neutral);
    }

    #[test]
    fn test_empty() {
        assert!(normalize_rows(&[]).is_empty());
    }
}
