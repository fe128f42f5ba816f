//! # walletflow
//!
//! Wallet activity dashboard for a single Solana address.
//!
//! ## Pipeline
//!
//! A fetched activity list (newest first) feeds three independent, pure
//! passes:
//!
//! - `stats` - totals received/sent, fees, success/failure counts
//! - `series` - oldest-first chart points for records with a known amount
//! - `rows` - one display row per record (status glyph, explorer link)
//!
//! `view` composes them into a `WalletView`; `format` holds the shared
//! display helpers.
//!
//! ## Glue
//!
//! - `client` - fetches activity lists from the wallet API
//! - `address` - validates submitted addresses
//! - `config` - environment configuration
//! - `ui` - terminal dashboard

pub mod activity;
pub mod address;
pub mod client;
pub mod config;
pub mod format;
pub mod rows;
pub mod series;
pub mod stats;
pub mod ui;
pub mod view;

pub use {
    activity::{TxStatus, WalletActivity},
    client::{ActivitySource, FetchError, WalletApiClient},
    view::{SearchPhase, SearchState, WalletView},
};
