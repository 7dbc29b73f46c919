//! # Types
//!
//! Shared data structures of the campaign sale contract.
//!
//! ## Config / State split
//!
//! A `Campaign` is internally stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written once at launch; never mutated.
//! - [`CampaignState`] — written on every contribute, withdraw, refund
//!   and on claim.
//!
//! Contributions and withdrawals are the high-frequency writes; keeping the
//! mutable entry down to `pledged` + `claimed` means they rewrite ~20 bytes
//! instead of the full struct. The public API exposes the reconstructed
//! [`Campaign`] for convenience.

use soroban_sdk::{contracttype, Address};

/// Immutable campaign configuration, written once at launch.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub creator: Address,
    pub goal: i128,
    pub start_at: u64,
    pub end_at: u64,
}

/// Mutable campaign state, updated by contribute/withdraw/claim/refund.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    pub pledged: i128,
    pub claimed: bool,
}

/// Full representation of a campaign.
///
/// Used as the public API return type; reconstructed internally from the
/// split `CampaignConfig` + `CampaignState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Unique identifier, auto-incremented starting at 1.
    pub id: u64,
    /// Address that launched the campaign and may cancel or claim it.
    pub creator: Address,
    /// Target amount of the funding token.
    pub goal: i128,
    /// Running sum of all live pledges.
    pub pledged: i128,
    /// Ledger timestamp at which contributions open (inclusive).
    pub start_at: u64,
    /// Ledger timestamp at which contributions close (exclusive).
    pub end_at: u64,
    /// Set exactly once when the creator claims a met goal.
    pub claimed: bool,
}
