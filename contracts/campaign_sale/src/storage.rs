//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by the campaign sale:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type      | Description                          |
//! |-----------------|-----------|--------------------------------------|
//! | `Token`         | `Address` | Funding token held in custody        |
//! | `CampaignCount` | `u64`     | Last allocated campaign ID           |
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                        | Type             | Description             |
//! |----------------------------|------------------|-------------------------|
//! | `CampaignConfig(id)`       | `CampaignConfig` | Immutable configuration |
//! | `CampaignState(id)`        | `CampaignState`  | Mutable state           |
//! | `Pledge(id, contributor)`  | `i128`           | Live pledge amount      |
//!
//! An absent `Pledge` entry reads as zero. Cancelling a campaign removes its
//! config and state entries; since cancellation is only legal before the
//! contribution window opens, no pledge entries can exist at that point.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Campaign, CampaignConfig, CampaignState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 120 days when below 7 days remaining.
/// A campaign window can span 90 days and refunds happen after it closes,
/// so per-campaign entries need to outlive the longest possible window.
const PERSISTENT_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys (`Token`, `CampaignCount`) live as long as the
/// contract and are extended together. Persistent-tier keys hold
/// per-campaign data with independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Funding token accepted by every campaign (Instance).
    Token,
    /// Last allocated campaign ID; IDs start at 1 (Instance).
    CampaignCount,
    /// Immutable campaign configuration keyed by ID (Persistent).
    CampaignConfig(u64),
    /// Mutable campaign state keyed by ID (Persistent).
    CampaignState(u64),
    /// Live pledge amount keyed by (campaign ID, contributor) (Persistent).
    Pledge(u64, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Return `true` once the funding token has been set.
pub fn has_token(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

/// Store the funding token address in instance storage.
pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

/// Retrieve the funding token address.
/// Panics if the contract has not been initialized.
pub fn get_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .expect("token not set")
}

/// Atomically increments and stores the campaign counter.
/// Returns the ID to use for the *current* campaign; the first launch
/// returns 1 so that ID 0 always reads as "does not exist".
pub fn next_campaign_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0);
    let id = current + 1;
    env.storage().instance().set(&DataKey::CampaignCount, &id);
    id
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save both the immutable config and initial mutable state for a new campaign.
pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let config_key = DataKey::CampaignConfig(campaign.id);
    let state_key = DataKey::CampaignState(campaign.id);

    let config = CampaignConfig {
        id: campaign.id,
        creator: campaign.creator.clone(),
        goal: campaign.goal,
        start_at: campaign.start_at,
        end_at: campaign.end_at,
    };

    let state = CampaignState {
        pledged: campaign.pledged,
        claimed: campaign.claimed,
    };

    env.storage().persistent().set(&config_key, &config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Campaign` by combining config and state.
/// Panics with the canonical not-exist message if the campaign is absent.
pub fn load_campaign(env: &Env, id: u64) -> Campaign {
    let config = load_campaign_config(env, id);
    let state = load_campaign_state(env, id);
    Campaign {
        id: config.id,
        creator: config.creator,
        goal: config.goal,
        pledged: state.pledged,
        start_at: config.start_at,
        end_at: config.end_at,
        claimed: state.claimed,
    }
}

/// Load only the immutable campaign configuration.
/// Panics with the canonical not-exist message if the campaign is absent.
pub fn load_campaign_config(env: &Env, id: u64) -> CampaignConfig {
    let key = DataKey::CampaignConfig(id);
    let config: CampaignConfig = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic!("The campaign does not exist."));
    bump_persistent(env, &key);
    config
}

/// Load only the mutable campaign state.
pub fn load_campaign_state(env: &Env, id: u64) -> CampaignState {
    let key = DataKey::CampaignState(id);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic!("The campaign does not exist."));
    bump_persistent(env, &key);
    state
}

/// Save only the mutable campaign state (the contribute/withdraw hot path).
pub fn save_campaign_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::CampaignState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Remove a cancelled campaign entirely. Lookups afterwards behave exactly
/// as if the ID had never been allocated.
pub fn remove_campaign(env: &Env, id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::CampaignConfig(id));
    env.storage()
        .persistent()
        .remove(&DataKey::CampaignState(id));
}

// ── Pledge Helpers ───────────────────────────────────────────────────

/// Load a contributor's live pledge; absent entries read as zero.
pub fn load_pledge(env: &Env, id: u64, contributor: &Address) -> i128 {
    let key = DataKey::Pledge(id, contributor.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

/// Store a contributor's live pledge. A zero amount removes the entry so a
/// fully refunded pledge leaves no residue behind.
pub fn save_pledge(env: &Env, id: u64, contributor: &Address, amount: i128) {
    let key = DataKey::Pledge(id, contributor.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        bump_persistent(env, &key);
    }
}
