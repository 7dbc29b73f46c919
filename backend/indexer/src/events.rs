//! Canonical event types emitted by the campaign sale contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/campaign_sale/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the campaign sale contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A campaign was launched (`launched` topic).
    CampaignLaunched,
    /// A campaign was cancelled before start (`cancelled` topic).
    CampaignCancelled,
    /// A contributor pledged funds (`contrib` topic).
    Contributed,
    /// A contributor took back part of a pledge (`withdrawn` topic).
    Withdrawn,
    /// The creator claimed a met goal (`claimed` topic).
    Claimed,
    /// A contributor recovered a pledge from an unmet goal (`refunded` topic).
    Refunded,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "launched" => Self::CampaignLaunched,
            "cancelled" => Self::CampaignCancelled,
            "contrib" => Self::Contributed,
            "withdrawn" => Self::Withdrawn,
            "claimed" => Self::Claimed,
            "refunded" => Self::Refunded,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CampaignLaunched => "campaign_launched",
            Self::CampaignCancelled => "campaign_cancelled",
            Self::Contributed => "contributed",
            Self::Withdrawn => "withdrawn",
            Self::Claimed => "claimed",
            Self::Refunded => "refunded",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded campaign event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignEvent {
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
