//! # Events
//!
//! One record per successful mutating entry point. Every event is published
//! with the topic shape `(symbol_short!(tag), campaign_id)` and a
//! `#[contracttype]` payload struct, so off-chain consumers (the indexer in
//! `backend/indexer`) can filter by tag and campaign without decoding the
//! payload.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// A campaign was launched (`launched` topic).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Launched {
    pub id: u64,
    pub creator: Address,
    pub goal: i128,
    pub start_at: u64,
    pub end_at: u64,
}

/// A campaign was cancelled before its start (`cancelled` topic).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cancelled {
    pub id: u64,
}

/// A contributor pledged funds (`contrib` topic).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contributed {
    pub id: u64,
    pub contributor: Address,
    pub amount: i128,
}

/// A contributor withdrew part of their pledge during the window
/// (`withdrawn` topic).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub id: u64,
    pub contributor: Address,
    pub amount: i128,
}

/// The creator claimed a met goal (`claimed` topic).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claimed {
    pub id: u64,
    pub amount: i128,
}

/// A contributor recovered their pledge from an unmet goal
/// (`refunded` topic).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Refunded {
    pub id: u64,
    pub contributor: Address,
    pub amount: i128,
}

pub fn launched(env: &Env, event: Launched) {
    env.events()
        .publish((symbol_short!("launched"), event.id), event);
}

pub fn cancelled(env: &Env, event: Cancelled) {
    env.events()
        .publish((symbol_short!("cancelled"), event.id), event);
}

pub fn contributed(env: &Env, event: Contributed) {
    env.events()
        .publish((symbol_short!("contrib"), event.id), event);
}

pub fn withdrawn(env: &Env, event: Withdrawn) {
    env.events()
        .publish((symbol_short!("withdrawn"), event.id), event);
}

pub fn claimed(env: &Env, event: Claimed) {
    env.events()
        .publish((symbol_short!("claimed"), event.id), event);
}

pub fn refunded(env: &Env, event: Refunded) {
    env.events()
        .publish((symbol_short!("refunded"), event.id), event);
}
