//! # Campaign Sale Contract
//!
//! Crowdfunding escrow over a single Soroban token. Creators launch a
//! campaign with a goal and a time window; contributors pledge the funding
//! token while the window is open; at expiry either the creator claims the
//! full pledged amount (goal met) or contributors individually reclaim their
//! pledges (goal unmet).
//!
//! | Phase        | Entry Point(s)                                   |
//! |--------------|--------------------------------------------------|
//! | Bootstrap    | [`CampaignSale::initialize`]                     |
//! | Pre-start    | [`CampaignSale::launch_campaign`], [`CampaignSale::cancel_campaign`] |
//! | Open window  | [`CampaignSale::contribute`], [`CampaignSale::withdraw`] |
//! | Resolution   | [`CampaignSale::claim_campaign`], [`CampaignSale::refund_campaign`] |
//! | Queries      | [`CampaignSale::get_campaign`], [`CampaignSale::get_pledge`] |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`]; event payloads live in
//! [`events`]. This file contains only the public entry points: precondition
//! checks in a fixed order, the state commit, and the token transfer — in
//! that order. Committing the pledge bookkeeping before invoking the token
//! contract means a re-entrant call observes the already-updated ledger, so
//! no call sequence can move more funds than the recorded entitlement.
//!
//! Rejections are string panics whose messages are stable, externally
//! observable identifiers; each precondition has its own message and the
//! whole invocation rolls back when one fires.

#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use storage::{
    get_token, has_token, load_campaign, load_campaign_config, load_campaign_state, load_pledge,
    next_campaign_id, remove_campaign, save_campaign, save_campaign_state, save_pledge, set_token,
};
pub use types::{Campaign, CampaignConfig, CampaignState};

/// Upper bound on the contribution window, in seconds.
const MAX_CAMPAIGN_DURATION: u64 = 90 * 24 * 60 * 60;

#[contract]
pub struct CampaignSale;

#[contractimpl]
impl CampaignSale {
    /// Set the funding token held in custody for every campaign.
    ///
    /// Must be called exactly once after deployment; subsequent calls panic.
    pub fn initialize(env: Env, token: Address) {
        if has_token(&env) {
            panic!("Already initialized.");
        }
        set_token(&env, &token);
    }

    /// Launch a new campaign and return its ID.
    ///
    /// `start_at` and `end_at` must both lie strictly in the future,
    /// `end_at` after `start_at`, and the window may span at most 90 days.
    /// IDs are allocated sequentially starting at 1. No token movement.
    pub fn launch_campaign(
        env: Env,
        creator: Address,
        goal: i128,
        start_at: u64,
        end_at: u64,
    ) -> u64 {
        creator.require_auth();

        let now = env.ledger().timestamp();
        if goal <= 0 {
            panic!("Goal must be grater than 0.");
        }
        if start_at <= now {
            panic!("Campaign must start in the future.");
        }
        if end_at <= now {
            panic!("Campaign must end in the future.");
        }
        if end_at <= start_at {
            panic!("Ending date must be brefore Start date.");
        }
        if end_at - start_at > MAX_CAMPAIGN_DURATION {
            panic!("A campaign should last a maximum of 90 days.");
        }

        let id = next_campaign_id(&env);

        let campaign = Campaign {
            id,
            creator: creator.clone(),
            goal,
            pledged: 0,
            start_at,
            end_at,
            claimed: false,
        };
        save_campaign(&env, &campaign);

        events::launched(
            &env,
            events::Launched {
                id,
                creator,
                goal,
                start_at,
                end_at,
            },
        );

        id
    }

    /// Cancel a campaign before its window opens.
    ///
    /// Only the creator may cancel, and only strictly before `start_at`.
    /// The campaign entity is removed entirely; later lookups behave as if
    /// the ID had never been allocated. No pledges can exist yet, so no
    /// token movement happens.
    pub fn cancel_campaign(env: Env, caller: Address, id: u64) {
        let config = load_campaign_config(&env, id);

        caller.require_auth();
        if caller != config.creator {
            panic!("Only creator can call this function.");
        }
        if env.ledger().timestamp() >= config.start_at {
            panic!("The campaign has already started, you can't cancel it.");
        }

        remove_campaign(&env, id);

        events::cancelled(&env, events::Cancelled { id });
    }

    /// Pledge `amount` of the funding token to an open campaign.
    ///
    /// The pledge bookkeeping is committed before the transfer-in is
    /// invoked; if the transfer fails (insufficient balance or allowance)
    /// the whole invocation rolls back.
    pub fn contribute(env: Env, id: u64, contributor: Address, amount: i128) {
        contributor.require_auth();

        let config = load_campaign_config(&env, id);
        let now = env.ledger().timestamp();
        if now < config.start_at {
            panic!("The campaign has not started yet.");
        }
        if now >= config.end_at {
            panic!("The campaign has finished.");
        }

        let mut state = load_campaign_state(&env, id);
        state.pledged += amount;
        save_campaign_state(&env, id, &state);
        let pledge = load_pledge(&env, id, &contributor);
        save_pledge(&env, id, &contributor, pledge + amount);

        let token_client = token::Client::new(&env, &get_token(&env));
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        events::contributed(
            &env,
            events::Contributed {
                id,
                contributor,
                amount,
            },
        );
    }

    /// Take back `amount` of a pledge while the window is still open.
    ///
    /// Lets a contributor adjust their stake before the campaign resolves.
    /// A caller with no pledge at all is told so distinctly from one whose
    /// pledge is merely smaller than `amount`.
    pub fn withdraw(env: Env, id: u64, contributor: Address, amount: i128) {
        contributor.require_auth();

        let config = load_campaign_config(&env, id);
        let now = env.ledger().timestamp();
        if now < config.start_at {
            panic!("The campaign has not started yet.");
        }
        if now >= config.end_at {
            panic!("The campaign has finished.");
        }

        let pledge = load_pledge(&env, id, &contributor);
        if pledge == 0 {
            panic!("The amount to withdraw is greater than the amount you contributed.");
        }
        if amount > pledge {
            panic!("The amount to withdraw is greater than the amount contributed.");
        }

        let mut state = load_campaign_state(&env, id);
        state.pledged -= amount;
        save_campaign_state(&env, id, &state);
        save_pledge(&env, id, &contributor, pledge - amount);

        let token_client = token::Client::new(&env, &get_token(&env));
        token_client.transfer(&env.current_contract_address(), &contributor, &amount);

        events::withdrawn(
            &env,
            events::Withdrawn {
                id,
                contributor,
                amount,
            },
        );
    }

    /// Pay the full pledged amount out to the creator of a met goal.
    ///
    /// Pays the live `pledged` snapshot at claim time, which reflects any
    /// withdrawals made before the window closed. Individual pledges are
    /// not zeroed: the goal was met, so they are no longer refundable, and
    /// withdraw is barred because the window has closed.
    pub fn claim_campaign(env: Env, caller: Address, id: u64) {
        let config = load_campaign_config(&env, id);

        caller.require_auth();
        if caller != config.creator {
            panic!("Only creator can call this function.");
        }
        if env.ledger().timestamp() < config.end_at {
            panic!("The campaign has not finished yet.");
        }

        let mut state = load_campaign_state(&env, id);
        if state.claimed {
            panic!("Campaign was already claimed.");
        }
        if state.pledged < config.goal {
            panic!("The goal of the campaign has not been reached.");
        }

        let amount = state.pledged;
        state.claimed = true;
        save_campaign_state(&env, id, &state);

        let token_client = token::Client::new(&env, &get_token(&env));
        token_client.transfer(&env.current_contract_address(), &config.creator, &amount);

        events::claimed(&env, events::Claimed { id, amount });
    }

    /// Return the caller's full pledge from a campaign that missed its goal.
    ///
    /// Each contributor may recover exactly once; the pledge entry is zeroed
    /// before the transfer-out, so a repeated call rejects.
    pub fn refund_campaign(env: Env, caller: Address, id: u64) {
        let config = load_campaign_config(&env, id);

        caller.require_auth();
        if env.ledger().timestamp() < config.end_at {
            panic!("The campaign has not finished yet.");
        }

        let mut state = load_campaign_state(&env, id);
        if state.pledged >= config.goal {
            panic!("The goal of the campaign has been reached.");
        }

        let pledge = load_pledge(&env, id, &caller);
        if pledge == 0 {
            panic!("You have not contributed to this campaign.");
        }

        state.pledged -= pledge;
        save_campaign_state(&env, id, &state);
        save_pledge(&env, id, &caller, 0);

        let token_client = token::Client::new(&env, &get_token(&env));
        token_client.transfer(&env.current_contract_address(), &caller, &pledge);

        events::refunded(
            &env,
            events::Refunded {
                id,
                contributor: caller,
                amount: pledge,
            },
        );
    }

    /// Retrieve a campaign by its ID.
    ///
    /// Cancelled IDs behave exactly like never-allocated ones.
    pub fn get_campaign(env: Env, id: u64) -> Campaign {
        load_campaign(&env, id)
    }

    /// Retrieve a contributor's live pledge for a campaign (zero if none).
    pub fn get_pledge(env: Env, id: u64, contributor: Address) -> i128 {
        // Existence check first so queries on cancelled/unknown IDs reject
        // the same way get_campaign does.
        load_campaign_config(&env, id);
        load_pledge(&env, id, &contributor)
    }
}
