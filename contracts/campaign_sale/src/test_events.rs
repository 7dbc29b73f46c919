extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};

use crate::events::{Cancelled, Claimed, Contributed, Launched, Refunded, Withdrawn};
use crate::{CampaignSale, CampaignSaleClient};

const BASE: u64 = 1_700_000_000;
const WEEK: u64 = 7 * 24 * 60 * 60;

fn setup<'a>() -> (
    Env,
    CampaignSaleClient<'static>,
    token::Client<'a>,
    token::StellarAssetClient<'a>,
) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = BASE);
    let contract_id = env.register(CampaignSale, ());
    let client = CampaignSaleClient::new(&env, &contract_id);

    let token_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(token_admin);
    let token = token::Client::new(&env, &sac.address());
    let token_sac = token::StellarAssetClient::new(&env, &sac.address());
    client.initialize(&token.address);
    (env, client, token, token_sac)
}

fn warp_to(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}

#[test]
fn launched_event() {
    let (env, client, _token, _sac) = setup();
    let creator = Address::generate(&env);
    let start_at = BASE + WEEK;
    let end_at = BASE + 3 * WEEK;

    let id = client.launch_campaign(&creator, &1000, &start_at, &end_at);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("launched").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Launched = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Launched {
            id,
            creator: creator.clone(),
            goal: 1000,
            start_at,
            end_at,
        }
    );
}

#[test]
fn cancelled_event() {
    let (env, client, _token, _sac) = setup();
    let creator = Address::generate(&env);
    let id = client.launch_campaign(&creator, &1000, &(BASE + WEEK), &(BASE + 3 * WEEK));

    client.cancel_campaign(&creator, &id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("cancelled").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Cancelled = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, Cancelled { id });
}

#[test]
fn contributed_event() {
    let (env, client, _token, token_sac) = setup();
    let creator = Address::generate(&env);
    let contributor = Address::generate(&env);
    token_sac.mint(&contributor, &10_000);

    let id = client.launch_campaign(&creator, &1000, &(BASE + WEEK), &(BASE + 3 * WEEK));
    warp_to(&env, BASE + WEEK);
    client.contribute(&id, &contributor, &800);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("contrib").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Contributed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Contributed {
            id,
            contributor: contributor.clone(),
            amount: 800,
        }
    );
}

#[test]
fn withdrawn_event() {
    let (env, client, _token, token_sac) = setup();
    let creator = Address::generate(&env);
    let contributor = Address::generate(&env);
    token_sac.mint(&contributor, &10_000);

    let id = client.launch_campaign(&creator, &1000, &(BASE + WEEK), &(BASE + 3 * WEEK));
    warp_to(&env, BASE + WEEK);
    client.contribute(&id, &contributor, &800);
    client.withdraw(&id, &contributor, &100);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("withdrawn").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Withdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Withdrawn {
            id,
            contributor: contributor.clone(),
            amount: 100,
        }
    );
}

#[test]
fn claimed_event_carries_live_snapshot() {
    let (env, client, _token, token_sac) = setup();
    let creator = Address::generate(&env);
    token_sac.mint(&creator, &10_000);

    let id = client.launch_campaign(&creator, &1000, &(BASE + WEEK), &(BASE + 3 * WEEK));
    warp_to(&env, BASE + WEEK);
    client.contribute(&id, &creator, &800);
    client.withdraw(&id, &creator, &100);
    client.contribute(&id, &creator, &700);
    warp_to(&env, BASE + 3 * WEEK);
    client.claim_campaign(&creator, &id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("claimed").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Claimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, Claimed { id, amount: 1400 });
}

#[test]
fn refunded_event() {
    let (env, client, _token, token_sac) = setup();
    let creator = Address::generate(&env);
    let contributor = Address::generate(&env);
    token_sac.mint(&contributor, &10_000);

    let id = client.launch_campaign(&creator, &8_000_000, &(BASE + WEEK), &(BASE + 2 * WEEK));
    warp_to(&env, BASE + WEEK);
    client.contribute(&id, &contributor, &800);
    warp_to(&env, BASE + 2 * WEEK);
    client.refund_campaign(&contributor, &id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("refunded").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Refunded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Refunded {
            id,
            contributor: contributor.clone(),
            amount: 800,
        }
    );
}
