#![allow(dead_code)]

extern crate std;

use crate::types::Campaign;

/// Campaign `pledged` must never be negative.
pub fn assert_pledged_non_negative(campaign: &Campaign) {
    assert!(
        campaign.pledged >= 0,
        "campaign {} has negative pledged ({})",
        campaign.id,
        campaign.pledged
    );
}

/// Campaign goal must always be positive.
pub fn assert_goal_positive(campaign: &Campaign) {
    assert!(
        campaign.goal > 0,
        "campaign {} has non-positive goal ({})",
        campaign.id,
        campaign.goal
    );
}

/// The contribution window must be well-formed: `start_at < end_at` and at
/// most 90 days long.
pub fn assert_window_valid(campaign: &Campaign) {
    assert!(
        campaign.start_at < campaign.end_at,
        "campaign {} has start_at {} >= end_at {}",
        campaign.id,
        campaign.start_at,
        campaign.end_at
    );
    assert!(
        campaign.end_at - campaign.start_at <= 90 * 24 * 60 * 60,
        "campaign {} window exceeds 90 days",
        campaign.id
    );
}

/// Conservation: `pledged` equals the sum of all live pledge amounts, and
/// no individual pledge exceeds the aggregate.
pub fn assert_pledged_matches(campaign: &Campaign, pledges: &[i128]) {
    let sum: i128 = pledges.iter().sum();
    assert_eq!(
        campaign.pledged, sum,
        "campaign {}: pledged {} != sum of pledges {}",
        campaign.id, campaign.pledged, sum
    );
    for (i, pledge) in pledges.iter().enumerate() {
        assert!(
            *pledge >= 0 && *pledge <= campaign.pledged,
            "campaign {}: pledge #{} ({}) outside [0, {}]",
            campaign.id,
            i,
            pledge,
            campaign.pledged
        );
    }
}

/// `claimed` is monotonic: once observed true it must never revert.
pub fn assert_claimed_monotonic(before: bool, after: bool) {
    assert!(
        !(before && !after),
        "claimed flag reverted from true to false"
    );
}

/// Fields written at launch must never change afterwards.
pub fn assert_campaign_immutable_fields(original: &Campaign, current: &Campaign) {
    assert_eq!(original.id, current.id, "campaign id changed");
    assert_eq!(original.creator, current.creator, "campaign creator changed");
    assert_eq!(original.goal, current.goal, "campaign goal changed");
    assert_eq!(
        original.start_at, current.start_at,
        "campaign start_at changed"
    );
    assert_eq!(original.end_at, current.end_at, "campaign end_at changed");
}

/// Campaign IDs are sequential starting from 1.
pub fn assert_sequential_ids(campaigns: &[Campaign]) {
    for (i, campaign) in campaigns.iter().enumerate() {
        assert_eq!(
            campaign.id,
            i as u64 + 1,
            "expected id {}, got {}",
            i + 1,
            campaign.id
        );
    }
}

/// Run all stateless per-campaign invariants.
pub fn assert_all_campaign_invariants(campaign: &Campaign) {
    assert_pledged_non_negative(campaign);
    assert_goal_positive(campaign);
    assert_window_valid(campaign);
}
