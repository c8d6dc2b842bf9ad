//! Quorum Resolution Tests
//!
//! End-to-end vote sequences against a fully seated roster:
//! - Early accept once approvals reach the requirement
//! - Late reject only after all five seats have voted
//! - Rejected votes leave counters, balances and the journal untouched
//! - Only the finalizing validator is rewarded

use anyhow::Result;
use lib_certify::{
    AssetStatus, CertificationEngine, CertificationEvent, CertifyError, RegistrationRequest,
    RewardReason,
};
use lib_types::{Address, Amount, RewardKind};

// ============================================================================
// Test Helpers
// ============================================================================

fn admin() -> Address {
    Address::from_label("admin")
}

fn validators() -> Vec<Address> {
    (1..=5)
        .map(|i| Address::from_label(&format!("validator-{}", i)))
        .collect()
}

/// Engine with five seated validators and the default 3-of-5 quorum
fn seated_engine() -> Result<CertificationEngine> {
    let mut engine = CertificationEngine::new(admin());
    for v in validators() {
        engine.add_validator(&admin(), v)?;
    }
    Ok(engine)
}

fn gold_bar() -> RegistrationRequest {
    RegistrationRequest {
        name: "Kilobar".to_string(),
        asset_type: "Gold".to_string(),
        year: "2024".to_string(),
        asset_country: "CH".to_string(),
        creator_country: "CH".to_string(),
        asset_name: "PAMP".to_string(),
        weight_grams: 100_000,
        purity_percentage: 99_990,
        quantity: 1,
        is_fungible: true,
        image_uris: vec!["ipfs://obverse".to_string(), "ipfs://reverse".to_string()],
    }
}

fn register(engine: &mut CertificationEngine) -> Result<u64> {
    Ok(engine.register(Address::from_label("submitter"), gold_bar())?.value)
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_three_approvals_certify_early() -> Result<()> {
    let mut engine = seated_engine()?;
    let id = register(&mut engine)?;
    let v = validators();

    assert_eq!(engine.cast_vote(id, v[0], true)?.value, AssetStatus::Pending);
    assert_eq!(engine.cast_vote(id, v[1], true)?.value, AssetStatus::Pending);
    let applied = engine.cast_vote(id, v[2], true)?;

    assert_eq!(applied.value, AssetStatus::True);
    assert_eq!(applied.count("StatusChanged"), 1);
    let record = engine.get_asset(id)?;
    assert_eq!((record.true_votes, record.false_votes), (3, 0));

    // remaining seats are locked out
    assert_eq!(
        engine.cast_vote(id, v[3], false).unwrap_err(),
        CertifyError::AlreadyFinalized { asset_id: id, status: AssetStatus::True }
    );
    Ok(())
}

#[test]
fn test_rejection_waits_for_every_seat() -> Result<()> {
    let mut engine = seated_engine()?;
    let id = register(&mut engine)?;
    let v = validators();

    for (validator, approve) in [(v[0], false), (v[1], false), (v[2], false), (v[3], true)] {
        assert_eq!(engine.cast_vote(id, validator, approve)?.value, AssetStatus::Pending);
    }
    let applied = engine.cast_vote(id, v[4], false)?;

    assert_eq!(applied.value, AssetStatus::False);
    let record = engine.get_asset(id)?;
    assert_eq!((record.true_votes, record.false_votes), (1, 4));
    Ok(())
}

#[test]
fn test_split_vote_after_two_approvals() -> Result<()> {
    let mut engine = seated_engine()?;
    let id = register(&mut engine)?;
    let v = validators();

    engine.cast_vote(id, v[0], true)?;
    engine.cast_vote(id, v[1], false)?;
    engine.cast_vote(id, v[2], true)?;
    engine.cast_vote(id, v[3], false)?;
    assert_eq!(engine.get_status(id)?, AssetStatus::Pending);

    assert_eq!(engine.cast_vote(id, v[4], true)?.value, AssetStatus::True);
    Ok(())
}

#[test]
fn test_status_changed_fires_once_per_asset() -> Result<()> {
    let mut engine = seated_engine()?;
    let first = register(&mut engine)?;
    let second = register(&mut engine)?;
    let v = validators();

    for validator in &v[..3] {
        engine.cast_vote(first, *validator, true)?;
    }
    for validator in &v {
        engine.cast_vote(second, *validator, false)?;
    }
    let _ = engine.cast_vote(first, v[4], true);

    let changes: Vec<_> = engine
        .events_since(0)
        .iter()
        .filter(|r| matches!(r.event, CertificationEvent::StatusChanged { .. }))
        .map(|r| r.event.clone())
        .collect();
    assert_eq!(
        changes,
        vec![
            CertificationEvent::StatusChanged { asset_id: first, status: AssetStatus::True },
            CertificationEvent::StatusChanged { asset_id: second, status: AssetStatus::False },
        ]
    );
    Ok(())
}

// ============================================================================
// Rejected votes
// ============================================================================

#[test]
fn test_duplicate_vote_changes_nothing() -> Result<()> {
    let mut engine = seated_engine()?;
    let id = register(&mut engine)?;
    let v = validators();

    engine.cast_vote(id, v[0], true)?;
    let before = engine.clone();

    assert_eq!(
        engine.cast_vote(id, v[0], false).unwrap_err(),
        CertifyError::DuplicateVote { asset_id: id, validator: v[0] }
    );
    assert_eq!(engine, before);
    let record = engine.get_asset(id)?;
    assert_eq!((record.true_votes, record.false_votes), (1, 0));
    Ok(())
}

#[test]
fn test_outsider_and_unknown_asset() -> Result<()> {
    let mut engine = seated_engine()?;
    let id = register(&mut engine)?;
    let outsider = Address::from_label("outsider");

    assert_eq!(
        engine.cast_vote(id, outsider, true).unwrap_err(),
        CertifyError::NotAValidator(outsider)
    );
    assert_eq!(
        engine.cast_vote(999, validators()[0], true).unwrap_err(),
        CertifyError::NotFound(999)
    );
    // membership is checked before existence
    assert_eq!(
        engine.cast_vote(999, outsider, true).unwrap_err(),
        CertifyError::NotAValidator(outsider)
    );
    Ok(())
}

// ============================================================================
// Rewards and vote inspection
// ============================================================================

#[test]
fn test_only_finalizer_is_rewarded() -> Result<()> {
    let mut engine = seated_engine()?;
    let id = register(&mut engine)?;
    let v = validators();
    let reward = engine.reward_rates().validator_finalization;

    engine.cast_vote(id, v[0], true)?;
    engine.cast_vote(id, v[1], true)?;
    let applied = engine.cast_vote(id, v[2], true)?;

    assert!(applied.events.contains(&CertificationEvent::RewardCredited {
        account: v[2],
        amount: reward,
        reason: RewardReason::Finalization { asset_id: id },
    }));
    assert_eq!(engine.get_balance(&v[0]), 0);
    assert_eq!(engine.get_balance(&v[1]), 0);
    assert_eq!(engine.get_balance(&v[2]), reward);
    Ok(())
}

#[test]
fn test_get_votes_tracks_roster_order() -> Result<()> {
    let mut engine = seated_engine()?;
    let id = register(&mut engine)?;
    let v = validators();

    engine.cast_vote(id, v[1], false)?;
    engine.cast_vote(id, v[3], true)?;

    let votes = engine.get_votes(id)?;
    assert_eq!(
        votes,
        vec![
            (v[0], None),
            (v[1], Some(false)),
            (v[2], None),
            (v[3], Some(true)),
            (v[4], None),
        ]
    );
    assert_eq!(engine.get_votes(42).unwrap_err(), CertifyError::NotFound(42));
    Ok(())
}

#[test]
fn test_removed_validator_votes_still_count() -> Result<()> {
    let mut engine = seated_engine()?;
    let id = register(&mut engine)?;
    let v = validators();

    engine.cast_vote(id, v[0], true)?;
    engine.cast_vote(id, v[1], true)?;
    engine.remove_validator(&admin(), &v[0])?;

    assert!(matches!(
        engine.cast_vote(id, v[0], true),
        Err(CertifyError::NotAValidator(_))
    ));
    assert_eq!(engine.cast_vote(id, v[2], true)?.value, AssetStatus::True);
    Ok(())
}

#[test]
fn test_lowered_quorum_applies_on_next_vote() -> Result<()> {
    let mut engine = seated_engine()?;
    let id = register(&mut engine)?;
    let v = validators();

    engine.cast_vote(id, v[0], true)?;
    engine.cast_vote(id, v[1], true)?;
    engine.set_required_approvals(&admin(), 1)?;
    assert_eq!(engine.get_status(id)?, AssetStatus::Pending);

    // a rejecting vote still resolves against the lowered requirement
    assert_eq!(engine.cast_vote(id, v[2], false)?.value, AssetStatus::True);
    Ok(())
}

#[test]
fn test_max_finalization_reward_to_distinct_validators() -> Result<()> {
    let mut engine = seated_engine()?;
    engine.set_required_approvals(&admin(), 1)?;
    engine.set_reward_rate(&admin(), RewardKind::ValidatorFinalization, Amount::MAX)?;
    let first = register(&mut engine)?;
    let second = register(&mut engine)?;
    let v = validators();

    assert_eq!(engine.cast_vote(first, v[0], true)?.value, AssetStatus::True);
    assert_eq!(engine.get_balance(&v[1]), 0);
    assert_eq!(engine.cast_vote(second, v[1], true)?.value, AssetStatus::True);

    assert_eq!(engine.get_balance(&v[0]), Amount::MAX);
    assert_eq!(engine.get_balance(&v[1]), Amount::MAX);
    Ok(())
}
