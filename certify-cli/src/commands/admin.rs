//! Privileged commands: roster, quorum, fees, rates and administration

use serde_json::{json, Value};

use lib_types::{Amount, AssetType, RewardKind};

use super::common::{event_names, resolve_identity, StateContext};
use crate::argument_parsing::{CertifyCli, ValidatorAction};
use crate::error::CliResult;
use crate::output::Output;

pub async fn handle_validator(cli: &CertifyCli, action: &ValidatorAction, output: &dyn Output) -> CliResult<Value> {
    let ctx = StateContext::open(cli)?;
    match action {
        ValidatorAction::Add { identity } => {
            let validator = resolve_identity(identity)?;
            let applied = ctx.service.add_validator(&ctx.caller, validator).await?;
            ctx.commit().await?;
            output.success(&format!("Seated validator {}", validator))?;
            Ok(json!({ "validator": validator.to_string(), "events": event_names(&applied) }))
        }
        ValidatorAction::Remove { identity } => {
            let validator = resolve_identity(identity)?;
            let applied = ctx.service.remove_validator(&ctx.caller, &validator).await?;
            ctx.commit().await?;
            output.success(&format!("Unseated validator {}", validator))?;
            Ok(json!({ "validator": validator.to_string(), "events": event_names(&applied) }))
        }
        ValidatorAction::List => {
            let engine = ctx.service.snapshot().await;
            let roster: Vec<String> = engine.validators().iter().map(|v| v.to_string()).collect();
            Ok(json!({
                "admin": engine.admin().to_string(),
                "required_approvals": engine.required_approvals(),
                "seats": lib_certify::NUM_VALIDATORS,
                "validators": roster,
            }))
        }
    }
}

pub async fn handle_set_approvals(cli: &CertifyCli, value: u8, output: &dyn Output) -> CliResult<Value> {
    let ctx = StateContext::open(cli)?;
    let applied = ctx.service.set_required_approvals(&ctx.caller, value).await?;
    ctx.commit().await?;
    output.success(&format!("Required approvals set to {}", value))?;
    Ok(json!({ "required_approvals": value, "events": event_names(&applied) }))
}

pub async fn handle_set_fee(
    cli: &CertifyCli,
    asset_type: AssetType,
    bucket: u64,
    fee: Amount,
    output: &dyn Output,
) -> CliResult<Value> {
    let ctx = StateContext::open(cli)?;
    let applied = ctx.service.set_fee_schedule(&ctx.caller, asset_type, bucket, fee).await?;
    ctx.commit().await?;
    output.success(&format!("{} bucket {} fee set to {}", asset_type, bucket, fee))?;
    Ok(json!({
        "asset_type": asset_type.as_str(),
        "bucket": bucket,
        "fee": fee.to_string(),
        "previous": applied.value.map(|p| p.to_string()),
        "events": event_names(&applied),
    }))
}

pub async fn handle_set_reward(cli: &CertifyCli, kind: RewardKind, value: Amount, output: &dyn Output) -> CliResult<Value> {
    let ctx = StateContext::open(cli)?;
    let applied = ctx.service.set_reward_rate(&ctx.caller, kind, value).await?;
    ctx.commit().await?;
    output.success(&format!("Reward rate {} set to {}", kind, value))?;
    Ok(json!({
        "kind": kind.to_string(),
        "value": value.to_string(),
        "previous": applied.value.to_string(),
        "events": event_names(&applied),
    }))
}

pub async fn handle_transfer_admin(cli: &CertifyCli, new_admin: &str, output: &dyn Output) -> CliResult<Value> {
    let ctx = StateContext::open(cli)?;
    let next = resolve_identity(new_admin)?;
    let applied = ctx.service.transfer_admin(&ctx.caller, next).await?;
    ctx.commit().await?;
    output.success(&format!("Administration transferred to {}", next))?;
    Ok(json!({ "admin": next.to_string(), "events": event_names(&applied) }))
}
