//! Asset commands: register, vote and per-asset queries

use serde_json::{json, Value};

use lib_certify::{CertificationEvent, RegistrationRequest};
use lib_types::AssetId;

use super::common::{event_names, vote_label, StateContext};
use crate::argument_parsing::{CertifyCli, RegisterArgs};
use crate::error::CliResult;
use crate::output::Output;

/// Build the engine request from command-line fields
pub fn build_request(args: &RegisterArgs) -> RegistrationRequest {
    RegistrationRequest {
        name: args.name.clone(),
        asset_type: args.asset_type.clone(),
        year: args.year.clone(),
        asset_country: args.asset_country.clone(),
        creator_country: args.creator_country.clone(),
        asset_name: args.asset_name.clone(),
        weight_grams: args.weight_grams,
        purity_percentage: args.purity,
        quantity: args.quantity,
        is_fungible: args.fungible,
        image_uris: args.images.clone(),
    }
}

pub async fn handle_register(cli: &CertifyCli, args: &RegisterArgs, output: &dyn Output) -> CliResult<Value> {
    let ctx = StateContext::open(cli)?;
    let applied = ctx.service.register(ctx.caller, build_request(args)).await?;
    ctx.commit().await?;

    let reward = applied.events.iter().find_map(|e| match e {
        CertificationEvent::RewardCredited { amount, .. } => Some(*amount),
        _ => None,
    });
    let record = ctx.service.get_asset(applied.value).await?;
    output.success(&format!("Registered asset {}", applied.value))?;
    Ok(json!({
        "asset_id": applied.value,
        "creator": record.creator.to_string(),
        "status": record.status.to_string(),
        "minting_fee": record.minting_fee.to_string(),
        "reward": reward.unwrap_or(0).to_string(),
        "events": event_names(&applied),
    }))
}

pub async fn handle_vote(cli: &CertifyCli, asset_id: AssetId, approve: bool, output: &dyn Output) -> CliResult<Value> {
    let ctx = StateContext::open(cli)?;
    let applied = ctx.service.cast_vote(asset_id, ctx.caller, approve).await?;
    ctx.commit().await?;

    let status = applied.value;
    if status.is_terminal() {
        output.success(&format!("Asset {} finalized as {}", asset_id, status))?;
    }
    let record = ctx.service.get_asset(asset_id).await?;
    Ok(json!({
        "asset_id": asset_id,
        "status": status.to_string(),
        "true_votes": record.true_votes,
        "false_votes": record.false_votes,
        "events": event_names(&applied),
    }))
}

pub async fn handle_show_asset(cli: &CertifyCli, asset_id: AssetId) -> CliResult<Value> {
    let ctx = StateContext::open(cli)?;
    let record = ctx.service.get_asset(asset_id).await?;
    Ok(serde_json::to_value(&record)?)
}

pub async fn handle_status(cli: &CertifyCli, asset_id: AssetId) -> CliResult<Value> {
    let ctx = StateContext::open(cli)?;
    let status = ctx.service.get_status(asset_id).await?;
    Ok(json!({ "asset_id": asset_id, "status": status.to_string() }))
}

pub async fn handle_votes(cli: &CertifyCli, asset_id: AssetId) -> CliResult<Value> {
    let ctx = StateContext::open(cli)?;
    let votes = ctx.service.get_votes(asset_id).await?;
    let rows: Vec<Value> = votes
        .into_iter()
        .map(|(validator, vote)| json!({ "validator": validator.to_string(), "vote": vote_label(vote) }))
        .collect();
    Ok(json!({ "asset_id": asset_id, "votes": rows }))
}
