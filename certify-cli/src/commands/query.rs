//! Read-only commands: balances, quotes and the event journal

use serde_json::{json, Value};

use lib_types::AssetType;

use super::common::{resolve_identity, StateContext};
use crate::argument_parsing::CertifyCli;
use crate::error::{CliError, CliResult};

pub async fn handle_balance(cli: &CertifyCli, identity: Option<&str>) -> CliResult<Value> {
    let ctx = StateContext::open(cli)?;
    let account = match identity {
        Some(raw) => resolve_identity(raw)?,
        None => ctx.caller,
    };
    let balance = ctx.service.get_balance(&account).await;
    Ok(json!({ "account": account.to_string(), "balance": balance.to_string() }))
}

pub async fn handle_quote(cli: &CertifyCli, asset_type: AssetType, weight_grams: u64) -> CliResult<Value> {
    let ctx = StateContext::open(cli)?;
    let quote = ctx
        .service
        .quote(asset_type, weight_grams)
        .await
        .ok_or_else(|| CliError::InvalidArgument(format!("reward for {} overflows", weight_grams)))?;
    Ok(json!({
        "asset_type": quote.asset_type.as_str(),
        "weight_grams": quote.weight_grams,
        "troy_ounces": quote.troy_ounces,
        "bucket": quote.bucket,
        "fee": quote.fee.to_string(),
        "reward": quote.reward.to_string(),
    }))
}

pub async fn handle_events(cli: &CertifyCli, from: u64) -> CliResult<Value> {
    let ctx = StateContext::open(cli)?;
    let records = ctx.service.events_since(from).await;
    let rows: Vec<Value> = records
        .iter()
        .map(|r| {
            json!({
                "seq": r.seq,
                "event": r.event.name(),
                "asset_id": r.event.asset_id(),
            })
        })
        .collect();
    Ok(Value::Array(rows))
}
