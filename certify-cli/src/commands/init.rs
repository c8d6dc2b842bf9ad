//! `certify init`: build genesis state from configuration

use serde_json::{json, Value};

use lib_certify::{CertificationEngine, CertificationService, CertifyConfig, SnapshotStore};

use crate::argument_parsing::CertifyCli;
use crate::error::{CliError, CliResult};
use crate::output::Output;

pub async fn handle_init(cli: &CertifyCli, force: bool, output: &dyn Output) -> CliResult<Value> {
    let store = SnapshotStore::at(&cli.state);
    if store.exists() && !force {
        return Err(CliError::StateExists {
            path: cli.state.clone(),
        });
    }

    let config = match &cli.config {
        Some(path) => CertifyConfig::load(path)?,
        None => {
            output.warning("No --config given, using built-in defaults with an empty roster")?;
            CertifyConfig::default()
        }
    };
    let engine = CertificationEngine::from_config(&config)?;
    let summary = json!({
        "state": cli.state,
        "admin": engine.admin().to_string(),
        "required_approvals": engine.required_approvals(),
        "validators": engine.validators().iter().map(|v| v.to_string()).collect::<Vec<_>>(),
        "fee_entries": engine.fee_schedule().len(),
    });

    CertificationService::new(engine).persist(&store).await?;
    output.success(&format!("Initialized certification state at {}", cli.state))?;
    Ok(summary)
}
