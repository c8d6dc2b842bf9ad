//! Bullion Certification CLI
//!
//! Every invocation loads the state snapshot, applies one operation as the
//! `--as` identity, and writes the snapshot back if anything changed.

use clap::{Args, Parser, Subcommand, ValueEnum};

use lib_types::{Amount, AssetId, AssetType, RewardKind};

use crate::commands;
use crate::error::CliResult;
use crate::output::{Output, OutputFormat};

/// Bullion certification CLI
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "certify")]
pub struct CertifyCli {
    /// Genesis configuration file (TOML), read by `init`
    #[arg(short, long, global = true, env = "CERTIFY_CONFIG")]
    pub config: Option<String>,

    /// State snapshot file
    #[arg(short, long, global = true, default_value = "certification_snapshot.json", env = "CERTIFY_STATE")]
    pub state: String,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table", env = "CERTIFY_FORMAT")]
    pub format: String,

    /// Calling identity (64 hex chars or a label)
    #[arg(long = "as", global = true, default_value = "admin", env = "CERTIFY_CALLER")]
    pub caller: String,

    #[command(subcommand)]
    pub command: CertifyCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CertifyCommand {
    /// Create a fresh state snapshot from the genesis config
    Init {
        /// Overwrite an existing snapshot
        #[arg(long)]
        force: bool,
    },

    /// Register an asset claim as the calling identity
    Register(RegisterArgs),

    /// Vote on a pending asset as the calling validator
    Vote {
        asset_id: AssetId,
        #[arg(value_enum)]
        choice: VoteChoice,
    },

    /// Show an asset record
    Asset { asset_id: AssetId },

    /// Show an asset's certification status
    Status { asset_id: AssetId },

    /// Show how each current validator voted on an asset
    Votes { asset_id: AssetId },

    /// Show a reward balance (defaults to the calling identity)
    Balance { identity: Option<String> },

    /// Validator roster management
    Validator(ValidatorArgs),

    /// Change the approval quorum (admin)
    SetApprovals { value: u8 },

    /// Set one fee-table entry (admin)
    SetFee {
        #[arg(value_enum, ignore_case = true)]
        asset_type: AssetTypeArg,
        bucket: u64,
        fee: Amount,
    },

    /// Set a reward rate (admin)
    SetReward { kind: RewardKind, value: Amount },

    /// Hand administration to another identity (admin)
    TransferAdmin { new_admin: String },

    /// Price a registration without submitting it
    Quote {
        #[arg(value_enum, ignore_case = true)]
        asset_type: AssetTypeArg,
        /// Grams x100
        weight_grams: u64,
    },

    /// List journaled events
    Events {
        /// First sequence number to show
        #[arg(long, default_value_t = 0)]
        from: u64,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    /// Silver or Gold
    #[arg(long)]
    pub asset_type: String,
    #[arg(long)]
    pub year: String,
    #[arg(long)]
    pub asset_country: String,
    #[arg(long)]
    pub creator_country: String,
    /// Mint or refiner name
    #[arg(long)]
    pub asset_name: String,
    /// Grams x100 (100 = 1.00 g)
    #[arg(long)]
    pub weight_grams: u64,
    /// Percent x1000 (99900 = 99.900%)
    #[arg(long)]
    pub purity: u64,
    #[arg(long, default_value_t = 1)]
    pub quantity: u64,
    #[arg(long)]
    pub fungible: bool,
    /// Image URI; repeat for each image, the first is canonical
    #[arg(long = "image", required = true)]
    pub images: Vec<String>,
}

/// Asset type as typed on the command line (`--asset-type` on `register`
/// is passed through verbatim and matched exactly by the engine)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AssetTypeArg {
    Silver,
    Gold,
}

impl From<AssetTypeArg> for AssetType {
    fn from(arg: AssetTypeArg) -> Self {
        match arg {
            AssetTypeArg::Silver => AssetType::Silver,
            AssetTypeArg::Gold => AssetType::Gold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VoteChoice {
    Approve,
    Reject,
}

impl VoteChoice {
    pub fn approves(self) -> bool {
        self == VoteChoice::Approve
    }
}

#[derive(Args, Debug, Clone)]
pub struct ValidatorArgs {
    #[command(subcommand)]
    pub action: ValidatorAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ValidatorAction {
    /// Seat a validator (admin)
    Add { identity: String },
    /// Unseat a validator (admin)
    Remove { identity: String },
    /// Show the roster and quorum
    List,
}

/// Main CLI runner
pub async fn run_cli() -> anyhow::Result<()> {
    let cli = CertifyCli::parse();
    execute(&cli, &crate::output::ConsoleOutput).await?;
    Ok(())
}

/// Run one parsed invocation against `output`
pub async fn execute(cli: &CertifyCli, output: &dyn Output) -> CliResult<()> {
    let format: OutputFormat = cli.format.parse()?;
    let result = match &cli.command {
        CertifyCommand::Init { force } => commands::init::handle_init(cli, *force, output).await?,
        CertifyCommand::Register(args) => commands::asset::handle_register(cli, args, output).await?,
        CertifyCommand::Vote { asset_id, choice } => {
            commands::asset::handle_vote(cli, *asset_id, choice.approves(), output).await?
        }
        CertifyCommand::Asset { asset_id } => commands::asset::handle_show_asset(cli, *asset_id).await?,
        CertifyCommand::Status { asset_id } => commands::asset::handle_status(cli, *asset_id).await?,
        CertifyCommand::Votes { asset_id } => commands::asset::handle_votes(cli, *asset_id).await?,
        CertifyCommand::Balance { identity } => {
            commands::query::handle_balance(cli, identity.as_deref()).await?
        }
        CertifyCommand::Validator(args) => commands::admin::handle_validator(cli, &args.action, output).await?,
        CertifyCommand::SetApprovals { value } => {
            commands::admin::handle_set_approvals(cli, *value, output).await?
        }
        CertifyCommand::SetFee { asset_type, bucket, fee } => {
            commands::admin::handle_set_fee(cli, (*asset_type).into(), *bucket, *fee, output).await?
        }
        CertifyCommand::SetReward { kind, value } => {
            commands::admin::handle_set_reward(cli, *kind, *value, output).await?
        }
        CertifyCommand::TransferAdmin { new_admin } => {
            commands::admin::handle_transfer_admin(cli, new_admin, output).await?
        }
        CertifyCommand::Quote { asset_type, weight_grams } => {
            commands::query::handle_quote(cli, (*asset_type).into(), *weight_grams).await?
        }
        CertifyCommand::Events { from } => commands::query::handle_events(cli, *from).await?,
    };
    output.emit(&result, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        CertifyCli::command().debug_assert();
    }

    #[test]
    fn test_parse_vote() {
        let cli = CertifyCli::try_parse_from(["certify", "--as", "v1", "vote", "7", "reject"]).unwrap();
        assert_eq!(cli.caller, "v1");
        match cli.command {
            CertifyCommand::Vote { asset_id, choice } => {
                assert_eq!(asset_id, 7);
                assert!(!choice.approves());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_typed_admin_args() {
        let cli = CertifyCli::try_parse_from(["certify", "set-fee", "gold", "1", "6"]).unwrap();
        assert!(matches!(
            cli.command,
            CertifyCommand::SetFee { asset_type: AssetTypeArg::Gold, bucket: 1, fee: 6 }
        ));
        assert_eq!(AssetType::from(AssetTypeArg::Gold), AssetType::Gold);

        for spelling in ["Silver", "silver", "SILVER"] {
            let cli = CertifyCli::try_parse_from(["certify", "quote", spelling, "10000"]).unwrap();
            assert!(matches!(
                cli.command,
                CertifyCommand::Quote { asset_type: AssetTypeArg::Silver, weight_grams: 10_000 }
            ));
        }

        let cli = CertifyCli::try_parse_from(["certify", "set-reward", "validator", "75"]).unwrap();
        assert!(matches!(
            cli.command,
            CertifyCommand::SetReward { kind: RewardKind::ValidatorFinalization, value: 75 }
        ));

        assert!(CertifyCli::try_parse_from(["certify", "set-fee", "copper", "1", "6"]).is_err());
    }

    #[test]
    fn test_register_requires_images() {
        let base = [
            "certify", "register", "--name", "Bar", "--asset-type", "Gold", "--year", "2024",
            "--asset-country", "CH", "--creator-country", "CH", "--asset-name", "PAMP",
            "--weight-grams", "100", "--purity", "99990",
        ];
        assert!(CertifyCli::try_parse_from(base).is_err());

        let mut with_images = base.to_vec();
        with_images.extend(["--image", "ipfs://a", "--image", "ipfs://b"]);
        let cli = CertifyCli::try_parse_from(with_images).unwrap();
        match cli.command {
            CertifyCommand::Register(args) => assert_eq!(args.images.len(), 2),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
