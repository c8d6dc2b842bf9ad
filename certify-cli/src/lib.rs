//! Bullion Certification CLI Library
//!
//! Operates on a local state snapshot, one serialized operation per
//! invocation.
//!
//! ## Architecture
//!
//! - **Argument parsing** (`argument_parsing`): clap definitions and dispatch
//! - **Commands** (`commands/`): open state, call the service, persist
//! - **Error Handling** (`error`): CLI error type wrapping engine errors
//! - **Output Abstraction** (`output`): testable printing and formatting

pub mod argument_parsing;
pub mod commands;
pub mod error;
pub mod output;

pub use argument_parsing::{execute, run_cli, CertifyCli, CertifyCommand};
pub use error::{CliError, CliResult};
pub use output::{format_output, ConsoleOutput, Output, OutputFormat};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
