//! Output abstraction for testable printing
//!
//! Command handlers return `serde_json::Value`; this module renders it in
//! the selected format and routes it through an `Output` sink.

use serde_json::Value;

use crate::error::{CliError, CliResult};

/// Rendering selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Render a command result
pub fn format_output(data: &Value, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Table => Ok(render_table(data, 0)),
    }
}

fn render_table(data: &Value, indent: usize) -> String {
    let pad = " ".repeat(indent);
    match data {
        Value::Object(obj) => {
            let mut result = String::new();
            for (key, value) in obj {
                match value {
                    Value::Object(_) | Value::Array(_) => {
                        result.push_str(&format!("{}{}:\n", pad, key));
                        result.push_str(&render_table(value, indent + 2));
                    }
                    scalar => {
                        result.push_str(&format!("{}{:<22} {}\n", pad, key, scalar_text(scalar)))
                    }
                }
            }
            result
        }
        Value::Array(items) => {
            let mut result = String::new();
            for (i, item) in items.iter().enumerate() {
                match item {
                    Value::Object(_) | Value::Array(_) => {
                        result.push_str(&format!("{}[{}]\n", pad, i));
                        result.push_str(&render_table(item, indent + 2));
                    }
                    scalar => result.push_str(&format!("{}[{}] {}\n", pad, i, scalar_text(scalar))),
                }
            }
            result
        }
        scalar => format!("{}{}\n", pad, scalar_text(scalar)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Output sink for command results and diagnostics
///
/// Status lines (`success`, `warning`) go to stderr so stdout carries only
/// the rendered result and stays parseable with `--format json`.
pub trait Output: Send + Sync {
    /// Print to stdout
    fn print(&self, msg: &str) -> CliResult<()>;

    /// Print to stderr
    fn error(&self, msg: &str) -> CliResult<()>;

    fn success(&self, msg: &str) -> CliResult<()> {
        self.error(&format!("✅ {}", msg))
    }

    fn warning(&self, msg: &str) -> CliResult<()> {
        self.error(&format!("⚠️  {}", msg))
    }

    /// Render and print a command result
    fn emit(&self, data: &Value, format: OutputFormat) -> CliResult<()> {
        let rendered = format_output(data, format)?;
        self.print(rendered.trim_end())
    }
}

/// Standard console output; status lines go to stderr so stdout stays
/// machine-readable
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn print(&self, msg: &str) -> CliResult<()> {
        println!("{}", msg);
        Ok(())
    }

    fn error(&self, msg: &str) -> CliResult<()> {
        eprintln!("{}", msg);
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Captures everything printed
    #[derive(Default, Clone)]
    pub struct MockOutput {
        messages: Arc<Mutex<Vec<String>>>,
        errors: Arc<Mutex<Vec<String>>>,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn get_messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }

        pub fn get_errors(&self) -> Vec<String> {
            self.errors.lock().unwrap().clone()
        }

        pub fn assert_contains_message(&self, substring: &str) {
            let messages = self.get_messages();
            assert!(
                messages.iter().any(|m| m.contains(substring)),
                "Expected message containing '{}', but got: {:?}",
                substring,
                messages
            );
        }
    }

    impl Output for MockOutput {
        fn print(&self, msg: &str) -> CliResult<()> {
            self.messages.lock().unwrap().push(msg.to_string());
            Ok(())
        }

        fn error(&self, msg: &str) -> CliResult<()> {
            self.errors.lock().unwrap().push(msg.to_string());
            Ok(())
        }
    }
}
