//! Output formatting shared by every command.
//!
//! Results go to stdout; logs go to stderr so `--output json` stays parseable.

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Term,
    /// Pretty-printed JSON
    Json,
}

/// Print `value` as indented JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a fatal error the way the selected format expects.
pub fn render_error(format: OutputFormat, err: &anyhow::Error) -> String {
    let message = format!("{:#}", err);
    match format {
        OutputFormat::Term => format!("Error: {}", message),
        OutputFormat::Json => serde_json::json!({ "errors": message }).to_string(),
    }
}
