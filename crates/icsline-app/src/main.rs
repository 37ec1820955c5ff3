//! Thin driver: read an `.ics` file, unfold and parse it, print the content
//! lines.
//!
//! The parser core does no I/O; file loading lives here.

use std::path::PathBuf;

use anyhow::{Context, bail};
use icsline_rfc::{ContentLine, ParamValue, RfcError, parse, unfold};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: icsline-app <file.ics> [--json]";

struct Args {
    path: PathBuf,
    json: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut path = None;
    let mut json = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            other => bail!("unexpected argument: {other}"),
        }
    }

    let Some(path) = path else {
        bail!("{USAGE}");
    };
    Ok(Args { path, json })
}

/// Renders one content line back into `name;params:value` form.
fn render(line: &ContentLine<'_>) -> String {
    let mut out = String::from(line.name);
    for param in &line.params {
        out.push(';');
        out.push_str(param.name);
        out.push('=');
        for (i, value) in param.values.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            match value {
                ParamValue::Quoted(s) => {
                    out.push('"');
                    out.push_str(s);
                    out.push('"');
                }
                ParamValue::Unquoted(s) => out.push_str(s),
            }
        }
    }
    out.push(':');
    out.push_str(line.value);
    out
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = parse_args()?;

    let raw = std::fs::read(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    tracing::debug!(bytes = raw.len(), path = %args.path.display(), "Read document");

    let unfolded = unfold(&raw);
    tracing::debug!(
        raw = raw.len(),
        unfolded = unfolded.len(),
        "Unfolded document"
    );

    let lines = parse(&unfolded)
        .map_err(RfcError::from)
        .with_context(|| format!("failed to parse {}", args.path.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        for line in &lines {
            println!("{}", render(line));
        }
    }

    Ok(())
}
