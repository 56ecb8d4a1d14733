// SPDX-License-Identifier: MIT OR Apache-2.0
//! nodescribe - node tree to Python add-on exporter
//!
//! Reads one or more node trees from RON files and writes a single Python
//! add-on that rebuilds them, plus an `imgs/` directory for any embedded
//! image assets.
//!
//! Usage: `nodescribe <tree.ron>... -o <script.py> [--name <addon name>]`

use nodescribe_export::{write_addon, ExportConfig, ScriptOptions};
use nodescribe_graph::NodeTree;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const USAGE: &str = "usage: nodescribe <tree.ron>... -o <script.py> [--name <addon name>]";

struct Args {
    trees: Vec<PathBuf>,
    output: PathBuf,
    name: Option<String>,
}

/// Parse command line words; `Ok(None)` means help was requested
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Args>, String> {
    let mut trees = Vec::new();
    let mut output = None;
    let mut name = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                output = Some(PathBuf::from(
                    args.next().ok_or("missing value for --output")?,
                ));
            }
            "--name" => {
                name = Some(args.next().ok_or("missing value for --name")?);
            }
            "-h" | "--help" => return Ok(None),
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}"));
            }
            path => trees.push(PathBuf::from(path)),
        }
    }

    if trees.is_empty() {
        return Err("no input trees given".to_string());
    }
    let output = output.ok_or("no output path given (-o <script.py>)")?;
    Ok(Some(Args { trees, output, name }))
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut trees = Vec::with_capacity(args.trees.len());
    for path in &args.trees {
        let text = std::fs::read_to_string(path)?;
        let tree: NodeTree = ron::from_str(&text)?;
        tracing::info!(
            "Loaded tree '{}' ({} nodes, {} links) from {}",
            tree.name,
            tree.node_count(),
            tree.link_count(),
            path.display()
        );
        trees.push(tree);
    }

    let config = ExportConfig::default();
    let mut options = ScriptOptions::default();
    if let Some(name) = &args.name {
        options.name = name.clone();
    } else if let Some(first) = trees.first() {
        options.name = first.name.clone();
    }

    let refs: Vec<&NodeTree> = trees.iter().collect();
    write_addon(&refs, &config, &options, &args.output)?;
    Ok(())
}

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("Export failed: {error}");
            ExitCode::FAILURE
        }
    }
}
