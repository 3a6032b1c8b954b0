//! scalar: list and call width-exact scalar primitives.

mod cli;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use scalar_runtime::{Diagnostic, EvalError, Evaluator, Primitive, Scalar, Signature};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

/// One line of `scalar list --json`
#[derive(Serialize)]
struct ListEntry {
    name: String,
    #[serde(flatten)]
    signature: Signature,
}

/// Initialise logging when `RUST_LOG` is set or `-v` was given
fn init_tracing(verbose: u8) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose > 0 => EnvFilter::new(if verbose == 1 { "debug" } else { "trace" }),
        Err(_) => return,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
    tracing::debug!("tracing initialized");
}

fn matching(family: Option<&str>) -> Vec<Primitive> {
    Primitive::all()
        .into_iter()
        .filter(|p| family.map_or(true, |prefix| p.name().starts_with(prefix)))
        .collect()
}

fn list(family: Option<&str>, json: bool) -> Result<()> {
    let primitives = matching(family);
    let mut out = io::stdout().lock();

    if json {
        let entries: Vec<ListEntry> = primitives
            .iter()
            .map(|p| ListEntry {
                name: p.name(),
                signature: p.signature(),
            })
            .collect();
        let rendered = serde_json::to_string_pretty(&entries).context("failed to render catalogue")?;
        writeln!(out, "{}", rendered)?;
    } else {
        for p in &primitives {
            writeln!(out, "{}{}", p, p.signature())?;
        }
    }

    Ok(())
}

/// Resolve, parse operands per the signature, evaluate
fn evaluate(evaluator: &mut Evaluator, name: &str, operands: &[String]) -> Result<Scalar, EvalError> {
    let primitive: Primitive = name.parse()?;
    let signature = primitive.signature();

    if operands.len() != signature.params.len() {
        return Err(EvalError::ArityMismatch {
            primitive: primitive.name(),
            expected: signature.params.len(),
            found: operands.len(),
        });
    }

    let args = signature
        .params
        .iter()
        .zip(operands)
        .map(|(&ty, text)| Scalar::parse(ty, text))
        .collect::<Result<Vec<_>, _>>()?;

    evaluator.apply(primitive, &args)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::List { family, json } => list(family.as_deref(), json),
        Commands::Call {
            name,
            operands,
            fatal_on_zero,
            trace,
        } => {
            let mut evaluator = Evaluator::new(cli::eval_config(fatal_on_zero, trace));
            match evaluate(&mut evaluator, &name, &operands) {
                Ok(result) => {
                    println!("{}", result);
                    Ok(())
                }
                Err(err) => Diagnostic::from(&err).report(),
            }
        }
    }
}
