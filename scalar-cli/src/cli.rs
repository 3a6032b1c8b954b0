//! CLI argument parsing for `scalar`.

use clap::{ArgAction, Parser, Subcommand};
use scalar_runtime::{EvalConfig, ZeroDivisionPolicy};

/// Width-exact scalar primitives from the command line.
///
/// Lists the catalogue or applies one primitive to literal operands.
#[derive(Parser, Debug)]
#[command(name = "scalar")]
#[command(version)]
#[command(about = "Width-exact scalar primitives from the command line")]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print catalogue entries as `name(params) -> result`
    List {
        /// Only entries whose name starts with this prefix (e.g. `sdiv`, `sext_i8`)
        #[arg(long, value_name = "PREFIX")]
        family: Option<String>,

        /// Emit JSON instead of one line per entry
        #[arg(long)]
        json: bool,
    },

    /// Apply a primitive to operands and print the typed result
    Call {
        /// Catalogue name, e.g. `sdiv32` or `fptosi_f64_i8`
        #[arg(value_name = "NAME")]
        name: String,

        /// Operand literals: decimal or 0x hex integers, true/false, floats
        /// (`-inf` and `-nan` included). Options go before NAME.
        #[arg(value_name = "OPERAND", allow_hyphen_values = true)]
        operands: Vec<String>,

        /// Exit with this status on a zero divisor instead of the default
        #[arg(long, value_name = "CODE")]
        fatal_on_zero: Option<i32>,

        /// Log each successful call at trace level
        #[arg(long)]
        trace: bool,
    },
}

/// Evaluator settings for a `call` invocation
pub fn eval_config(fatal_on_zero: Option<i32>, trace: bool) -> EvalConfig {
    EvalConfig {
        division_by_zero: match fatal_on_zero {
            Some(exit_code) => ZeroDivisionPolicy::Fatal { exit_code },
            None => ZeroDivisionPolicy::Error,
        },
        trace_calls: trace,
    }
}
