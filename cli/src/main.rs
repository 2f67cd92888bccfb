mod notation;
mod report;

use std::process::ExitCode;

use anyhow::{Error, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hbt_logic::BelnapVec;

use crate::report::{Check, Report, Stats, Vector};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("HBT_COMMIT_SHORT_HASH"),
    " ",
    env!("HBT_COMMIT_DATE"),
    ")"
);

const LOG_ENV: &str = "HBT_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Logic {
    /// True, False, Unknown
    Kleene,
    /// True, False, Unknown, Both
    Belnap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Evaluate three- and four-valued truth vectors.
///
/// Vectors are written one position per character: T/1 (True), F/0 (False),
/// U/?/- (Unknown) and B (Both). `_` may be used as a separator.
#[derive(Parser, Debug)]
#[command(version, long_version = LONG_VERSION, about)]
struct Args {
    /// Logic to evaluate in
    #[arg(short, long, value_enum, default_value_t = Logic::Belnap)]
    logic: Logic,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Negate every position
    Not { a: String },
    /// Position-wise conjunction
    And { a: String, b: String },
    /// Position-wise disjunction
    Or { a: String, b: String },
    /// Position-wise material implication
    Implies { a: String, b: String },
    /// Combine independent assertions (Belnap only)
    Merge {
        #[arg(required = true)]
        vectors: Vec<String>,
    },
    /// Print counts and whole-vector queries
    Stats { a: String },
    /// Merge assertions and report contradictions; exits with 1 if any
    Check {
        #[arg(required = true)]
        assertions: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy)]
enum BinOp {
    And,
    Or,
    Implies,
}

fn kleene_binop(op: BinOp, a: &str, b: &str) -> Result<Report, Error> {
    let (a, b) = (notation::parse_kleene(a)?, notation::parse_kleene(b)?);
    let r = match op {
        BinOp::And => a.and(&b),
        BinOp::Or => a.or(&b),
        BinOp::Implies => a.implies(&b),
    };
    Ok(Report::Vector(Vector::kleene(&r)))
}

fn belnap_binop(op: BinOp, a: &str, b: &str) -> Result<Report, Error> {
    let (a, b) = (notation::parse_belnap(a)?, notation::parse_belnap(b)?);
    let r = match op {
        BinOp::And => a.and(&b),
        BinOp::Or => a.or(&b),
        BinOp::Implies => a.implies(&b),
    };
    Ok(Report::Vector(Vector::belnap(&r)))
}

fn binop(logic: Logic, op: BinOp, a: &str, b: &str) -> Result<Report, Error> {
    match logic {
        Logic::Kleene => kleene_binop(op, a, b),
        Logic::Belnap => belnap_binop(op, a, b),
    }
}

fn parse_assertion(logic: Logic, input: &str) -> Result<BelnapVec, Error> {
    Ok(match logic {
        Logic::Kleene => BelnapVec::from_kleene(&notation::parse_kleene(input)?),
        Logic::Belnap => notation::parse_belnap(input)?,
    })
}

fn merge_all(logic: Logic, inputs: &[String]) -> Result<BelnapVec, Error> {
    inputs.iter().try_fold(BelnapVec::new(0), |acc, input| {
        Ok(acc.merge(&parse_assertion(logic, input)?))
    })
}

fn evaluate(logic: Logic, command: &Command) -> Result<Report, Error> {
    let report = match command {
        Command::Not { a } => match logic {
            Logic::Kleene => Report::Vector(Vector::kleene(&notation::parse_kleene(a)?.not())),
            Logic::Belnap => Report::Vector(Vector::belnap(&notation::parse_belnap(a)?.not())),
        },
        Command::And { a, b } => binop(logic, BinOp::And, a, b)?,
        Command::Or { a, b } => binop(logic, BinOp::Or, a, b)?,
        Command::Implies { a, b } => binop(logic, BinOp::Implies, a, b)?,
        Command::Merge { vectors } => {
            if logic == Logic::Kleene {
                bail!("merge is only defined in Belnap logic");
            }
            Report::Vector(Vector::belnap(&merge_all(logic, vectors)?))
        }
        Command::Stats { a } => match logic {
            Logic::Kleene => Report::Stats(Stats::kleene(&notation::parse_kleene(a)?)),
            Logic::Belnap => Report::Stats(Stats::belnap(&notation::parse_belnap(a)?)),
        },
        Command::Check { assertions } => Report::Check(Check::new(&merge_all(logic, assertions)?)),
    };
    Ok(report)
}

fn print_report(format: Format, report: &Report) -> Result<(), Error> {
    match format {
        Format::Text => println!("{report}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode, Error> {
    init_tracing();
    let args = Args::parse();
    debug!(?args, "evaluating");

    let report = evaluate(args.logic, &args.command)?;
    print_report(args.format, &report)?;

    match report {
        Report::Check(Check { consistent: false, .. }) => Ok(ExitCode::FAILURE),
        _ => Ok(ExitCode::SUCCESS),
    }
}
