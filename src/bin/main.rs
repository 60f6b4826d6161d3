//! # Command line calculator
//!
//! Exact integer arithmetic on decimal operands, fixed-point expansion of quotients and
//! approximation of sums of rationals.
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use num::Zero;
use tracing::{debug, Level};

use realpack::data::number_types::real::{expr_add, expr_q, to_double, to_int, Evaluator};
use realpack::io::decimal::parse_z;
use realpack::{add_z, div_z, frac, mul_z, pow_z, sub_z, Digit, Error, Z};

#[derive(Parser, Debug)]
#[clap(name = "realpack", version, about = "Exact arithmetic on arbitrary precision integers")]
struct Args {
    #[clap(subcommand)]
    command: Command,
    /// Width of a single digit in bits
    #[clap(long, global = true, value_enum, default_value = "64")]
    width: Width,
    /// Log more; repeat for even more detail
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sum of two integers
    Add {
        #[clap(allow_hyphen_values = true)]
        lhs: String,
        #[clap(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Difference of two integers
    Sub {
        #[clap(allow_hyphen_values = true)]
        lhs: String,
        #[clap(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Product of two integers
    Mul {
        #[clap(allow_hyphen_values = true)]
        lhs: String,
        #[clap(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Floor division, prints the quotient and the remainder
    Div {
        #[clap(allow_hyphen_values = true)]
        lhs: String,
        #[clap(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Raise an integer to a power
    Pow {
        #[clap(allow_hyphen_values = true)]
        base: String,
        exponent: u32,
    },
    /// Expand a quotient into a fixed-point number
    Frac {
        #[clap(allow_hyphen_values = true)]
        numerator: String,
        #[clap(allow_hyphen_values = true)]
        denominator: String,
        /// Number of fractional digits of the expansion
        #[clap(long, default_value_t = 4)]
        digits: usize,
        /// Number of decimals to print, by default all that the expansion resolves
        #[clap(long)]
        precision: Option<usize>,
    },
    /// Approximate a sum of rationals, each written as `p` or `p/q`
    Approx {
        /// Terms to add; negative terms go after `--`
        #[clap(required = true)]
        terms: Vec<String>,
        /// Binary precision of the approximation
        #[clap(long, default_value_t = 64)]
        bits: usize,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum Width {
    #[clap(name = "8")]
    W8,
    #[clap(name = "16")]
    W16,
    #[clap(name = "32")]
    W32,
    #[clap(name = "64")]
    W64,
}

fn parse<D: Digit>(text: &str) -> Result<Z<D>, Error> {
    Ok(parse_z(text)?)
}

/// Read a term of the form `p` or `p/q`.
fn term<D: Digit>(text: &str) -> Result<Evaluator<D>, Error> {
    match text.split_once('/') {
        None => Ok(expr_q(parse(text)?, None)),
        Some((p, q)) => Ok(expr_q(parse(p)?, Some(parse(q)?))),
    }
}

fn run<D: Digit>(command: &Command) -> Result<(), Error> {
    debug!(bits = D::BITS, "selected digit width");

    match command {
        Command::Add { lhs, rhs } => println!("{}", add_z(&parse::<D>(lhs)?, &parse(rhs)?)),
        Command::Sub { lhs, rhs } => println!("{}", sub_z(&parse::<D>(lhs)?, &parse(rhs)?)),
        Command::Mul { lhs, rhs } => println!("{}", mul_z(&parse::<D>(lhs)?, &parse(rhs)?)),
        Command::Div { lhs, rhs } => {
            let (quotient, remainder) = div_z(&parse::<D>(lhs)?, &parse(rhs)?)?;
            println!("{} {}", quotient, remainder);
        },
        Command::Pow { base, exponent } => println!("{}", pow_z(&parse::<D>(base)?, *exponent)),
        Command::Frac { numerator, denominator, digits, precision } => {
            let value = frac(&parse::<D>(numerator)?, &parse(denominator)?, *digits)?;
            match precision {
                Some(precision) => println!("{:.*}", *precision, value),
                None => println!("{}", value),
            }
        },
        Command::Approx { terms, bits } => {
            let evaluator = terms.iter()
                .map(|text| term::<D>(text))
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .reduce(expr_add)
                .unwrap_or_else(|| expr_q(Z::zero(), None));

            let nearest = to_int::<i128, D>(&evaluator, *bits).sync_get()?;
            let value = to_double(&evaluator, *bits).sync_get()?;
            match (nearest, value) {
                (Some(nearest), Some(value)) => println!("{} (nearest integer {})", value, nearest),
                (None, Some(value)) => println!("{}", value),
                (_, None) => println!("out of range"),
            }
        },
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match args.width {
        Width::W8 => run::<u8>(&args.command),
        Width::W16 => run::<u16>(&args.command),
        Width::W32 => run::<u32>(&args.command),
        Width::W64 => run::<u64>(&args.command),
    };

    if let Err(error) = result {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}
