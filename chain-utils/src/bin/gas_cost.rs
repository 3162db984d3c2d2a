//! Fiat cost estimator for Ethereum transactions.
//!
//! # Example
//!
//! ```sh
//! gas-cost 21000 50 2000.00
//! $2.1
//! ```

use chain_utils::price::{estimate_cost, format_usd};
use clap::Parser;
use std::process::ExitCode;

/// Estimate the fiat cost of a transaction from its gas usage
#[derive(Debug, Parser)]
#[command(name = "gas-cost", about = "Estimate the fiat cost of an Ethereum transaction")]
struct Args {
    /// Gas units consumed by the transaction
    gas: i64,

    /// Gas price in gwei
    gas_price: f64,

    /// Fiat price of one ETH
    reference_price: f64,
}

/// Entry point
///
/// Parses the three positional arguments, computes the cost estimate and
/// prints it as a dollar amount. A missing or malformed argument prints the
/// usage message to stdout and exits with code 1, performing no arithmetic.
fn main() -> ExitCode {
    chain_utils::logging::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == clap::error::ErrorKind::DisplayHelp
            || err.kind() == clap::error::ErrorKind::DisplayVersion =>
        {
            println!("{err}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            println!("{err}");
            return ExitCode::from(1);
        }
    };

    let cost = estimate_cost(args.gas, args.gas_price, args.reference_price);
    println!("{}", format_usd(cost));
    ExitCode::SUCCESS
}
