//! Tests for the fiat cost estimator
//!
//! These verify the cost formula, the two-decimal rounding behavior and the
//! exact textual shape of the dollar output.

use chain_utils::price::{estimate_cost, format_usd, round_to_cents, GWEI, GWEI_SCALE};
use std::process::Command;

#[test]
fn test_zero_gas_costs_nothing() {
    // Zero gas zeroes the product regardless of the other inputs.
    assert_eq!(estimate_cost(0, 50.0, 2000.0), 0.0);
    assert_eq!(estimate_cost(0, -3.5, 100_000.0), 0.0);
    assert_eq!(format_usd(estimate_cost(0, 50.0, 2000.0)), "$0.0");
}

#[test]
fn test_simple_transfer_cost() {
    // 21,000 gas at 50 gwei with ETH at $2000: 21000 * 50 * 1e-9 * 2000 = 2.1
    let cost = estimate_cost(21_000, 50.0, 2000.0);
    assert!((cost - 2.1).abs() < 1e-12);

    // The trailing zero is dropped: $2.1, not $2.10.
    assert_eq!(format_usd(cost), "$2.1");
}

#[test]
fn test_negative_inputs_propagate() {
    // No bounds validation: negative values flow through the arithmetic.
    let cost = estimate_cost(-21_000, 50.0, 2000.0);
    assert!((cost + 2.1).abs() < 1e-12);
    assert_eq!(format_usd(cost), "$-2.1");
}

#[test]
fn test_rounding_to_cents() {
    assert_eq!(round_to_cents(2.104), 2.1);
    assert_eq!(round_to_cents(2.105_000_1), 2.11);
    assert_eq!(round_to_cents(1234.5678), 1234.57);

    // 0.125 is exactly representable; half-away-from-zero picks 0.13 where
    // banker's rounding would pick 0.12.
    assert_eq!(round_to_cents(0.125), 0.13);
    assert_eq!(round_to_cents(-0.125), -0.13);
}

#[test]
fn test_whole_number_costs_keep_one_decimal() {
    assert_eq!(format_usd(3.0), "$3.0");
    assert_eq!(format_usd(2.996), "$3.0");
    assert_eq!(format_usd(0.004), "$0.0");
}

#[test]
fn test_two_decimal_costs_print_both() {
    assert_eq!(format_usd(1.239), "$1.24");
    assert_eq!(format_usd(0.05), "$0.05");
}

#[test]
fn test_gwei_scale_constant() {
    assert_eq!(GWEI_SCALE, 1e-9);

    // The scale factor is the exact reciprocal of the gwei unit count.
    assert_eq!(GWEI as f64 * GWEI_SCALE, 1.0);
}

#[test]
fn test_cli_prints_cost_for_three_args() {
    let output = Command::new(env!("CARGO_BIN_EXE_gas-cost"))
        .args(["21000", "50", "2000.00"])
        .output()
        .expect("failed to run gas-cost");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "$2.1\n");
}

#[test]
fn test_cli_too_few_args_exits_one_with_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_gas-cost"))
        .args(["21000", "50"])
        .output()
        .expect("failed to run gas-cost");

    // Exit code 1 with the usage message on stdout, and no cost line.
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Usage"));
    assert!(!stdout.contains('$'));
}

#[test]
fn test_cli_non_numeric_arg_exits_one() {
    let output = Command::new(env!("CARGO_BIN_EXE_gas-cost"))
        .args(["lots", "50", "2000.00"])
        .output()
        .expect("failed to run gas-cost");

    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8(output.stdout).unwrap().contains('$'));
}
