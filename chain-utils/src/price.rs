use tracing::debug;

/// Gas unit constants
pub const GWEI: u64 = 1_000_000_000;

/// Scale factor converting a gas price quoted in gwei into ETH per gas unit
///
/// Kept as the literal 1e-9 multiplier rather than a division by [`GWEI`] so
/// the arithmetic matches the published cost formula bit for bit.
pub const GWEI_SCALE: f64 = 0.000_000_001;

/// Estimate the fiat cost of a transaction
///
/// Computes `gas * gas_price * 1e-9 * reference_price`, where `gas_price` is
/// quoted in gwei and `reference_price` is the fiat price of one ETH.
///
/// No bounds are enforced: zero or negative inputs are accepted and propagate
/// arithmetically.
///
/// # Arguments
///
/// * `gas` - Gas units consumed by the transaction
/// * `gas_price` - Price per gas unit, in gwei
/// * `reference_price` - Fiat price of one unit of the underlying currency
///
/// # Returns
///
/// * The estimated cost in fiat terms, unrounded
pub fn estimate_cost(gas: i64, gas_price: f64, reference_price: f64) -> f64 {
    let cost = gas as f64 * gas_price * GWEI_SCALE * reference_price;
    debug!("estimated cost {} for gas={} gas_price={} reference_price={}",
        cost, gas, gas_price, reference_price);
    cost
}

/// Round a cost to two decimal places
///
/// Uses `f64::round`, which rounds half-away-from-zero. This differs from
/// banker's rounding at exact `.xx5` boundaries, but such boundaries are
/// rarely representable exactly in binary floating point.
pub fn round_to_cents(cost: f64) -> f64 {
    (cost * 100.0).round() / 100.0
}

/// Format a cost as a dollar amount
///
/// Rounds to two decimal places and renders the shortest decimal form, so
/// trailing zeros are dropped (`$2.1`, never `$2.10`) while whole-number
/// costs keep one decimal (`$3.0`, `$0.0`).
pub fn format_usd(cost: f64) -> String {
    let mut text = round_to_cents(cost).to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    format!("${text}")
}
