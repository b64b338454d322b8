use rust_decimal::{Decimal, RoundingStrategy};

/// Normalizes an amount to exactly two fractional digits for output.
pub fn to_cents(value: Decimal) -> Decimal {
    let mut value = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(2);
    value
}
