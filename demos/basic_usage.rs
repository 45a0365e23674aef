// ============================================================================
// Basic Usage Example
// ============================================================================

use money_engine::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Money Engine Example ===\n");

    // Calculator with the default precision (2 fractional digits)
    let calc = MoneyCalculator::default();
    println!("Created calculator with precision {}\n", calc.precision());

    // Validation
    println!("Validating inputs...");
    for input in ["123.45", "-0.07", "12.3.4", "abc"] {
        println!("  {:>8} -> {}", input, calc.is_valid_money(input));
    }

    // A small invoice
    println!("\n=== Invoice ===");
    let mut total = "0".to_string();
    for (item, unit_price, quantity) in [
        ("widget", "19.99", "3"),
        ("gadget", "4.75", "2"),
        ("shipping", "6.505", "1"),
    ] {
        let line = calc.multiply(unit_price, quantity).unwrap();
        total = calc.add(&total, &line).unwrap();
        println!("  {:>10} {} x {} = {}", item, unit_price, quantity, line);
    }
    println!("  {:>10} {}", "total", total);

    // Splitting the total three ways
    let share = calc.divide(&total, "3").unwrap();
    let remainder = calc.modulus(&total, "3").unwrap();
    println!("\nSplit three ways: {} each (remainder {})", share, remainder);

    // A divisor that rounds to zero at the active precision is rejected
    println!("\n=== Division by (rounded) zero ===");
    match calc.divide(&total, "0.001") {
        Ok(result) => println!("unexpected result: {}", result),
        Err(err) => println!("rejected: {}", err),
    }

    // Higher precision for rates
    println!("\n=== Precision 4 ===");
    let rates = calc.with_precision(4);
    println!("1.00 / 3.00 = {}", rates.divide("1.00", "3.00").unwrap());

    // Typed boundary: parse once, compute many times
    println!("\n=== Typed amounts ===");
    let subtotal: Amount = "99.95".parse().unwrap();
    let tax_rate: Amount = "0.0825".parse().unwrap();
    let tax = calc.multiply_amounts(subtotal, tax_rate).unwrap();
    let due = calc.add_amounts(subtotal, tax).unwrap();
    println!("subtotal {} + tax {} = {}", subtotal, tax, due);
}
