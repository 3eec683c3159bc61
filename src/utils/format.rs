/// Formats a price the way the page shows it.
/// - Whole amounts print without decimals (`35`)
/// - Fractional amounts print the shortest exact form (`35.5`)
pub fn format_price(price: f64) -> String {
    // Also folds -0.0 into "0"
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{}", price as i64)
    } else {
        format!("{}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_and_fractional() {
        assert_eq!(format_price(12.0), "12");
        assert_eq!(format_price(12.5), "12.5");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(-0.0), "0");
        assert_eq!(format_price(39.99), "39.99");
    }
}
