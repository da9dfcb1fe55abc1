#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::app::utils::{format_currency, format_decimal};

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0.0), "₹ 0.00");
    }

    #[test]
    fn formats_small_values() {
        assert_eq!(format_currency(0.01), "₹ 0.01");
        assert_eq!(format_currency(100.1), "₹ 100.10");
        assert_eq!(format_currency(999.0), "₹ 999.00");
    }

    #[test]
    fn groups_digits_the_indian_way() {
        assert_eq!(format_currency(1000.0), "₹ 1,000.00");
        assert_eq!(format_currency(123456.78), "₹ 1,23,456.78");
        assert_eq!(format_currency(12345678.9), "₹ 1,23,45,678.90");
    }

    #[test]
    fn prefixes_negative_values() {
        assert_eq!(format_currency(-2500.5), "-₹ 2,500.50");
        assert_eq!(format_currency(-0.001), "₹ 0.00");
    }

    #[test]
    fn non_finite_values_format_as_zero() {
        assert_eq!(format_currency(f64::NAN), "₹ 0.00");
        assert_eq!(format_currency(f64::INFINITY), "₹ 0.00");
        assert_eq!(format_currency(f64::NEG_INFINITY), "₹ 0.00");
    }

    #[test]
    fn formats_decimals() {
        assert_eq!(format_decimal(dec!(32500)), "₹ 32,500.00");
        assert_eq!(format_decimal(dec!(-1234567.891)), "-₹ 12,34,567.89");
    }
}
