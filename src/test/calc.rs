#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{app::calc::summarize, test::stubs::holding};

    #[test]
    fn summarizes_holdings() {
        let holdings = vec![
            holding("RELIANCE", 10, 2500.0, 2400.0, 2480.0),
            holding("HDFC", 5, 1500.0, 1600.0, 1520.0),
        ];

        let summary = summarize(&holdings).unwrap();

        assert_eq!(*summary.current_value(), dec!(32500.00));
        assert_eq!(*summary.total_investment(), dec!(32000.00));
        assert_eq!(*summary.todays_pnl(), dec!(100.00));
        assert_eq!(*summary.total_pnl(), dec!(500.00));
    }

    #[test]
    fn empty_summary_is_zero() {
        let summary = summarize(&[]).unwrap();

        assert!(summary.current_value().is_zero());
        assert!(summary.total_pnl().is_zero());
    }
}
