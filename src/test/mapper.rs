#[cfg(test)]
mod tests {
    use crate::{
        api::{MappingPolicy, map_holdings},
        error::DomainError,
        test::stubs::dto,
    };

    #[test]
    fn maps_single_record_with_pnl() {
        let holding = dto("RELIANCE", 10, 2500.0, 2400.0, 2480.0)
            .to_holding()
            .unwrap();

        assert_eq!(holding.symbol(), "RELIANCE");
        assert_eq!(*holding.quantity(), 10);
        assert_eq!(*holding.pnl(), 1000.0);
    }

    #[test]
    fn maps_negative_pnl() {
        let holding = dto("HDFC", 5, 1500.0, 1600.0, 1520.0).to_holding().unwrap();
        assert_eq!(*holding.pnl(), -500.0);
    }

    #[test]
    fn maps_lowercase_symbol() {
        let holding = dto("infy", 1, 1500.0, 1400.0, 1450.0).to_holding().unwrap();
        assert_eq!(holding.symbol(), "INFY");
    }

    #[test]
    fn overflowing_pnl_is_a_calculation_error() {
        let err = dto("BIG", 10, f64::MAX, 1.0, 1.0).to_holding().unwrap_err();
        assert_eq!(err, DomainError::CalculationOverflow);
    }

    #[test]
    fn invalid_record_surfaces_field_error() {
        let err = dto("BAD", 1, 100.0, 90.0, 0.0).to_holding().unwrap_err();
        assert!(matches!(err, DomainError::InvalidPrice { field: "close", .. }));
    }

    #[test]
    fn maps_batch_in_order() {
        let records = vec![
            dto("TCS", 2, 3500.0, 3400.0, 3450.0),
            dto("INFY", 4, 1500.0, 1400.0, 1450.0),
        ];

        let holdings = map_holdings(&records, MappingPolicy::FailFast).unwrap();

        let symbols: Vec<&str> = holdings.iter().map(|h| h.symbol().as_str()).collect();
        assert_eq!(symbols, vec!["TCS", "INFY"]);
    }

    #[test]
    fn maps_empty_batch() {
        assert!(map_holdings(&[], MappingPolicy::FailFast).unwrap().is_empty());
    }

    #[test]
    fn fail_fast_discards_the_whole_batch() {
        let records = vec![
            dto("VALID_A", 1, 100.0, 90.0, 95.0),
            dto("INVALID_B", -5, 100.0, 90.0, 95.0),
            dto("VALID_C", 1, 100.0, 90.0, 95.0),
        ];

        let result = map_holdings(&records, MappingPolicy::FailFast);

        assert_eq!(result, Err(DomainError::InvalidQuantity(-5)));
    }

    #[test]
    fn skip_invalid_keeps_valid_records() {
        let records = vec![
            dto("VALID_A", 1, 100.0, 90.0, 95.0),
            dto("INVALID_B", -5, 100.0, 90.0, 95.0),
            dto("VALID_C", 1, 100.0, 90.0, 95.0),
        ];

        let holdings = map_holdings(&records, MappingPolicy::SkipInvalid).unwrap();

        let symbols: Vec<&str> = holdings.iter().map(|h| h.symbol().as_str()).collect();
        assert_eq!(symbols, vec!["VALID_A", "VALID_C"]);
    }
}
