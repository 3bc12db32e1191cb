use cotiza::core::*;
use rust_decimal_macros::dec;

// --- Money/tax decomposition ---

#[test]
fn bolt_reference_case() {
    // 1190 gross at 19% splits into 1000 net + 190 tax, doubled by quantity
    let a = LineAmounts::compute(dec!(1190), dec!(19), 2);
    assert_eq!(format_amount(a.unit_net), "$ 1,000.00");
    assert_eq!(format_amount(a.unit_tax), "$ 190.00");
    assert_eq!(format_amount(a.line_total), "$ 2,380.00");
}

#[test]
fn aggregate_identity_over_mixed_lines() {
    let lines = [
        (dec!(1190), dec!(19), 2u32),
        (dec!(500), dec!(0), 3),
        (dec!(74.99), dec!(5), 1),
    ];
    let mut totals = DocumentTotals::new();
    for (gross, rate, qty) in lines {
        let amounts = LineAmounts::compute(gross, rate, qty);
        totals.add_line(&amounts, qty);
    }
    assert_eq!(totals.net_total() + totals.total_tax, totals.total_cost);
    assert!(totals.total_tax >= dec!(0));
    assert!(totals.net_total() >= dec!(0));
}

#[test]
fn empty_totals_are_zero() {
    let totals = DocumentTotals::new();
    assert_eq!(format_amount(totals.total_cost), "$ 0.00");
    assert_eq!(format_amount(totals.net_total()), "$ 0.00");
}

#[test]
fn zero_rate_keeps_gross_price() {
    let a = LineAmounts::compute(dec!(123.45), dec!(0), 1);
    assert_eq!(a.unit_net, dec!(123.45));
    assert_eq!(a.unit_tax, dec!(0));
}

// --- Record types ---

#[test]
fn cli_codes_round_trip() {
    assert_eq!(RecordType::from_cli_code("quote").unwrap(), RecordType::Quote);
    assert_eq!(RecordType::from_cli_code("order").unwrap(), RecordType::Order);
    assert_eq!(
        RecordType::from_cli_code("preorder").unwrap(),
        RecordType::Preorder
    );
}

#[test]
fn invalid_cli_code_names_the_value() {
    let err = RecordType::from_cli_code("invoice").unwrap_err();
    assert!(matches!(err, CotizaError::InvalidInput(_)));
    assert!(err.to_string().contains("`invoice`"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn connection_error_gets_distinct_exit_code() {
    assert_eq!(CotizaError::Connection("refused".into()).exit_code(), 2);
}

#[test]
fn collections_match_record_types() {
    assert_eq!(RecordType::Quote.collection(), "quotes");
    assert_eq!(RecordType::Order.collection(), "orders");
    assert_eq!(RecordType::Preorder.collection(), "preorders");
}

#[test]
fn first_location_wins() {
    let item = LineItem {
        name: "Tubo PVC".into(),
        quantity: 1,
        tax_rate_percent: dec!(19),
        locations: vec![
            StockLocation { unit_price_incl_tax: dec!(100) },
            StockLocation { unit_price_incl_tax: dec!(999) },
        ],
    };
    assert_eq!(item.unit_price_incl_tax(), dec!(100));
}

#[test]
fn empty_locations_price_at_zero() {
    let item = LineItem {
        name: "Sin bodega".into(),
        quantity: 4,
        tax_rate_percent: dec!(19),
        locations: vec![],
    };
    assert_eq!(item.unit_price_incl_tax(), dec!(0));
}
