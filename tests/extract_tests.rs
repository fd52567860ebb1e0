//! Extraction heuristic properties, exercised through the library API.

use rsupplylog::core::extract::{
    DEFAULT_ORDER, ExtractedFigures, Field, extract_figures, parse_order, scan_tokens,
};

#[test]
fn test_receipt_scenario_assigns_positionally() {
    let figures = extract_figures("12 500.50 6000.00 3 250.75", &DEFAULT_ORDER);

    assert_eq!(
        figures,
        ExtractedFigures {
            supply_cards: 12,
            supply_amount: 500.50,
            supply_total: 6000.00,
            exchange_cards: 3,
            exchange_amount: 250.75,
        }
    );
}

#[test]
fn test_tokens_beyond_the_fifth_are_ignored() {
    let with_noise = extract_figures("12 500.50 6000.00 3 250.75 99 1234.56", &DEFAULT_ORDER);
    let clean = extract_figures("12 500.50 6000.00 3 250.75", &DEFAULT_ORDER);

    assert_eq!(with_noise, clean);
}

#[test]
fn test_fewer_than_five_tokens_yields_all_zeros() {
    let figures = extract_figures("total: 1234.00 cards: 7", &DEFAULT_ORDER);

    assert_eq!(figures, ExtractedFigures::default());
}

#[test]
fn test_no_tokens_at_all() {
    let figures = extract_figures("no numbers in here", &DEFAULT_ORDER);

    assert_eq!(figures, ExtractedFigures::default());
}

#[test]
fn test_tokens_embedded_in_noise_are_found_in_order() {
    // dates and labels around the figures, like real OCR output
    let text = "SUPPLY 8 x 75.25 = 602.00\nEXCHANGE 2 x 30,50";
    let figures = extract_figures(text, &DEFAULT_ORDER);

    assert_eq!(figures.supply_cards, 8);
    assert_eq!(figures.supply_amount, 75.25);
    assert_eq!(figures.supply_total, 602.00);
    assert_eq!(figures.exchange_cards, 2);
    // comma-separated decimal is normalized
    assert_eq!(figures.exchange_amount, 30.50);
}

#[test]
fn test_count_field_truncates_decimal_token() {
    // a decimal token landing on a count slot keeps its integer prefix
    let figures = extract_figures("3.5 10.00 35.00 1 5.00", &DEFAULT_ORDER);

    assert_eq!(figures.supply_cards, 3);
    assert_eq!(figures.exchange_cards, 1);
}

#[test]
fn test_scan_preserves_order_of_appearance() {
    let tokens = scan_tokens("a 1 b 2.5 c 3,7 d 42");
    assert_eq!(tokens, vec!["1", "2.5", "3,7", "42"]);
}

#[test]
fn test_custom_field_order_is_honored() {
    // receipt layout with exchange block first
    let order = [
        Field::ExchangeCards,
        Field::ExchangeAmount,
        Field::SupplyCards,
        Field::SupplyAmount,
        Field::SupplyTotal,
    ];

    let figures = extract_figures("3 250.75 12 500.50 6000.00", &order);

    assert_eq!(figures.supply_cards, 12);
    assert_eq!(figures.supply_amount, 500.50);
    assert_eq!(figures.supply_total, 6000.00);
    assert_eq!(figures.exchange_cards, 3);
    assert_eq!(figures.exchange_amount, 250.75);
}

#[test]
fn test_parse_order_accepts_a_permutation() {
    let names: Vec<String> = [
        "exchange_cards",
        "exchange_amount",
        "supply_cards",
        "supply_amount",
        "supply_total",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let order = parse_order(&names).expect("valid permutation");
    assert_eq!(order[0], Field::ExchangeCards);
    assert_eq!(order[4], Field::SupplyTotal);
}

#[test]
fn test_parse_order_rejects_unknown_field() {
    let names: Vec<String> = [
        "supply_cards",
        "supply_amount",
        "supply_total",
        "exchange_cards",
        "bogus_field",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    assert!(parse_order(&names).is_err());
}

#[test]
fn test_parse_order_rejects_wrong_arity() {
    let names: Vec<String> = ["supply_cards".to_string()].to_vec();
    assert!(parse_order(&names).is_err());
}
