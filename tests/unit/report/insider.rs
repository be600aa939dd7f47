//! Unit tests for the insider digest and prompt assembly

use tradelens::models::InsiderTrade;
use tradelens::report::{build_prompt, render_insider_digest, NO_INSIDER_TRADES};

fn no_op(ticker: &str) -> InsiderTrade {
    InsiderTrade {
        transaction_shares: Some(0.0),
        shares_owned_before: Some(500.0),
        shares_owned_after: Some(500.0),
        ..InsiderTrade::new(ticker, "2025-03-01")
    }
}

fn sale() -> InsiderTrade {
    InsiderTrade {
        issuer: Some("Tesla, Inc.".to_string()),
        name: Some("Jane Doe".to_string()),
        title: Some(String::new()),
        is_board_director: Some(false),
        transaction_shares: Some(100.0),
        transaction_price_per_share: Some(250.5),
        shares_owned_before: Some(1_000.0),
        shares_owned_after: Some(900.0),
        ..InsiderTrade::new("TSLA", "2025-03-04")
    }
}

#[test]
fn test_no_trades() {
    assert_eq!(render_insider_digest(&[]), NO_INSIDER_TRADES);
}

#[test]
fn test_only_no_op_trades() {
    assert_eq!(render_insider_digest(&[no_op("TSLA")]), NO_INSIDER_TRADES);
}

#[test]
fn test_no_op_trades_are_skipped_and_numbering_is_contiguous() {
    let digest = render_insider_digest(&[no_op("TSLA"), sale(), no_op("TSLA"), sale()]);

    assert!(digest.starts_with("### Insider Trades from Past 60 days\n"));
    assert_eq!(digest.matches("Insider Trade #").count(), 2);
    assert!(digest.contains("Insider Trade #1 of TSLA"));
    assert!(digest.contains("Insider Trade #2 of TSLA"));
    assert!(!digest.contains("Insider Trade #3"));
}

#[test]
fn test_trade_block_fields() {
    let digest = render_insider_digest(&[sale()]);
    let expected = "### Insider Trades from Past 60 days\n\
                    Insider Trade #1 of TSLA\n\
                    - Issuer: Tesla, Inc.\n\
                    - Name: Jane Doe\n\
                    - Board Director: false\n\
                    - Shares Traded: 100\n\
                    - Price per Share: $250.5\n\
                    - Shares Before: 1000\n\
                    - Shares After: 900\n\
                    - Filing Date: 2025-03-04";
    assert_eq!(digest, expected);
}

#[test]
fn test_filing_date_always_present() {
    let digest = render_insider_digest(&[InsiderTrade::new("NVDA", "2025-02-10")]);
    assert!(digest.ends_with("Insider Trade #1 of NVDA\n- Filing Date: 2025-02-10"));
    assert!(!digest.contains("- Name:"));
}

#[test]
fn test_zero_shares_with_changed_holding_is_kept() {
    let trade = InsiderTrade {
        shares_owned_after: Some(400.0),
        ..no_op("TSLA")
    };
    assert!(render_insider_digest(&[trade]).contains("Insider Trade #1 of TSLA"));
}

#[test]
fn test_build_prompt_order() {
    let prompt = build_prompt("TSLA", "TSLA Stock Analysis\n", NO_INSIDER_TRADES);

    let digest_at = prompt.find("TSLA Stock Analysis").unwrap();
    let insider_at = prompt.find(NO_INSIDER_TRADES).unwrap();
    let instructions_at = prompt.find("### Instructions: for stock TSLA").unwrap();

    assert!(digest_at < insider_at && insider_at < instructions_at);
    assert!(prompt.contains("'rating': strong buy, buy, hold, sell, or strong sell"));
}
