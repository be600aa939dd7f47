//! Insider-trade digest.

use crate::models::InsiderTrade;

pub const NO_INSIDER_TRADES: &str = "No insider trades available from past 45 days.";
pub const INSIDER_HEADING: &str = "### Insider Trades from Past 60 days";

/// Render insider filings, skipping no-op filings, in input order.
///
/// Each optional field is printed only when present; the filing date is
/// always printed.
pub fn render_insider_digest(trades: &[InsiderTrade]) -> String {
    let relevant: Vec<&InsiderTrade> = trades.iter().filter(|t| !t.is_no_op()).collect();

    if relevant.is_empty() {
        return NO_INSIDER_TRADES.to_string();
    }

    let mut blocks = vec![INSIDER_HEADING.to_string()];
    blocks.extend(
        relevant
            .iter()
            .enumerate()
            .map(|(i, trade)| render_trade(i + 1, trade)),
    );
    blocks.join("\n")
}

fn render_trade(number: usize, trade: &InsiderTrade) -> String {
    let fields: [Option<String>; 11] = [
        text_field("Issuer", &trade.issuer),
        text_field("Name", &trade.name),
        text_field("Title", &trade.title),
        trade
            .is_board_director
            .map(|v| format!("- Board Director: {}", v)),
        text_field("Transaction Date", &trade.transaction_date),
        trade
            .transaction_shares
            .map(|v| format!("- Shares Traded: {}", v)),
        trade
            .transaction_price_per_share
            .map(|v| format!("- Price per Share: ${}", v)),
        trade
            .transaction_value
            .map(|v| format!("- Transaction Value: ${}", v)),
        trade
            .shares_owned_before
            .map(|v| format!("- Shares Before: {}", v)),
        trade
            .shares_owned_after
            .map(|v| format!("- Shares After: {}", v)),
        text_field("Security Title", &trade.security_title),
    ];

    let mut lines = vec![format!("Insider Trade #{} of {}", number, trade.ticker)];
    lines.extend(fields.into_iter().flatten());
    lines.push(format!("- Filing Date: {}", trade.filing_date));
    lines.join("\n")
}

/// Empty strings are treated as absent.
fn text_field(label: &str, value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| format!("- {}: {}", label, v))
}
