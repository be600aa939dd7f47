//! Final prompt assembly for the rating request.

pub const SYSTEM_PROMPT: &str =
    "You are a helpful trading analyst. Your job is to rate whether a stock is a buy, hold or sell.";

/// Concatenate the technical digest, the insider digest and the rating
/// instructions into one prompt.
pub fn build_prompt(ticker: &str, digest: &str, insider_digest: &str) -> String {
    format!(
        "{digest}\n{insider}\n\n{instructions}",
        digest = digest.trim_end(),
        insider = insider_digest.trim_end(),
        instructions = instructions(ticker)
    )
}

fn instructions(ticker: &str) -> String {
    format!(
        "### Instructions: for stock {ticker}, review `Key Statistics`, `Technical Indicators` \
and `Insider Trades`, and provide a rating to predict its stock performance within the next \
5 trading days. The rating should be strong buy (+5% or better), buy (+1% to +5%), \
hold (-1% to +1%), sell (-5% to -1%), or strong sell (-5% or worse).\n\n\
Your answer should only contain a JSON object with the following two keywords:\n\
'reasoning': a detailed description of your thought process for the rating\n\
'rating': strong buy, buy, hold, sell, or strong sell\n\
Please DO NOT output anything outside the JSON.\n",
        ticker = ticker
    )
}
