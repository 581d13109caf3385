use crate::models::{
    chat::{Block, ChatResponse, ResponseType},
    token::{TokenDetail, TokenIndexEntry},
};

/// Price, name and logo reply for one resolved token.
///
/// `coin_page_url` is the root of the public coin pages; the token's id is
/// appended to it for the "More detail" link.
pub fn token_info(
    coin_id: &str,
    token: &TokenDetail,
    coin_page_url: &str,
    response_type: Option<ResponseType>,
) -> ChatResponse {
    let symbol = token.symbol.to_uppercase();
    let detail_url = format!("{}/{}", coin_page_url.trim_end_matches('/'), coin_id);
    let prices = &token.market_data.current_price;

    let text = [
        format!("Found a {} token.", symbol),
        format!("Token name: {}", token.name),
        format!("Token symbol: {}", symbol),
        "Current prices:".to_string(),
        format!("• JPY: {}", prices.jpy),
        format!("• USD: {}", prices.usd),
        format!("More detail: {}", detail_url),
    ]
    .join("\n");

    ChatResponse::with_blocks(
        response_type,
        vec![
            Block::markdown_section(text),
            Block::image(token.image.small.clone(), "Logo"),
        ],
    )
}

/// Name/symbol summary for a symbol shared by several tokens.
pub fn tokens_info(tokens: &[&TokenIndexEntry], symbol: &str) -> ChatResponse {
    let mut lines = vec![format!("Found a {} tokens.", symbol.to_uppercase())];
    lines.extend(tokens.iter().map(|token| {
        format!(
            "• Name: {}, Symbol: {}",
            token.name,
            token.symbol.to_uppercase()
        )
    }));

    ChatResponse::with_blocks(
        Some(ResponseType::InChannel),
        vec![Block::markdown_section(lines.join("\n"))],
    )
}

pub fn symbol_not_found(symbol: &str) -> ChatResponse {
    ChatResponse::ephemeral(format!("Token not found: Token symbol: {}", symbol))
}

pub fn invalid_request() -> ChatResponse {
    ChatResponse::ephemeral("Invalid request.")
}

pub fn token_not_found() -> ChatResponse {
    ChatResponse::ephemeral("Token not found.")
}
