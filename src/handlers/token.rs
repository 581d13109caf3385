use axum::{extract::State, http::StatusCode, Json};

use crate::models::{
    chat::{ChatResponse, ResponseType},
    command::{parse_lookup_command, parse_symbol_command, CommandPayload, LookupKey},
    token::ErrorResponse,
};
use crate::services::{
    coingecko::CoinGeckoError,
    response_formatter,
    token_resolver::{self, Resolution},
};
use crate::AppState;

type HandlerResult = Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)>;

fn upstream_error(e: CoinGeckoError) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!("Upstream lookup failed: {}", e);
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: format!("Token lookup failed: {}", e),
        }),
    )
}

/// Handler for POST /helloWorld
/// Looks up a single token by symbol, e.g. `btc`
pub async fn symbol_price(
    State(state): State<AppState>,
    payload: CommandPayload,
) -> HandlerResult {
    tracing::debug!("Request body: {:?}", payload);

    let Some(command) = parse_symbol_command(payload.text()) else {
        return Ok(Json(response_formatter::symbol_not_found(
            &payload.text().to_lowercase(),
        )));
    };

    let index = state
        .tokens
        .fetch_token_list()
        .await
        .map_err(upstream_error)?;

    let Some(entry) = token_resolver::find_by_symbol(&index, &command.symbol) else {
        tracing::info!("Token not found. CoinGecko token symbol: {}", command.symbol);
        return Ok(Json(response_formatter::symbol_not_found(&command.symbol)));
    };

    let token = state
        .tokens
        .fetch_token(&entry.id)
        .await
        .map_err(upstream_error)?;

    Ok(Json(response_formatter::token_info(
        &entry.id,
        &token,
        &state.coin_page_url,
        None,
    )))
}

/// Handler for POST /getToken
/// Looks up a token by `name <value>` or `symbol <value>`
pub async fn get_token(State(state): State<AppState>, payload: CommandPayload) -> HandlerResult {
    tracing::debug!("Request body: {:?}", payload);

    let Some(command) = parse_lookup_command(payload.text()) else {
        return Ok(Json(response_formatter::invalid_request()));
    };

    let index = state
        .tokens
        .fetch_token_list()
        .await
        .map_err(upstream_error)?;

    let entry = match token_resolver::resolve(&index, command.key, &command.value) {
        Resolution::Single(entry) => entry,
        Resolution::Multiple(found) => {
            tracing::debug!("{} tokens share symbol {}", found.len(), command.value);
            return Ok(Json(response_formatter::tokens_info(&found, &command.value)));
        }
        Resolution::NotFound => {
            let key = match command.key {
                LookupKey::Symbol => "symbol",
                LookupKey::Name => "name",
            };
            tracing::info!("Token not found. CoinGecko token {}: {}", key, command.value);
            return Ok(Json(response_formatter::token_not_found()));
        }
    };

    let token = state
        .tokens
        .fetch_token(&entry.id)
        .await
        .map_err(upstream_error)?;

    Ok(Json(response_formatter::token_info(
        &entry.id,
        &token,
        &state.coin_page_url,
        Some(ResponseType::InChannel),
    )))
}
