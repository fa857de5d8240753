//! Amount-to-words conversion route.

use axum::{
    Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use amountwords_core::{WordsError, amount_to_words};
use amountwords_shared::AppError;

use crate::AppState;

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/convert", get(convert_amount))
}

/// Query parameters for the conversion endpoint.
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Raw amount string as typed by the user.
    pub amount: Option<String>,
}

/// GET `/convert?amount=<string>` - Convert a decimal amount to words.
///
/// Responds with the words string as a plain-text body. Missing or
/// unparseable amounts are rejected with 400 before the core is invoked.
async fn convert_amount(Query(query): Query<ConvertQuery>) -> Response {
    let Some(raw) = query.amount.filter(|value| !value.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            "Query parameter 'amount' is required.",
        )
            .into_response();
    };

    let Ok(amount) = raw.trim().parse::<Decimal>() else {
        warn!(amount = %raw, "Rejected non-numeric amount");
        return (StatusCode::BAD_REQUEST, "Invalid numeric amount.").into_response();
    };

    match amount_to_words(amount) {
        Ok(words) => (StatusCode::OK, words).into_response(),
        Err(err @ WordsError::OutOfRange(_)) => {
            warn!(error = %err, "Rejected out-of-range amount");
            error_response(&AppError::Validation("Amount is out of range.".to_string()))
        }
    }
}

/// Renders an [`AppError`] as a plain-text response with its status code.
fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = match err {
        AppError::Validation(msg) | AppError::Internal(msg) => msg.clone(),
    };
    (status, message).into_response()
}
