use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Form, Json,
};

use crate::models::command::CommandPayload;

/// Slack posts slash commands form-encoded; JSON is read otherwise.
/// A request without a content type is parsed as JSON when it has a body and
/// treated as an empty command when it does not.
impl<S> FromRequest<S> for CommandPayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        match content_type.as_deref() {
            Some(value) if value.starts_with("application/x-www-form-urlencoded") => {
                let Form(payload) = Form::<CommandPayload>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                Ok(payload)
            }
            Some(_) => {
                let Json(payload) = Json::<CommandPayload>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                Ok(payload)
            }
            None => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                if body.is_empty() {
                    return Ok(CommandPayload::default());
                }
                let Json(payload) =
                    Json::<CommandPayload>::from_bytes(&body).map_err(IntoResponse::into_response)?;
                Ok(payload)
            }
        }
    }
}
