//! Request handlers mapping edit outcomes onto the JSON contract.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info};

use super::AppState;
use crate::edit::{validate_edit_request, EditOutcome, TEXT_ONLY_MESSAGE};
use crate::models::{EditRequest, EditSuccessResponse, ErrorResponse, TextOnlyResponse};
use crate::Error;

/// Liveness probe.
pub async fn liveness() -> &'static str {
    "gemini-edit-relay is running"
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/edit-image-with-prompt`
///
/// Exactly one JSON body per call: 200 with an edited image, 202 when the
/// model answered with text only, 400 on malformed input, 500 otherwise.
pub async fn edit_image_with_prompt(
    State(state): State<AppState>,
    payload: Result<Json<EditRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    if let Err(e) = validate_edit_request(&request) {
        return error_response(StatusCode::BAD_REQUEST, e.to_string());
    }

    match state.orchestrator.edit(&request).await {
        Ok(EditOutcome::Edited {
            edited_image_data_b64,
            mime_type,
            text_response,
        }) => (
            StatusCode::OK,
            Json(EditSuccessResponse {
                edited_image_data_b64,
                mime_type,
                text_response,
            }),
        )
            .into_response(),
        Ok(EditOutcome::TextOnly { text }) => {
            info!("Gemini returned only text: {}", text);
            (
                StatusCode::ACCEPTED,
                Json(TextOnlyResponse {
                    message: TEXT_ONLY_MESSAGE.to_string(),
                    text_response: text,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Error processing image editing request: {}", e);
            error_response(status_for(&e), e.to_string())
        }
    }
}
