use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    error::{AppError, NO_MESSAGE},
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let relay_id = Uuid::new_v4();

    let message = match payload {
        Ok(Json(ChatRequest { message: Some(m) })) if !m.is_empty() => m,
        Ok(_) => {
            warn!(%relay_id, "chat request without message");
            return Err(AppError::Validation(NO_MESSAGE.to_string()));
        }
        Err(rejection) => {
            return Err(AppError::Internal(format!("relay {relay_id}: {rejection}")));
        }
    };

    info!(%relay_id, chars = message.chars().count(), "relaying chat message");
    let response = state
        .provider
        .generate(state.persona.system_prompt(), &message)
        .await
        .map_err(|e| AppError::Internal(format!("relay {relay_id}: {e}")))?;

    Ok(Json(ChatResponse { response }))
}
