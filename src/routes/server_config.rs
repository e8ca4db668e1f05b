use axum::{Json, extract::State};

use crate::{message::ServerConfigResponse, state::SharedState};

pub async fn server_config_handler(State(state): State<SharedState>) -> Json<ServerConfigResponse> {
    Json(ServerConfigResponse {
        debug: state.config.debug,
        port: state.config.port,
        env: state.config.env.clone(),
    })
}
