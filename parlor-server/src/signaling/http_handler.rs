use crate::error::RelayError;
use crate::signaling::RelayService;
use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use parlor_core::{
    CreateRoomRequest, JoinRoomRequest, LeaveRoomRequest, PollRequest, RelayResponse,
    SendRequest,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

type RelayResult = Result<Json<RelayResponse>, RelayError>;

/// HTTP surface of the relay: one JSON POST endpoint per operation.
pub fn router(service: RelayService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/rooms/create", post(create_room))
        .route("/api/rooms/join", post(join_room))
        .route("/api/rooms/leave", post(leave_room))
        .route("/api/rooms/send", post(send_message))
        .route("/api/rooms/poll", post(poll_messages))
        .layer(cors)
        .with_state(service)
}

async fn health() -> &'static str {
    "ok"
}

async fn create_room(
    State(service): State<RelayService>,
    body: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> RelayResult {
    let req = parse_body("create", body)?;
    service.create(req)?;
    Ok(Json(RelayResponse::ok()))
}

async fn join_room(
    State(service): State<RelayService>,
    body: Result<Json<JoinRoomRequest>, JsonRejection>,
) -> RelayResult {
    let req = parse_body("join", body)?;
    service.join(req)?;
    Ok(Json(RelayResponse::ok()))
}

async fn leave_room(
    State(service): State<RelayService>,
    body: Result<Json<LeaveRoomRequest>, JsonRejection>,
) -> RelayResult {
    let req = parse_body("leave", body)?;
    service.leave(req)?;
    Ok(Json(RelayResponse::ok()))
}

async fn send_message(
    State(service): State<RelayService>,
    body: Result<Json<SendRequest>, JsonRejection>,
) -> RelayResult {
    let req = parse_body("send", body)?;
    service.send(req)?;
    Ok(Json(RelayResponse::ok()))
}

async fn poll_messages(
    State(service): State<RelayService>,
    body: Result<Json<PollRequest>, JsonRejection>,
) -> RelayResult {
    let req = parse_body("poll", body)?;
    let messages = service.poll(req);
    Ok(Json(RelayResponse::with_messages(messages)))
}

fn parse_body<T>(op: &str, body: Result<Json<T>, JsonRejection>) -> Result<T, RelayError> {
    match body {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => {
            warn!("Rejected malformed {} request: {}", op, rejection.body_text());
            Err(rejection.into())
        }
    }
}
