use std::sync::Arc;

use axum::{
    Json,
    extract::{State as AppState, rejection::JsonRejection},
    response::Html,
};
use form::{
    Effect, FormEvent, FormSession, FormState, OrderPayload, RecordingSink, SubmitResult,
    ToppingId, reduce, render, toppings,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{error::AppError, state::State};

#[derive(Deserialize)]
pub struct EventRequest {
    #[serde(default)]
    pub state: FormState,
    pub event: FormEvent,
}

#[derive(Serialize)]
pub struct EventResponse {
    pub state: FormState,
    pub html: String,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderRequest {
    pub full_name: String,
    pub size: String,
    pub toppings: Vec<u32>,
}

#[derive(Serialize)]
pub struct OrderResponse {
    pub message: String,
    pub payload: OrderPayload,
}

pub async fn home_handler() -> Html<String> {
    Html(render::home_page())
}

pub async fn order_page_handler() -> Html<String> {
    Html(render::order_page(&FormState::new()))
}

/// Reducer over the wire. The client keeps the state between events.
pub async fn events_handler(
    AppState(state): AppState<Arc<State>>,
    body: Result<Json<EventRequest>, JsonRejection>,
) -> Result<Json<EventResponse>, AppError> {
    let Json(request) = body.map_err(|_| AppError::MalformedPayload)?;

    let mut form_state = request.state;
    let dropped = form_state.retain_known_toppings();
    if dropped > 0 {
        warn!("Dropped {dropped} unknown toppings from client state");
    }

    let (form_state, effect) = reduce(form_state, request.event);

    if let Effect::Submit(payload) = effect {
        state.hand_off(&payload)?;
    }

    let html = render::order_view(&form_state);

    Ok(Json(EventResponse {
        state: form_state,
        html,
    }))
}

/// Whole form in one request, as if typed in and submitted.
pub async fn order_handler(
    AppState(state): AppState<Arc<State>>,
    body: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<Json<OrderResponse>, AppError> {
    let Json(request) = body.map_err(|_| AppError::MalformedPayload)?;

    if let Some(&id) = request
        .toppings
        .iter()
        .find(|&&id| !toppings::is_known(ToppingId(id)))
    {
        return Err(AppError::UnknownTopping(id));
    }

    let mut session = FormSession::new(RecordingSink::default());
    session.change_full_name(request.full_name);
    session.change_size(request.size);
    for id in request.toppings {
        session.toggle_topping(ToppingId(id), true);
    }
    session.submit();

    let (form_state, mut recorded, ()) = session.into_parts();

    match (form_state.result, recorded.payloads.pop()) {
        (SubmitResult::Success { message }, Some(payload)) => {
            state.hand_off(&payload)?;
            info!("Order accepted");

            Ok(Json(OrderResponse { message, payload }))
        }
        _ => Err(AppError::Rejected(form_state.errors)),
    }
}
