//! # Session
//!
//! Owns one form from mount to unmount. Every event runs to completion before
//! the next one: reduce, carry out the effect, then let the renderer redraw.

use tracing::{info, warn};

use crate::{
    render::Render,
    sink::OrderSink,
    state::{Effect, Field, FormEvent, FormState, reduce},
    toppings::ToppingId,
};

pub struct FormSession<S, R = ()> {
    state: FormState,
    sink: S,
    renderer: R,
}

impl<S: OrderSink> FormSession<S> {
    pub fn new(sink: S) -> Self {
        Self::with_renderer(sink, ())
    }
}

impl<S: OrderSink, R: Render> FormSession<S, R> {
    pub fn with_renderer(sink: S, mut renderer: R) -> Self {
        let state = FormState::new();
        renderer.render(&state);

        Self {
            state,
            sink,
            renderer,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn dispatch(&mut self, event: FormEvent) -> &FormState {
        let (state, effect) = reduce(std::mem::take(&mut self.state), event);
        self.state = state;

        if let Effect::Submit(payload) = effect {
            info!("Order submitted for {} toppings", payload.toppings.len());

            if let Err(e) = self.sink.submit(&payload) {
                warn!("Order sink failed: {e}");
            }
        }

        self.renderer.render(&self.state);

        &self.state
    }

    pub fn change_full_name(&mut self, value: impl Into<String>) -> &FormState {
        self.dispatch(FormEvent::FieldChanged {
            field: Field::FullName,
            value: value.into(),
        })
    }

    pub fn change_size(&mut self, value: impl Into<String>) -> &FormState {
        self.dispatch(FormEvent::FieldChanged {
            field: Field::Size,
            value: value.into(),
        })
    }

    pub fn toggle_topping(&mut self, id: ToppingId, checked: bool) -> &FormState {
        self.dispatch(FormEvent::ToppingToggled { id, checked })
    }

    pub fn submit(&mut self) -> &FormState {
        self.dispatch(FormEvent::Submitted)
    }

    pub fn into_parts(self) -> (FormState, S, R) {
        (self.state, self.sink, self.renderer)
    }
}
