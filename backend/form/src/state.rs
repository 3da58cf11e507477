//! # Form State
//!
//! One form session as plain data plus a pure reducer.
//!
//! ## Transitions
//! - Field change: store the raw value, re-validate that field only
//! - Topping toggle: add or remove the id, no validation attached
//! - Submit: re-validate both fields, then either succeed and clear the form or
//!   fail and keep everything the user typed
//!
//! The submit gate is recomputed after every event.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    payload::OrderPayload,
    summary::summary_message,
    toppings::{self, ToppingId},
    validation::{FULL_NAME_MAX, FULL_NAME_MIN, SUBMIT_FAILURE, Size, ValidationState, trimmed_len},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderForm {
    pub full_name: String,
    pub size: Size,
    pub selected_toppings: BTreeSet<ToppingId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Size,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormEvent {
    FieldChanged { field: Field, value: String },
    ToppingToggled { id: ToppingId, checked: bool },
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SubmitResult {
    #[default]
    Pending,
    Success { message: String },
    Failure { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormState {
    pub form: OrderForm,
    pub errors: ValidationState,
    pub can_submit: bool,
    pub result: SubmitResult,
}

/// Work the reducer asks its caller to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Submit(OrderPayload),
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops ids outside the catalog, for state that arrives from a client.
    pub fn retain_known_toppings(&mut self) -> usize {
        let before = self.form.selected_toppings.len();
        self.form.selected_toppings.retain(|id| toppings::is_known(*id));

        before - self.form.selected_toppings.len()
    }

    fn gate(&self) -> bool {
        let len = trimmed_len(&self.form.full_name);

        (FULL_NAME_MIN..=FULL_NAME_MAX).contains(&len)
            && self.form.size.is_selected()
            && self.errors.is_clear()
    }
}

pub fn reduce(mut state: FormState, event: FormEvent) -> (FormState, Effect) {
    debug!(?event, "Reducing form event");

    let effect = match event {
        FormEvent::FieldChanged {
            field: Field::FullName,
            value,
        } => {
            state.errors.set_full_name(&value);
            state.form.full_name = value;
            Effect::None
        }
        FormEvent::FieldChanged {
            field: Field::Size,
            value,
        } => {
            state.errors.set_size(&value);
            state.form.size = Size::from_code(&value).unwrap_or_default();
            Effect::None
        }
        FormEvent::ToppingToggled { id, checked } => {
            toggle(&mut state.form, id, checked);
            Effect::None
        }
        FormEvent::Submitted => submit(&mut state),
    };

    state.can_submit = state.gate();

    (state, effect)
}

fn toggle(form: &mut OrderForm, id: ToppingId, checked: bool) {
    if !toppings::is_known(id) {
        warn!("Ignoring unknown topping {id}");
        return;
    }

    if checked {
        form.selected_toppings.insert(id);
    } else {
        form.selected_toppings.remove(&id);
    }
}

fn submit(state: &mut FormState) -> Effect {
    state.errors.set_full_name(&state.form.full_name);
    state.errors.set_size(state.form.size.code());

    if !state.errors.is_clear() {
        state.result = SubmitResult::Failure {
            message: SUBMIT_FAILURE.to_string(),
        };

        return Effect::None;
    }

    let form = std::mem::take(&mut state.form);
    state.result = SubmitResult::Success {
        message: summary_message(&form.full_name, form.size, form.selected_toppings.len()),
    };

    Effect::Submit(OrderPayload::from_form(&form))
}
