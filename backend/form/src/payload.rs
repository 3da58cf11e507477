//! # Payload
//!
//! Contract handed to the order submission collaborator.
//!
//! ```json
//! { "fullName": string, "size": "S" | "M" | "L", "toppings": number[] }
//! ```

use serde::{Deserialize, Serialize};

use crate::{state::OrderForm, toppings::ToppingId, validation::Size};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub full_name: String,
    pub size: Size,
    pub toppings: Vec<ToppingId>,
}

impl OrderPayload {
    /// Toppings come out in ascending id order.
    pub fn from_form(form: &OrderForm) -> Self {
        Self {
            full_name: form.full_name.clone(),
            size: form.size,
            toppings: form.selected_toppings.iter().copied().collect(),
        }
    }
}
