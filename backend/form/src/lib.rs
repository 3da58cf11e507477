//! # Pizza Order Form
//!
//! Client logic behind the order form.
//!
//! ## Flow
//!
//! - User input becomes a [`FormEvent`]
//! - [`reduce`] maps the current [`FormState`] and the event to the next state
//! - Field changes only re-validate the field that changed
//! - Submitting re-validates **both** fields, even untouched ones
//! - A successful submit yields an [`OrderPayload`] effect and clears the form
//! - Renderers observe the state after every event and redraw
//!
//! ## Payload
//!
//! Handed to an [`OrderSink`], currently only written to the log.
//! ```json
//! { "fullName": "Alice", "size": "M", "toppings": [1, 3] }
//! ```
//!
//! ## Notes
//! - Toppings never affect validity
//! - The submit gate is a convenience, submitting always re-validates

pub mod nav;
pub mod payload;
pub mod render;
pub mod session;
pub mod sink;
pub mod state;
pub mod summary;
pub mod toppings;
pub mod validation;

pub use payload::OrderPayload;
pub use session::FormSession;
pub use sink::{LogSink, OrderSink, RecordingSink, SinkError};
pub use state::{Effect, Field, FormEvent, FormState, OrderForm, SubmitResult, reduce};
pub use toppings::{Topping, ToppingId};
pub use validation::{Size, ValidationError, ValidationState};
