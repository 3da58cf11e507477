//! # Order Sink
//!
//! Where a successful submit hands its payload. No real backend exists yet,
//! [`LogSink`] only writes the payload to the diagnostic log.

use thiserror::Error;
use tracing::info;

use crate::payload::OrderPayload;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Order rejected: {0}")]
    Rejected(String),
}

pub trait OrderSink {
    fn submit(&mut self, payload: &OrderPayload) -> Result<(), SinkError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl OrderSink for LogSink {
    fn submit(&mut self, payload: &OrderPayload) -> Result<(), SinkError> {
        let json = serde_json::to_string(payload)?;
        info!("Payload: {json}");

        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub payloads: Vec<OrderPayload>,
}

impl OrderSink for RecordingSink {
    fn submit(&mut self, payload: &OrderPayload) -> Result<(), SinkError> {
        self.payloads.push(payload.clone());

        Ok(())
    }
}

impl<S: OrderSink + ?Sized> OrderSink for &mut S {
    fn submit(&mut self, payload: &OrderPayload) -> Result<(), SinkError> {
        (**self).submit(payload)
    }
}
