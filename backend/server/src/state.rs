use std::sync::{Arc, Mutex, MutexGuard};

use form::{LogSink, OrderPayload, OrderSink};
use tracing::warn;

use super::{config::Config, error::AppError};

pub type SharedSink = Box<dyn OrderSink + Send>;

pub struct State {
    pub config: Config,
    sink: Mutex<SharedSink>,
}

impl State {
    pub fn new() -> Arc<Self> {
        Self::with_sink(Config::load(), LogSink)
    }

    pub fn with_sink(config: Config, sink: impl OrderSink + Send + 'static) -> Arc<Self> {
        Arc::new(Self {
            config,
            sink: Mutex::new(Box::new(sink)),
        })
    }

    fn sink(&self) -> Result<MutexGuard<'_, SharedSink>, AppError> {
        self.sink
            .lock()
            .map_err(|_| AppError::InternalError("Order sink lock poisoned".into()))
    }

    /// Sink failures are logged, the order outcome already stands.
    pub fn hand_off(&self, payload: &OrderPayload) -> Result<(), AppError> {
        if let Err(e) = self.sink()?.submit(payload) {
            warn!("Order sink failed: {e}");
        }

        Ok(())
    }
}
