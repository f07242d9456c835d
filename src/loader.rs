use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::client::Client;
use crate::error::Error;
use crate::types::AthleteRecord;

pub const ATHLETES_PATH: &str = "/api/athletes";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Failed { message: String },
    Loaded { records: Vec<AthleteRecord> },
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoadState::Pending)
    }
}

/// Token for one activation of a loader. Completions tagged with anything
/// but the current token are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActivationId(u64);

struct InFlight {
    activation: ActivationId,
    task: JoinHandle<Result<Vec<u8>, Error>>,
}

/// Loads the athlete list once per activation.
///
/// `activate` spawns a single retrieval on the tokio runtime, `settle` waits
/// for it and applies the result. `deactivate` (or dropping the loader)
/// aborts a retrieval still in flight and discards the state.
pub struct AthleteListLoader {
    client: Arc<dyn Client>,
    state: LoadState,
    current: Option<ActivationId>,
    in_flight: Option<InFlight>,
    activations: u64,
}

impl AthleteListLoader {
    pub fn new(client: Arc<dyn Client>) -> Self {
        Self {
            client,
            state: LoadState::Pending,
            current: None,
            in_flight: None,
            activations: 0,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Must be called from within a tokio runtime.
    pub fn activate(&mut self) -> ActivationId {
        if let Some(activation) = self.current {
            debug!("{:?} already active, not fetching again", activation);
            return activation;
        }

        self.activations += 1;
        let activation = ActivationId(self.activations);
        self.current = Some(activation);
        self.state = LoadState::Pending;

        let client = Arc::clone(&self.client);
        let task = tokio::spawn(async move { retrieve(client.as_ref()).await });
        self.in_flight = Some(InFlight { activation, task });

        info!("{:?} fetching athletes", activation);
        activation
    }

    pub async fn settle(&mut self) -> &LoadState {
        if let Some(InFlight { activation, task }) = self.in_flight.take() {
            match task.await {
                Ok(Ok(body)) => self.on_retrieval_succeeded(activation, &body),
                Ok(Err(err)) => self.on_retrieval_failed(activation, &err),
                Err(err) => self.on_retrieval_failed(activation, &Error::from(err)),
            }
        }
        &self.state
    }

    pub fn on_retrieval_succeeded(&mut self, activation: ActivationId, raw_payload: &[u8]) {
        match serde_json::from_slice::<Vec<AthleteRecord>>(raw_payload) {
            Ok(records) => {
                if self.transition(activation, LoadState::Loaded { records }) {
                    info!("{:?} loaded athletes", activation);
                }
            }
            Err(err) => self.on_retrieval_failed(activation, &Error::from(err)),
        }
    }

    pub fn on_retrieval_failed(&mut self, activation: ActivationId, error: &Error) {
        let message = error.to_string();
        if self.transition(activation, LoadState::Failed { message }) {
            match error {
                Error::Status { status } => {
                    warn!(status, "{:?} athletes endpoint answered with an error", activation)
                }
                _ => warn!("{:?} failed to load athletes: {}", activation, error),
            }
        }
    }

    pub fn deactivate(&mut self) {
        if !self.is_active() {
            return;
        }
        if let Some(in_flight) = self.in_flight.take() {
            debug!("{:?} aborting retrieval", in_flight.activation);
            in_flight.task.abort();
        }
        self.current = None;
        self.state = LoadState::Pending;
    }

    fn transition(&mut self, activation: ActivationId, next: LoadState) -> bool {
        if self.current != Some(activation) {
            debug!("ignoring completion for stale {:?}", activation);
            return false;
        }
        if self.state.is_terminal() {
            debug!("{:?} already settled, ignoring completion", activation);
            return false;
        }
        self.state = next;
        true
    }
}

impl Drop for AthleteListLoader {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
        }
    }
}

async fn retrieve(client: &dyn Client) -> Result<Vec<u8>, Error> {
    let payload = client.get(ATHLETES_PATH).await?;
    if !payload.is_success() {
        return Err(Error::Status {
            status: payload.status,
        });
    }
    Ok(payload.body)
}
