use std::sync::Mutex;

use tracing::info;

use crate::ticket::CustomerId;

/// Lifecycle transitions the shop reports as they happen. Purely
/// observational; observers must not influence the protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    CustomerArrived { id: CustomerId },
    CustomerAdmitted { id: CustomerId },
    CustomerRejected { id: CustomerId },
    ServiceStarted { id: CustomerId },
    ServiceFinished { id: CustomerId },
    BarberIdle,
}

/// Sink for lifecycle events, invoked inline at each transition.
pub trait EventObserver: Send + Sync {
    fn observe(&self, event: Event);
}

/// Logs every lifecycle event through `tracing`.
pub struct TracingObserver;

impl EventObserver for TracingObserver {
    fn observe(&self, event: Event) {
        match event {
            Event::CustomerArrived { id } => info!("customer {} entered", id),
            Event::CustomerAdmitted { id } => info!("customer {} waiting", id),
            Event::CustomerRejected { id } => info!("customer {} rejected", id),
            Event::ServiceStarted { id } => info!("barber cutting hair for customer {}", id),
            Event::ServiceFinished { id } => info!("barber finished customer {}", id),
            Event::BarberIdle => info!("barber sleeping"),
        }
    }
}

/// Collects events in the order they were observed. Used by tests to check
/// admission and service ordering.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl EventObserver for RecordingObserver {
    fn observe(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}
