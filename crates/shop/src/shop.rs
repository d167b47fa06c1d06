use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::{
    config::ShopConfig,
    events::{Event, EventObserver},
    waiting_room::WaitingRoom,
};

/// Shared handle to one barbershop: the waiting room, the run counters and
/// the event observer. Clones all point at the same shop.
#[derive(Clone)]
pub struct Shop {
    config: ShopConfig,
    room: Arc<WaitingRoom>,
    served: Arc<AtomicUsize>,
    rejected: Arc<AtomicUsize>,
    observer: Arc<dyn EventObserver>,
}

impl Shop {
    pub fn new(config: ShopConfig, observer: Arc<dyn EventObserver>) -> Self {
        Self {
            config,
            room: Arc::new(WaitingRoom::new(config.chairs)),
            served: Arc::new(AtomicUsize::new(0)),
            rejected: Arc::new(AtomicUsize::new(0)),
            observer,
        }
    }

    pub fn config(&self) -> ShopConfig {
        self.config
    }

    pub fn room(&self) -> &WaitingRoom {
        &self.room
    }

    pub(crate) fn record(&self, event: Event) {
        self.observer.observe(event);
    }

    pub(crate) fn count_served(&self) {
        self.served.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn count_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::SeqCst);
    }

    /// Customers whose service finished. Meant to be read after every task
    /// has been joined.
    pub fn served(&self) -> usize {
        self.served.load(Ordering::SeqCst)
    }

    /// Customers turned away at the door.
    pub fn rejected(&self) -> usize {
        self.rejected.load(Ordering::SeqCst)
    }
}
