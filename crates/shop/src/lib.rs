//! Bounded-capacity service rendezvous: one barber, a fixed number of
//! waiting-room chairs, and concurrent customers that are admitted in FIFO
//! order or turned away when every chair is taken.

pub mod barber;
pub mod config;
pub mod customer;
pub mod errors;
pub mod events;
pub mod shop;
pub mod ticket;
pub mod waiting_room;

pub use barber::{BarberHandle, spawn_barber};
pub use config::ShopConfig;
pub use customer::{Outcome, run_customer, spawn_customer};
pub use errors::ShopError;
pub use events::{Event, EventObserver, RecordingObserver, TracingObserver};
pub use shop::Shop;
pub use ticket::{CompletionSignal, CustomerId, Ticket};
pub use waiting_room::{Admission, WaitingRoom};
