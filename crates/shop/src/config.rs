use std::time::Duration;

/// Configuration the harness passes in. The core parses no flags; these are
/// plain values.
#[derive(Clone, Copy, Debug)]
pub struct ShopConfig {
    /// Waiting-room capacity.
    pub chairs: usize,
    /// How long one haircut takes.
    pub service_duration: Duration,
}

// Simulation defaults. 40 ms of service is too fast to ever fill the chairs
// with these arrival intervals, so the default is 80 ms.
pub const DEFAULT_CUSTOMERS: u32 = 50;
pub const DEFAULT_CHAIRS: usize = 5;
pub const DEFAULT_SERVICE_MS: u64 = 80;
pub const DEFAULT_MIN_INTERVAL_MS: u64 = 10;
pub const DEFAULT_MAX_INTERVAL_MS: u64 = 100;
