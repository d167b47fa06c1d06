use thiserror::Error;

/// Errors that can occur in the shop.
#[derive(Error, Debug)]
pub enum ShopError {
    /// The completion signal's sending half was dropped before it fired,
    /// meaning the barber stopped with an admitted customer still waiting.
    /// The drain-before-shutdown order rules this out; hitting it means the
    /// harness cancelled the barber too early.
    #[error("barber abandoned an admitted customer before finishing service")]
    ServiceAbandoned,
}
