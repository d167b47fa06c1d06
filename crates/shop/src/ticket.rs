use tokio::sync::oneshot;

use crate::errors::ShopError;

/// Identifier the harness assigns to each customer. Used for tracing and
/// ordering checks only; it has no effect on the protocol.
pub type CustomerId = u32;

/// One admitted customer's place in line, carrying the sending half of that
/// customer's completion signal. Created at the moment of admission, held by
/// the waiting room while queued, then moved to the barber, and consumed by
/// firing the signal.
#[derive(Debug)]
pub struct Ticket {
    pub id: CustomerId,
    done_tx: oneshot::Sender<()>,
}

impl Ticket {
    /// Create a ticket together with the signal its owning customer waits on.
    pub(crate) fn new(id: CustomerId) -> (Ticket, CompletionSignal) {
        let (done_tx, done_rx) = oneshot::channel();
        (Ticket { id, done_tx }, CompletionSignal { done_rx })
    }

    /// Tell the owning customer its service is done. Consumes the ticket, so
    /// a ticket cannot fire twice.
    pub fn fire(self) {
        // Fails only if the customer task was aborted externally; there is
        // nobody left to wake in that case.
        let _ = self.done_tx.send(());
    }
}

/// Receiving half of one ticket's one-shot completion rendezvous. Owned by
/// exactly one customer and never shared, so a firing barber can only ever
/// wake the customer it just served.
#[derive(Debug)]
pub struct CompletionSignal {
    done_rx: oneshot::Receiver<()>,
}

impl CompletionSignal {
    /// Wait until the barber fires the matching ticket. Returns immediately
    /// if the service already finished before the customer started waiting.
    pub async fn wait(self) -> Result<(), ShopError> {
        self.done_rx.await.map_err(|_| ShopError::ServiceAbandoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn wait_after_fire_returns_immediately() {
        let (ticket, signal) = Ticket::new(1);
        ticket.fire();
        signal.wait().await.unwrap();
    }

    #[tokio::test]
    async fn wait_blocks_until_fire() {
        let (ticket, signal) = Ticket::new(2);
        let waiter = tokio::spawn(signal.wait());

        // give the waiter a chance to park before firing
        tokio::task::yield_now().await;
        assert!(!waiter.is_finished());

        ticket.fire();
        assert!(waiter.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn dropped_ticket_surfaces_as_abandonment() {
        let (ticket, signal) = Ticket::new(3);
        drop(ticket);
        assert!(matches!(signal.wait().await, Err(ShopError::ServiceAbandoned)));
    }
}
