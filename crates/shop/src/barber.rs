use tokio::{sync::oneshot, task::JoinHandle};
use tracing::info;

use crate::{events::Event, shop::Shop};

/// Handle to a running barber task: the join handle plus the cooperative
/// shutdown trigger.
pub struct BarberHandle {
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl BarberHandle {
    /// Ask the barber to stop and wait for the task to finish. The signal is
    /// observed between services, never during one, so this is safe once all
    /// customers have completed (the barber is guaranteed idle by then).
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        let _ = self.shutdown_tx.send(());
        self.task.await
    }
}

/// Start the barber loop. The barber sleeps while the waiting room is empty,
/// then repeatedly takes the head ticket, performs the haircut with no lock
/// held (so admission attempts keep running concurrently), and fires that
/// ticket's completion signal.
pub fn spawn_barber(shop: Shop) -> BarberHandle {
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
    let task = tokio::spawn(async move {
        let service_duration = shop.config().service_duration;
        loop {
            if shop.room().is_empty().await {
                shop.record(Event::BarberIdle);
            }

            let ticket = tokio::select! {
                ticket = shop.room().take_next() => ticket,
                _ = &mut shutdown_rx => {
                    info!("barber going home");
                    break;
                }
            };

            shop.record(Event::ServiceStarted { id: ticket.id });
            tokio::time::sleep(service_duration).await;
            shop.count_served();
            shop.record(Event::ServiceFinished { id: ticket.id });
            ticket.fire();
        }
    });
    BarberHandle { shutdown_tx, task }
}
