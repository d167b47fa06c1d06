use tokio::task::JoinHandle;

use crate::{
    errors::ShopError,
    events::Event,
    shop::Shop,
    ticket::CustomerId,
    waiting_room::Admission,
};

/// Terminal outcome of one customer's visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Served,
    TurnedAway,
}

/// Run one customer to completion: arrive, try for a chair, then either wait
/// for service or leave on the spot. A turned-away customer makes exactly
/// one attempt and never touches a completion signal.
pub async fn run_customer(shop: Shop, id: CustomerId) -> Result<Outcome, ShopError> {
    shop.record(Event::CustomerArrived { id });
    match shop.room().try_admit(id).await {
        Admission::Admitted(signal) => {
            shop.record(Event::CustomerAdmitted { id });
            signal.wait().await?;
            Ok(Outcome::Served)
        }
        Admission::Rejected => {
            shop.count_rejected();
            shop.record(Event::CustomerRejected { id });
            Ok(Outcome::TurnedAway)
        }
    }
}

/// Spawn one customer as its own task.
pub fn spawn_customer(shop: Shop, id: CustomerId) -> JoinHandle<Result<Outcome, ShopError>> {
    tokio::spawn(run_customer(shop, id))
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use super::*;
    use crate::{config::ShopConfig, events::RecordingObserver};

    #[tokio::test]
    async fn turned_away_customer_leaves_immediately() {
        let observer = Arc::new(RecordingObserver::default());
        // zero chairs: every attempt is rejected
        let shop = Shop::new(
            ShopConfig {
                chairs: 0,
                service_duration: Duration::from_millis(80),
            },
            observer.clone(),
        );

        let outcome = run_customer(shop.clone(), 9).await.unwrap();

        assert_eq!(outcome, Outcome::TurnedAway);
        assert_eq!(shop.rejected(), 1);
        assert_eq!(shop.served(), 0);
        assert_eq!(
            observer.events(),
            vec![
                Event::CustomerArrived { id: 9 },
                Event::CustomerRejected { id: 9 },
            ]
        );
    }
}
