use std::collections::VecDeque;

use tokio::sync::{Mutex, Notify};

use crate::ticket::{CompletionSignal, CustomerId, Ticket};

/// Outcome of one admission attempt.
#[derive(Debug)]
pub enum Admission {
    /// A chair was free; the customer's ticket is queued and this is the
    /// signal to wait on.
    Admitted(CompletionSignal),
    /// Every chair was taken at the instant of the check.
    Rejected,
}

/// Bounded FIFO of admitted-but-unserved customers. The single source of
/// truth for admission: the capacity check and the enqueue happen under one
/// lock acquisition, so no other caller can observe the queue in between.
pub struct WaitingRoom {
    queue: Mutex<VecDeque<Ticket>>,
    customer_arrived: Notify,
    chairs: usize,
}

impl WaitingRoom {
    pub fn new(chairs: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::with_capacity(chairs)),
            customer_arrived: Notify::new(),
            chairs,
        }
    }

    /// Check capacity and, if a chair is free, queue a ticket for `id`.
    /// Never waits on a condition: the attempt either admits or rejects
    /// immediately.
    pub async fn try_admit(&self, id: CustomerId) -> Admission {
        let mut queue = self.queue.lock().await;
        if queue.len() < self.chairs {
            let (ticket, signal) = Ticket::new(id);
            queue.push_back(ticket);
            debug_assert!(queue.len() <= self.chairs);
            drop(queue);
            self.customer_arrived.notify_one();
            Admission::Admitted(signal)
        } else {
            Admission::Rejected
        }
    }

    /// Remove and return the head ticket, sleeping until one arrives if the
    /// room is empty. The wakeup is registered before the emptiness check so
    /// an enqueue in between is never missed, and the queue is re-checked
    /// after every wakeup. Cancel-safe: there is no await between the pop
    /// and the return, so a dropped call never loses a ticket.
    pub async fn take_next(&self) -> Ticket {
        loop {
            let arrived = self.customer_arrived.notified();
            if let Some(ticket) = self.queue.lock().await.pop_front() {
                return ticket;
            }
            arrived.await;
        }
    }

    pub async fn len(&self) -> usize {
        self.queue.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.queue.lock().await.is_empty()
    }

    /// Capacity this room was built with.
    pub fn chairs(&self) -> usize {
        self.chairs
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn admits_until_chairs_are_full() {
        // two chairs, three sequential arrivals, nobody being served
        let room = WaitingRoom::new(2);
        assert!(matches!(room.try_admit(1).await, Admission::Admitted(_)));
        assert!(matches!(room.try_admit(2).await, Admission::Admitted(_)));
        assert!(matches!(room.try_admit(3).await, Admission::Rejected));
        assert_eq!(room.len().await, 2);
    }

    #[tokio::test]
    async fn rejection_does_not_disturb_the_queue() {
        let room = WaitingRoom::new(1);
        let _first = room.try_admit(1).await;
        let _ = room.try_admit(2).await;
        assert_eq!(room.take_next().await.id, 1);
        assert!(room.is_empty().await);
    }

    #[tokio::test]
    async fn tickets_come_out_in_admission_order() {
        let room = WaitingRoom::new(5);
        for id in 0..5 {
            assert!(matches!(room.try_admit(id).await, Admission::Admitted(_)));
        }
        for expected in 0..5 {
            assert_eq!(room.take_next().await.id, expected);
        }
    }

    #[tokio::test]
    async fn take_next_waits_for_an_arrival() {
        let room = Arc::new(WaitingRoom::new(1));
        let waiter = {
            let room = room.clone();
            tokio::spawn(async move { room.take_next().await.id })
        };

        // let the waiter park on the empty queue first
        tokio::task::yield_now().await;
        assert!(!waiter.is_finished());

        assert!(matches!(room.try_admit(7).await, Admission::Admitted(_)));
        assert_eq!(waiter.await.unwrap(), 7);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn one_chair_many_simultaneous_arrivals() {
        let room = Arc::new(WaitingRoom::new(1));

        let attempts: Vec<_> = (0..64)
            .map(|id| {
                let room = room.clone();
                tokio::spawn(async move { matches!(room.try_admit(id).await, Admission::Admitted(_)) })
            })
            .collect();

        let mut admitted = 0;
        for attempt in attempts {
            if attempt.await.unwrap() {
                admitted += 1;
            }
        }

        assert_eq!(admitted, 1);
        assert_eq!(room.len().await, 1);
    }
}
