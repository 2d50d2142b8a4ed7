// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// A generic, thread-safe, unbounded event channel.
///
/// Producers may publish from any thread; the owner of the presentation
/// context drains the receiver on its own schedule.
#[derive(Debug)]
pub struct EventBus<T: Send + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Send + 'static> EventBus<T> {
    /// Creates a new EventBus with an unbounded channel.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::debug!("EventBus initialized.");
        Self { sender, receiver }
    }

    /// Sends an event, logging an error if every receiver is gone.
    ///
    /// ## Arguments
    /// * `event` - The event to be sent over the channel.
    pub fn publish(&self, event: T) {
        log::trace!("Publishing an event.");

        if let Err(e) = self.sender.send(event) {
            log::error!("Failed to send event: {e}. Receiver likely disconnected.");
        }
    }

    /// Returns a clone of the sender end of the channel.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Returns a reference to the receiver end of the channel.
    pub fn receiver(&self) -> &flume::Receiver<T> {
        &self.receiver
    }

    /// Takes every event currently queued, in publication order.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }
}

impl<T: Send + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::IndicatorRequest;
    use flume::TryRecvError;
    use std::{thread, time::Duration};

    #[test]
    fn event_bus_starts_empty() {
        let bus = EventBus::<IndicatorRequest>::new();
        assert!(bus.receiver().is_empty());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn drain_preserves_publication_order() {
        let bus = EventBus::new();
        bus.publish(IndicatorRequest::searching());
        bus.publish(IndicatorRequest::Hide);

        assert_eq!(
            bus.drain(),
            vec![IndicatorRequest::searching(), IndicatorRequest::Hide]
        );
        assert_eq!(bus.receiver().try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn publish_from_worker_thread() {
        let bus = EventBus::new();
        let sender = bus.sender();

        let handle = thread::spawn(move || {
            sender
                .send(IndicatorRequest::Hide)
                .expect("Send from thread failed");
        });

        let received = bus
            .receiver()
            .recv_timeout(Duration::from_secs(1))
            .expect("Event from worker thread should arrive");
        assert_eq!(received, IndicatorRequest::Hide);
        handle.join().expect("Thread join failed");
    }

    #[test]
    fn publish_after_receiver_drop_does_not_panic() {
        let (sender, receiver) = flume::unbounded::<IndicatorRequest>();
        drop(receiver);
        let bus = EventBus {
            sender,
            receiver: flume::unbounded().1,
        };
        bus.publish(IndicatorRequest::Hide);
    }
}
