use super::{EventKind, TestEvent};
use std::collections::BTreeMap;
use tracing::trace;

/// Something that reacts to test lifecycle events.
///
/// Events are delivered one at a time, in the order the host emits them,
/// on the host's own thread.
pub trait Subscriber {
    fn subscribed_events(&self) -> &'static [EventKind];

    fn on_event(&mut self, event: &TestEvent);
}

#[derive(Default)]
pub struct EventDispatcher {
    subscribers: Vec<Box<dyn Subscriber>>,
    routes: BTreeMap<EventKind, Vec<usize>>,
}

impl EventDispatcher {
    pub fn register(&mut self, subscriber: Box<dyn Subscriber>) {
        let index = self.subscribers.len();
        for kind in subscriber.subscribed_events() {
            let route = self.routes.entry(*kind).or_default();
            if !route.contains(&index) {
                route.push(index);
            }
        }
        self.subscribers.push(subscriber);
    }

    pub fn dispatch(&mut self, event: &TestEvent) {
        let kind = event.kind();
        let Some(route) = self.routes.get(&kind) else {
            trace!("No subscriber for {}", kind);
            return;
        };

        for index in route {
            self.subscribers[*index].on_event(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
