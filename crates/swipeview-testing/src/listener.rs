use std::cell::RefCell;

use swipeview_ui::OnCardSwipedListener;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerEvent {
    Liked,
    Disliked,
    SingleTap,
}

/// Listener that remembers every callback in order.
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: RefCell<Vec<ListenerEvent>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ListenerEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: ListenerEvent) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|recorded| **recorded == event)
            .count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: ListenerEvent) {
        log::debug!("listener received {event:?}");
        self.events.borrow_mut().push(event);
    }
}

impl OnCardSwipedListener for RecordingListener {
    fn on_likes(&self) {
        self.record(ListenerEvent::Liked);
    }

    fn on_dislikes(&self) {
        self.record(ListenerEvent::Disliked);
    }

    fn on_single_tap(&self) {
        self.record(ListenerEvent::SingleTap);
    }
}
