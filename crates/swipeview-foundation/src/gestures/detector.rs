//! Combines drag and tap recognition for a single pointer.

use smallvec::SmallVec;
use swipeview_ui_graphics::Point;

use super::{DragGesture, TapGesture};
use crate::types::{PointerEvent, PointerEventKind, PointerId};

/// High level gesture callbacks produced from raw pointer samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A pointer went down. `double_tap` is set when the press cancelled a
    /// tap that was still waiting for confirmation.
    Press { position: Point, double_tap: bool },
    /// The pointer moved past the slop; `delta` is relative to the previous
    /// drag sample.
    Drag { delta: Point },
    /// The pointer was lifted. `tap` is set when the press qualifies as a tap
    /// and needs a delayed confirmation.
    Release { position: Point, tap: bool },
    /// The host aborted the gesture.
    Cancel,
}

pub type GestureEvents = SmallVec<[GestureEvent; 2]>;

/// Stateful single-pointer recogniser.
#[derive(Debug, Clone)]
pub struct GestureDetector {
    drag: DragGesture,
    tap: TapGesture,
    pointer: Option<PointerId>,
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new(crate::gesture_constants::DRAG_THRESHOLD)
    }
}

impl GestureDetector {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            drag: DragGesture::new(touch_slop),
            tap: TapGesture::new(),
            pointer: None,
        }
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> GestureEvents {
        let mut events = GestureEvents::new();
        match event.kind {
            PointerEventKind::Down => {
                if matches!(self.pointer, Some(active) if active != event.id) {
                    log::trace!("ignoring secondary pointer {}", event.id);
                    return events;
                }
                self.pointer = Some(event.id);
                self.drag.press(event.position);
                let double_tap = self.tap.press();
                events.push(GestureEvent::Press {
                    position: event.position,
                    double_tap,
                });
            }
            PointerEventKind::Move => {
                if !self.tracks(event.id) {
                    return events;
                }
                let was_dragging = self.drag.is_dragging();
                if let Some(delta) = self.drag.motion(event.position) {
                    if !was_dragging {
                        self.tap.drag_started();
                    }
                    events.push(GestureEvent::Drag { delta });
                }
            }
            PointerEventKind::Up => {
                if !self.tracks(event.id) {
                    return events;
                }
                let tap = self.tap.release();
                self.release_pointer();
                events.push(GestureEvent::Release {
                    position: event.position,
                    tap,
                });
            }
            PointerEventKind::Cancel => {
                if !self.tracks(event.id) {
                    return events;
                }
                self.tap.reset();
                self.release_pointer();
                events.push(GestureEvent::Cancel);
            }
        }
        events
    }

    /// Confirms the pending single tap; `false` if a later press cancelled it.
    pub fn confirm_tap(&mut self) -> bool {
        self.tap.confirm()
    }

    pub fn is_tracking(&self) -> bool {
        self.pointer.is_some()
    }

    /// Forgets the pointer currently tracked, e.g. when the owner takes over
    /// the gesture programmatically. A pending tap confirmation survives.
    pub fn abandon_pointer(&mut self) {
        if self.drag.is_pressed() {
            self.tap.drag_started();
        }
        self.release_pointer();
    }

    pub fn reset(&mut self) {
        self.tap.reset();
        self.release_pointer();
    }

    fn tracks(&self, id: PointerId) -> bool {
        self.pointer == Some(id) && self.drag.is_pressed()
    }

    fn release_pointer(&mut self) {
        self.drag.reset();
        self.pointer = None;
    }
}
