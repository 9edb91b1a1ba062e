//! Single-tap recogniser.
//!
//! A tap is a press released without crossing the drag slop. It only counts
//! as a *single* tap once the double-tap timeout passes without another
//! press; the owner schedules that confirmation and calls [`TapGesture::confirm`].

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
enum TapState {
    #[default]
    Idle,
    Pressed,
    /// Second press of a double tap; its release is not a single tap.
    PressedAfterTap,
    AwaitingConfirmation,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapGesture {
    state: TapState,
}

impl TapGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the press lands while an earlier tap is still
    /// waiting for confirmation, i.e. the pair forms a double tap.
    pub fn press(&mut self) -> bool {
        let double_tap = self.state == TapState::AwaitingConfirmation;
        self.state = if double_tap {
            TapState::PressedAfterTap
        } else {
            TapState::Pressed
        };
        double_tap
    }

    /// The pointer crossed the drag slop; this press can no longer be a tap.
    pub fn drag_started(&mut self) {
        if matches!(self.state, TapState::Pressed | TapState::PressedAfterTap) {
            self.state = TapState::Idle;
        }
    }

    /// Returns `true` when the release completes a tap that now needs
    /// confirmation.
    pub fn release(&mut self) -> bool {
        match self.state {
            TapState::Pressed => {
                self.state = TapState::AwaitingConfirmation;
                true
            }
            TapState::PressedAfterTap => {
                self.state = TapState::Idle;
                false
            }
            TapState::Idle | TapState::AwaitingConfirmation => false,
        }
    }

    /// Confirms the pending tap; returns `false` if it was cancelled meanwhile.
    pub fn confirm(&mut self) -> bool {
        let pending = self.state == TapState::AwaitingConfirmation;
        if pending {
            self.state = TapState::Idle;
        }
        pending
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.state == TapState::AwaitingConfirmation
    }

    pub fn reset(&mut self) {
        self.state = TapState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_awaits_confirmation() {
        let mut tap = TapGesture::new();
        assert!(!tap.press());
        assert!(tap.release());
        assert!(tap.is_awaiting_confirmation());
        assert!(tap.confirm());
        assert!(!tap.confirm());
    }

    #[test]
    fn drag_cancels_tap() {
        let mut tap = TapGesture::new();
        tap.press();
        tap.drag_started();
        assert!(!tap.release());
        assert!(!tap.confirm());
    }

    #[test]
    fn second_press_turns_pending_tap_into_double_tap() {
        let mut tap = TapGesture::new();
        tap.press();
        tap.release();
        assert!(tap.press());
        assert!(!tap.release());
        assert!(!tap.confirm());
    }
}
