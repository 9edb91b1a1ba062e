//! Release-time choice between committing and cancelling a swipe.

/// Terminal animation chosen for a released gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeMode {
    /// Move the card off the stack and report the outcome.
    Out,
    /// Return the card to its rest position.
    Back,
}

/// Commits the swipe once less than half the card width is left to travel.
pub fn decide(card_width: i32, total_scrolled_x: i32) -> SwipeMode {
    let remaining = card_width - total_scrolled_x;
    if remaining < card_width / 2 {
        SwipeMode::Out
    } else {
        SwipeMode::Back
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_half_the_card_width() {
        assert_eq!(decide(300, 151), SwipeMode::Out);
        assert_eq!(decide(300, 150), SwipeMode::Back);
        assert_eq!(decide(300, 120), SwipeMode::Back);
        assert_eq!(decide(300, 0), SwipeMode::Back);
        assert_eq!(decide(300, 420), SwipeMode::Out);
    }

    #[test]
    fn odd_widths_use_integer_half() {
        // half of 301 is 150, so 150 px left to travel still springs back
        assert_eq!(decide(301, 151), SwipeMode::Back);
        assert_eq!(decide(301, 152), SwipeMode::Out);
    }

    #[test]
    fn property_matches_remaining_distance_rule() {
        for width in [1, 2, 99, 100, 360, 1080] {
            for dragged in 0..=(width * 2) {
                let expected = width - dragged < width / 2;
                assert_eq!(decide(width, dragged) == SwipeMode::Out, expected);
            }
        }
    }
}
