use std::fmt;

/// Why a card could not be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStackError {
    /// The stack already holds `capacity` cards.
    CapacityExceeded { capacity: usize },
    /// The requested padding slot does not exist.
    PositionOutOfRange { position: usize, capacity: usize },
}

impl fmt::Display for CardStackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardStackError::CapacityExceeded { capacity } => {
                write!(f, "card stack is full ({capacity} cards)")
            }
            CardStackError::PositionOutOfRange { position, capacity } => {
                write!(
                    f,
                    "card position {position} is out of range (must be below {capacity})"
                )
            }
        }
    }
}

impl std::error::Error for CardStackError {}
