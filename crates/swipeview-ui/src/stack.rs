//! Bounded card stack with depth-based padding.
//!
//! Slots are stored back to front: index 0 is drawn first, the last slot is
//! the focused card.

use smallvec::SmallVec;
use swipeview_ui_graphics::{IntEdgeInsets, IntOffset};

use crate::card::Card;
use crate::config::MAX_ELEMENTS;
use crate::error::CardStackError;
use crate::padding::PaddingTable;

/// Padding container around one card, plus the card's scroll displacement.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSlot<C> {
    card: Card<C>,
    padding: IntEdgeInsets,
    offset: IntOffset,
}

impl<C> CardSlot<C> {
    fn new(card: Card<C>, padding: IntEdgeInsets) -> Self {
        Self {
            card,
            padding,
            offset: IntOffset::ZERO,
        }
    }

    pub fn card(&self) -> &Card<C> {
        &self.card
    }

    pub fn padding(&self) -> IntEdgeInsets {
        self.padding
    }

    /// Displacement from the rest position; positive x moves right.
    pub fn offset(&self) -> IntOffset {
        self.offset
    }

    pub(crate) fn card_mut(&mut self) -> &mut Card<C> {
        &mut self.card
    }

    pub(crate) fn scroll_by(&mut self, delta: IntOffset) {
        self.offset += delta;
    }

    pub(crate) fn scroll_to(&mut self, offset: IntOffset) {
        self.offset = offset;
    }
}

#[derive(Debug, Clone)]
pub struct CardStack<C> {
    slots: SmallVec<[CardSlot<C>; MAX_ELEMENTS]>,
    padding: PaddingTable,
}

impl<C> CardStack<C> {
    pub fn new(padding: PaddingTable) -> Self {
        Self {
            slots: SmallVec::new(),
            padding,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= MAX_ELEMENTS
    }

    pub fn padding_table(&self) -> &PaddingTable {
        &self.padding
    }

    /// Puts `card` behind every other card and realigns the stack.
    /// `position` is only validated against the padding table.
    pub fn insert_back(&mut self, card: Card<C>, position: usize) -> Result<(), CardStackError> {
        if position >= MAX_ELEMENTS {
            return Err(CardStackError::PositionOutOfRange {
                position,
                capacity: MAX_ELEMENTS,
            });
        }
        if self.is_full() {
            return Err(CardStackError::CapacityExceeded {
                capacity: MAX_ELEMENTS,
            });
        }
        self.slots.insert(0, CardSlot::new(card, IntEdgeInsets::ZERO));
        self.align_padding();
        Ok(())
    }

    pub fn focused(&self) -> Option<&CardSlot<C>> {
        self.slots.last()
    }

    pub(crate) fn focused_mut(&mut self) -> Option<&mut CardSlot<C>> {
        self.slots.last_mut()
    }

    /// Detaches the focused card and realigns the rest.
    pub fn remove_focused(&mut self) -> Option<Card<C>> {
        let removed = self.slots.pop().map(|slot| slot.card);
        self.align_padding();
        removed
    }

    /// Slot at `depth`, counted from the front.
    pub fn at_depth(&self, depth: usize) -> Option<&CardSlot<C>> {
        let index = self.slots.len().checked_sub(depth + 1)?;
        self.slots.get(index)
    }

    /// Iterates from the focused card to the back.
    pub fn iter_front_to_back(&self) -> impl Iterator<Item = &CardSlot<C>> {
        self.slots.iter().rev()
    }

    /// Recomputes every slot's padding from its depth.
    pub fn align_padding(&mut self) {
        let table = self.padding;
        for (depth, slot) in self.slots.iter_mut().rev().enumerate() {
            slot.padding = table.for_depth(depth);
        }
    }

    /// Drops the focused card's vertical padding while it is dragged.
    pub(crate) fn lift_focused(&mut self) {
        let lifted = self.padding.lifted();
        if let Some(slot) = self.slots.last_mut() {
            slot.padding = lifted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(count: usize) -> CardStack<usize> {
        let mut stack = CardStack::new(PaddingTable::new(1.0));
        for index in 0..count {
            stack.insert_back(Card::new(index), index).expect("room for card");
        }
        stack
    }

    #[test]
    fn first_inserted_card_is_focused() {
        let stack = stack_of(3);
        assert_eq!(stack.focused().map(|slot| *slot.card().content()), Some(0));
        assert_eq!(stack.at_depth(2).map(|slot| *slot.card().content()), Some(2));
        assert!(stack.at_depth(3).is_none());
    }

    #[test]
    fn insert_rejects_overflow_and_bad_positions() {
        let mut stack = stack_of(3);
        assert_eq!(
            stack.insert_back(Card::new(9), 0),
            Err(CardStackError::CapacityExceeded { capacity: 3 })
        );
        let mut stack = stack_of(1);
        assert_eq!(
            stack.insert_back(Card::new(9), 3),
            Err(CardStackError::PositionOutOfRange {
                position: 3,
                capacity: 3
            })
        );
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn insert_position_does_not_pick_the_padding() {
        let mut stack = stack_of(1);
        stack.insert_back(Card::new(7), 2).expect("room for card");
        let table = *stack.padding_table();
        assert_eq!(stack.at_depth(1).map(CardSlot::padding), Some(table.for_depth(1)));
        assert_eq!(stack.focused().map(CardSlot::padding), Some(table.for_depth(0)));
    }

    #[test]
    fn padding_follows_depth_after_mutations() {
        let mut stack = stack_of(3);
        let table = *stack.padding_table();
        for (depth, slot) in stack.iter_front_to_back().enumerate() {
            assert_eq!(slot.padding(), table.for_depth(depth));
        }

        assert_eq!(stack.remove_focused().map(Card::into_content), Some(0));
        assert_eq!(stack.len(), 2);
        for (depth, slot) in stack.iter_front_to_back().enumerate() {
            assert_eq!(slot.padding(), table.for_depth(depth));
        }
    }

    #[test]
    fn lifting_only_touches_focused_card() {
        let mut stack = stack_of(2);
        stack.lift_focused();
        assert_eq!(stack.focused().map(CardSlot::padding), Some(IntEdgeInsets::ZERO));
        assert_eq!(
            stack.at_depth(1).map(CardSlot::padding),
            Some(stack.padding_table().for_depth(1))
        );
        stack.align_padding();
        assert_eq!(
            stack.focused().map(CardSlot::padding),
            Some(stack.padding_table().for_depth(0))
        );
    }
}
