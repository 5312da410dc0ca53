//! Game state types.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;

/// Number of slots in the draw buffer.
pub const DRAW_SLOTS: usize = 3;

/// The state of a single game: a shuffled deck, the draw buffer holding the
/// most recently drawn cards, and the cursor naming the buffer slot the next
/// draw lands in.
///
/// The state is passive data apart from [`GameState::draw`]; a rendering
/// layer observes it through the read-only accessors after each mutation.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Undrawn cards. Draws pop from the tail.
    deck: Vec<Card>,
    /// Circular buffer of the most recently drawn cards.
    drawn: [Option<Card>; DRAW_SLOTS],
    /// Index of the buffer slot the next drawn card is written to.
    next_slot: usize,
}

impl GameState {
    /// Creates a fresh state: a newly built and shuffled deck, an empty
    /// draw buffer, and the cursor at slot 0.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            deck: Card::shuffle_deck(Card::build_deck(), rng),
            drawn: [None; DRAW_SLOTS],
            next_slot: 0,
        }
    }

    /// Draws one card from the top of the deck into the cursor's buffer
    /// slot, discarding whatever the slot previously held, then advances
    /// the cursor by one, wrapping around.
    ///
    /// Drawing from an empty deck is a no-op: no state change, no cursor
    /// advance. Exhaustion is an expected terminal condition, not a fault.
    pub fn draw(&mut self) {
        if let Some(card) = self.deck.pop() {
            self.drawn[self.next_slot] = Some(card);
            self.next_slot = (self.next_slot + 1) % DRAW_SLOTS;
        }
    }

    /// Returns the number of undrawn cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty()
    }

    /// Returns the undrawn cards, bottom first. The last element is the
    /// next card to be drawn.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the draw buffer. Each slot is either empty or holds the card
    /// most recently drawn into it.
    #[must_use]
    pub const fn drawn_cards(&self) -> &[Option<Card>; DRAW_SLOTS] {
        &self.drawn
    }

    /// Returns the index of the buffer slot the next draw overwrites.
    #[must_use]
    pub const fn next_slot(&self) -> usize {
        self.next_slot
    }
}
