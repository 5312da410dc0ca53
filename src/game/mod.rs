//! Game controller and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

pub mod state;

pub use state::{DRAW_SLOTS, GameState};

/// A fruit card drawing game.
///
/// The controller owns the active [`GameState`] and the random number
/// generator, and exposes the two externally triggerable actions:
/// [`Game::draw`] and [`Game::reset`]. It is owned exclusively by the
/// caller; all mutation goes through `&mut self`.
#[derive(Debug, Clone)]
pub struct Game {
    /// The active game state.
    state: GameState,
    /// Random number generator, used only to shuffle decks.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The deck is built and shuffled, the draw buffer starts empty, and
    /// the cursor starts at slot 0.
    ///
    /// # Example
    ///
    /// ```
    /// use fruitdraw::{DECK_SIZE, Game};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GameState::new(&mut rng);

        Self { state, rng }
    }

    /// Draws one card into the next draw-buffer slot.
    ///
    /// A no-op once the deck is exhausted.
    pub fn draw(&mut self) {
        self.state.draw();
    }

    /// Discards the current state and starts over with a freshly shuffled
    /// deck, an empty draw buffer, and the cursor at slot 0.
    pub fn reset(&mut self) {
        self.state = GameState::new(&mut self.rng);
    }

    /// Returns the number of undrawn cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.state.cards_remaining()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }

    /// Returns the draw buffer.
    #[must_use]
    pub const fn drawn_cards(&self) -> &[Option<Card>; DRAW_SLOTS] {
        self.state.drawn_cards()
    }

    /// Returns the index of the buffer slot the next draw overwrites.
    #[must_use]
    pub const fn next_slot(&self) -> usize {
        self.state.next_slot()
    }

    /// Returns the active game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }
}
