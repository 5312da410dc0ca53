//! Card types and deck utilities.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::CardError;

/// Fruit category of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fruit {
    /// Apple.
    Apple,
    /// Banana.
    Banana,
    /// Grape.
    Grape,
    /// Orange.
    Orange,
    /// Strawberry.
    Strawberry,
}

impl Fruit {
    /// All fruits in declared order. Deck construction enumerates fruits in
    /// this order.
    pub const ALL: [Self; 5] = [
        Self::Apple,
        Self::Banana,
        Self::Grape,
        Self::Orange,
        Self::Strawberry,
    ];

    /// Returns the display asset path for this fruit.
    ///
    /// Every variant maps to an asset, so a rendering layer never has to
    /// handle a missing image.
    #[must_use]
    pub const fn image_asset(self) -> &'static str {
        match self {
            Self::Apple => "images/apple.png",
            Self::Banana => "images/banana.png",
            Self::Grape => "images/grape.png",
            Self::Orange => "images/orange.png",
            Self::Strawberry => "images/strawberry.png",
        }
    }
}

/// Minimum card amount.
pub const MIN_AMOUNT: u8 = 1;
/// Maximum card amount.
pub const MAX_AMOUNT: u8 = 5;
/// Number of cards in a full deck (one per fruit and amount combination).
pub const DECK_SIZE: usize = Fruit::ALL.len() * MAX_AMOUNT as usize;

/// A playing card: a fruit category and an amount.
///
/// Cards are immutable once constructed; [`Card::new`] rejects amounts
/// outside `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The fruit category of the card.
    fruit: Fruit,
    /// The amount on the card (1 through 5).
    amount: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidAmount`] if `amount` is outside `1..=5`.
    pub const fn new(fruit: Fruit, amount: u8) -> Result<Self, CardError> {
        match amount {
            MIN_AMOUNT..=MAX_AMOUNT => Ok(Self { fruit, amount }),
            _ => Err(CardError::InvalidAmount),
        }
    }

    /// Returns the fruit category of the card.
    #[must_use]
    pub const fn fruit(self) -> Fruit {
        self.fruit
    }

    /// Returns the amount on the card.
    #[must_use]
    pub const fn amount(self) -> u8 {
        self.amount
    }

    /// Builds the full ordered deck: one card per (fruit, amount) pair,
    /// fruits in declared order, amounts ascending 1 through 5 within each
    /// fruit.
    #[must_use]
    pub fn build_deck() -> Vec<Self> {
        let mut deck = Vec::with_capacity(DECK_SIZE);

        for fruit in Fruit::ALL {
            for amount in MIN_AMOUNT..=MAX_AMOUNT {
                // Amounts are in range by construction.
                deck.push(Self { fruit, amount });
            }
        }

        deck
    }

    /// Shuffles a deck into a uniformly random order (Fisher-Yates) and
    /// returns it, for chaining with [`Card::build_deck`].
    ///
    /// Only the order changes; length and contents are preserved.
    #[must_use]
    pub fn shuffle_deck<R: Rng + ?Sized>(mut deck: Vec<Self>, rng: &mut R) -> Vec<Self> {
        deck.shuffle(rng);
        deck
    }
}
