//! A fruit card drawing game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns a shuffled 25-card deck
//! (5 fruits x amounts 1 through 5) and a 3-slot circular draw buffer.
//! Cards are drawn one at a time into the buffer until the deck runs out;
//! a rendering layer reads the buffer and the remaining-card count after
//! each action.
//!
//! # Example
//!
//! ```
//! use fruitdraw::Game;
//!
//! let mut game = Game::new(42);
//! game.draw();
//! assert_eq!(game.cards_remaining(), 24);
//! assert!(game.drawn_cards()[0].is_some());
//!
//! game.reset();
//! assert_eq!(game.cards_remaining(), 25);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;

// Re-export main types
pub use card::{Card, DECK_SIZE, Fruit, MAX_AMOUNT, MIN_AMOUNT};
pub use error::CardError;
pub use game::{DRAW_SLOTS, Game, GameState};
