//! A Monopoly-style board game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the board, the bank, the card
//! decks, the dice and the players, and plays the game one full turn at a
//! time: rolling, moving, resolving the landing space, jail, doubles and
//! bankruptcy.
//!
//! # Example
//!
//! ```no_run
//! use boardwalk::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.join("Ada").unwrap();
//! game.join("Grace").unwrap();
//! game.initialize_game().unwrap();
//!
//! while game.play_one_turn() {}
//! let _ = game.winner();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bank;
pub mod board;
pub mod card;
pub mod dice;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod player;
pub mod policy;
pub mod property;

// Re-export main types
pub use bank::Bank;
pub use board::{BOARD_SIZE, Board, JAIL_POSITION, Space, SpaceKind, Tile};
pub use card::{Card, CardEffect, Deck, DeckKind};
pub use dice::{Dice, Roll};
pub use error::{BuildError, JailError, JoinError, MortgageError, PurchaseError, StartError};
pub use event::{Event, JailRelease};
pub use game::{Game, GameStatus};
pub use options::GameOptions;
pub use player::{Money, Player, PlayerId};
pub use policy::{DefaultPolicy, Policy};
pub use property::{ColorGroup, Property, RentTable, railroad_rent, utility_rent};
