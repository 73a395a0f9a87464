//! Per-player state.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::DeckKind;

/// Amount of money. Signed so a debt can exist until bankruptcy resolves it.
pub type Money = i32;

/// Player identifier assigned on join.
pub type PlayerId = u8;

/// A player at the table.
///
/// Owned properties are not stored here; the game keeps a single
/// position-to-owner index and answers ownership queries from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    /// Cash on hand.
    pub money: Money,
    /// Board position (0-39).
    pub position: u8,
    /// Turns spent in jail during the current stay.
    pub jail_turns: u8,
    /// Get Out of Jail Free cards held, tagged with their origin deck.
    pub jail_cards: Vec<DeckKind>,
}

impl Player {
    /// Creates a player at Go with the given money.
    #[must_use]
    pub const fn new(id: PlayerId, name: String, money: Money) -> Self {
        Self {
            id,
            name,
            money,
            position: 0,
            jail_turns: 0,
            jail_cards: Vec::new(),
        }
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the player can pay `amount` without going negative.
    #[must_use]
    pub const fn can_afford(&self, amount: Money) -> bool {
        self.money >= amount
    }

    /// Returns whether the player holds a Get Out of Jail Free card.
    #[must_use]
    pub fn has_jail_card(&self) -> bool {
        !self.jail_cards.is_empty()
    }
}
