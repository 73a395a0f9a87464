//! Chance and Community Chest cards.
//!
//! Each card pairs its printed text with a structured [`CardEffect`]; the
//! engine dispatches on the effect, never on the text.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::SpaceKind;
use crate::player::Money;

/// Number of cards in each full deck.
pub const DECK_SIZE: usize = 16;

/// The deck a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckKind {
    /// Chance.
    Chance,
    /// Community Chest.
    CommunityChest,
}

/// What happens when a card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEffect {
    /// Move forward to a fixed position, collecting the salary on a wrap.
    AdvanceTo(u8),
    /// Move forward to the nearest space of a kind. An owned railroad or
    /// utility reached this way charges `rent_multiplier` times its rent;
    /// for utilities the rent is `rent_multiplier` times the roll.
    AdvanceToNearest {
        /// Kind of space to move to.
        kind: SpaceKind,
        /// Rent multiplier applied when the space is owned.
        rent_multiplier: Money,
    },
    /// Move backwards without collecting the salary.
    GoBack(u8),
    /// Go directly to jail.
    GoToJail,
    /// Receive money from the bank.
    Collect(Money),
    /// Pay money to the bank.
    Pay(Money),
    /// Every other player pays the drawer.
    CollectFromEachPlayer(Money),
    /// The drawer pays every other player.
    PayEachPlayer(Money),
    /// Pay per house and per hotel owned.
    Repairs {
        /// Charge per house.
        per_house: Money,
        /// Charge per hotel.
        per_hotel: Money,
    },
    /// Keep until used to leave jail.
    GetOutOfJailFree,
}

/// A card with its printed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// Printed text.
    pub text: &'static str,
    /// Origin deck.
    pub deck: DeckKind,
    /// Effect on the drawer.
    pub effect: CardEffect,
}

impl Card {
    /// Creates a card.
    #[must_use]
    pub const fn new(text: &'static str, deck: DeckKind, effect: CardEffect) -> Self {
        Self { text, deck, effect }
    }
}

const fn chance(text: &'static str, effect: CardEffect) -> Card {
    Card::new(text, DeckKind::Chance, effect)
}

const fn chest(text: &'static str, effect: CardEffect) -> Card {
    Card::new(text, DeckKind::CommunityChest, effect)
}

const NEAREST_RAILROAD: CardEffect = CardEffect::AdvanceToNearest {
    kind: SpaceKind::Railroad,
    rent_multiplier: 2,
};

/// The sixteen Chance cards.
pub const CHANCE_CARDS: [Card; DECK_SIZE] = [
    chance("Advance to Boardwalk.", CardEffect::AdvanceTo(39)),
    chance("Advance to Go (Collect $200).", CardEffect::AdvanceTo(0)),
    chance(
        "Advance to Illinois Avenue. If you pass Go, collect $200.",
        CardEffect::AdvanceTo(24),
    ),
    chance(
        "Advance to St. Charles Place. If you pass Go, collect $200.",
        CardEffect::AdvanceTo(11),
    ),
    chance(
        "Advance to the nearest Railroad. If unowned, you may buy it from the Bank. If owned, pay owner twice the rental to which they are otherwise entitled.",
        NEAREST_RAILROAD,
    ),
    chance(
        "Advance to the nearest Railroad. If unowned, you may buy it from the Bank. If owned, pay owner twice the rental to which they are otherwise entitled.",
        NEAREST_RAILROAD,
    ),
    chance(
        "Advance token to nearest Utility. If unowned, you may buy it from the Bank. If owned, pay owner a total ten times amount thrown.",
        CardEffect::AdvanceToNearest {
            kind: SpaceKind::Utility,
            rent_multiplier: 10,
        },
    ),
    chance("Bank pays you dividend of $50.", CardEffect::Collect(50)),
    chance("Get Out of Jail Free.", CardEffect::GetOutOfJailFree),
    chance("Go Back 3 Spaces.", CardEffect::GoBack(3)),
    chance(
        "Go to Jail. Go directly to Jail, do not pass Go, do not collect $200.",
        CardEffect::GoToJail,
    ),
    chance(
        "Make general repairs on all your property. For each house pay $25. For each hotel pay $100.",
        CardEffect::Repairs {
            per_house: 25,
            per_hotel: 100,
        },
    ),
    chance("Speeding fine $15.", CardEffect::Pay(15)),
    chance(
        "Take a trip to Reading Railroad. If you pass Go, collect $200.",
        CardEffect::AdvanceTo(5),
    ),
    chance(
        "You have been elected Chairman of the Board. Pay each player $50.",
        CardEffect::PayEachPlayer(50),
    ),
    chance(
        "Your building loan matures. Collect $150.",
        CardEffect::Collect(150),
    ),
];

/// The sixteen Community Chest cards.
pub const COMMUNITY_CHEST_CARDS: [Card; DECK_SIZE] = [
    chest("Advance to Go (Collect $200).", CardEffect::AdvanceTo(0)),
    chest(
        "Bank error in your favor. Collect $200.",
        CardEffect::Collect(200),
    ),
    chest("Doctor's fee. Pay $50.", CardEffect::Pay(50)),
    chest("From sale of stock you get $50.", CardEffect::Collect(50)),
    chest("Get Out of Jail Free.", CardEffect::GetOutOfJailFree),
    chest(
        "Go to Jail. Go directly to jail, do not pass Go, do not collect $200.",
        CardEffect::GoToJail,
    ),
    chest("Holiday fund matures. Receive $100.", CardEffect::Collect(100)),
    chest("Income tax refund. Collect $20.", CardEffect::Collect(20)),
    chest(
        "It is your birthday. Collect $10 from every player.",
        CardEffect::CollectFromEachPlayer(10),
    ),
    chest("Life insurance matures. Collect $100.", CardEffect::Collect(100)),
    chest("Pay hospital fees of $100.", CardEffect::Pay(100)),
    chest("Pay school fees of $50.", CardEffect::Pay(50)),
    chest("Receive $25 consultancy fee.", CardEffect::Collect(25)),
    chest(
        "You are assessed for street repair. $40 per house. $115 per hotel.",
        CardEffect::Repairs {
            per_house: 40,
            per_hotel: 115,
        },
    ),
    chest(
        "You have won second prize in a beauty contest. Collect $10.",
        CardEffect::Collect(10),
    ),
    chest("You inherit $100.", CardEffect::Collect(100)),
];

fn catalog(kind: DeckKind) -> &'static [Card; DECK_SIZE] {
    match kind {
        DeckKind::Chance => &CHANCE_CARDS,
        DeckKind::CommunityChest => &COMMUNITY_CHEST_CARDS,
    }
}

/// A cycling deck of cards.
///
/// Drawing takes the top card and returns it to the bottom, so the deck is
/// never exhausted. A drawn Get Out of Jail Free card stays out until
/// [`Deck::put_back`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    kind: DeckKind,
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates the full, unshuffled deck of the given kind.
    #[must_use]
    pub fn new(kind: DeckKind) -> Self {
        Self::from_cards(kind, catalog(kind).to_vec())
    }

    /// Creates a deck with the given cards in draw order.
    #[must_use]
    pub fn from_cards(kind: DeckKind, cards: Vec<Card>) -> Self {
        Self {
            kind,
            cards: cards.into(),
        }
    }

    /// Returns the deck kind.
    #[must_use]
    pub const fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Shuffles the cards currently in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Draws the top card.
    ///
    /// Every card except Get Out of Jail Free goes straight to the bottom.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop_front()?;
        if card.effect != CardEffect::GetOutOfJailFree {
            self.cards.push_back(card);
        }
        Some(card)
    }

    /// Returns a held card to the bottom of the deck.
    pub fn put_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Returns this deck's Get Out of Jail Free card to the bottom.
    pub fn return_jail_card(&mut self) {
        if let Some(card) = catalog(self.kind)
            .iter()
            .find(|card| card.effect == CardEffect::GetOutOfJailFree)
        {
            self.put_back(*card);
        }
    }

    /// Moves `card` to the top so it is drawn next.
    ///
    /// The card is taken out of its current slot first, so the deck keeps
    /// its size when the card is already in it.
    pub fn stack(&mut self, card: Card) {
        if let Some(index) = self.cards.iter().position(|c| *c == card) {
            self.cards.remove(index);
        }
        self.cards.push_front(card);
    }

    /// Returns the cards in draw order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
