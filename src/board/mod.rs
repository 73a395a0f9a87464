//! The fixed 40-space board.

use alloc::vec::Vec;

use crate::player::Money;
use crate::property::{ColorGroup, Property, Railroad, RentTable, Utility};

mod layout;

use layout::{CLASSIC, Descriptor, RAILROAD_PRICE, UTILITY_PRICE};

/// Number of spaces on the board.
pub const BOARD_SIZE: u8 = 40;

/// Position of the jail corner.
pub const JAIL_POSITION: u8 = 10;

/// What a space does when a player lands on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tile {
    /// The starting corner.
    Go,
    /// A street property.
    Property(Property),
    /// A railroad station.
    Railroad(Railroad),
    /// A utility company.
    Utility(Utility),
    /// A flat tax.
    Tax(Money),
    /// Draw a Chance card.
    Chance,
    /// Draw a Community Chest card.
    CommunityChest,
    /// The jail corner (just visiting unless jailed).
    Jail,
    /// The free parking corner.
    FreeParking,
    /// Sends the player to jail.
    GoToJail,
}

/// The type tag of a space, used for lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceKind {
    /// Go.
    Go,
    /// Street property.
    Property,
    /// Railroad.
    Railroad,
    /// Utility.
    Utility,
    /// Tax.
    Tax,
    /// Chance.
    Chance,
    /// Community Chest.
    CommunityChest,
    /// Jail.
    Jail,
    /// Free Parking.
    FreeParking,
    /// Go To Jail.
    GoToJail,
}

impl Tile {
    /// Returns the type tag.
    #[must_use]
    pub const fn kind(&self) -> SpaceKind {
        match self {
            Self::Go => SpaceKind::Go,
            Self::Property(_) => SpaceKind::Property,
            Self::Railroad(_) => SpaceKind::Railroad,
            Self::Utility(_) => SpaceKind::Utility,
            Self::Tax(_) => SpaceKind::Tax,
            Self::Chance => SpaceKind::Chance,
            Self::CommunityChest => SpaceKind::CommunityChest,
            Self::Jail => SpaceKind::Jail,
            Self::FreeParking => SpaceKind::FreeParking,
            Self::GoToJail => SpaceKind::GoToJail,
        }
    }

    /// Returns the purchase price, or `None` if the space cannot be owned.
    #[must_use]
    pub const fn price(&self) -> Option<Money> {
        match self {
            Self::Property(property) => Some(property.price()),
            Self::Railroad(railroad) => Some(railroad.price),
            Self::Utility(utility) => Some(utility.price),
            _ => None,
        }
    }

    /// Returns whether the space is mortgaged. Unownable spaces never are.
    #[must_use]
    pub const fn is_mortgaged(&self) -> bool {
        match self {
            Self::Property(property) => property.is_mortgaged(),
            Self::Railroad(railroad) => railroad.mortgaged,
            Self::Utility(utility) => utility.mortgaged,
            _ => false,
        }
    }

    /// Sets the mortgaged flag on an ownable space. No-op on other spaces.
    pub const fn set_mortgaged(&mut self, mortgaged: bool) {
        match self {
            Self::Property(property) => property.set_mortgaged(mortgaged),
            Self::Railroad(railroad) => railroad.mortgaged = mortgaged,
            Self::Utility(utility) => utility.mortgaged = mortgaged,
            _ => {}
        }
    }
}

/// A space on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space {
    name: &'static str,
    position: u8,
    /// What the space does and its mutable development state.
    pub tile: Tile,
}

impl Space {
    /// Returns the printed name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the fixed board position.
    #[must_use]
    pub const fn position(&self) -> u8 {
        self.position
    }

    /// Returns the type tag.
    #[must_use]
    pub const fn kind(&self) -> SpaceKind {
        self.tile.kind()
    }

    /// Returns whether a player can own this space.
    #[must_use]
    pub const fn is_purchasable(&self) -> bool {
        self.tile.price().is_some()
    }
}

/// The ordered ring of spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    spaces: Vec<Space>,
}

impl Board {
    /// Builds the classic layout with the given tax amounts.
    #[must_use]
    pub fn classic(income_tax: Money, luxury_tax: Money) -> Self {
        let spaces = CLASSIC
            .iter()
            .zip(0..BOARD_SIZE)
            .map(|(&(name, descriptor), position)| {
                let tile = match descriptor {
                    Descriptor::Go => Tile::Go,
                    Descriptor::Street(group, price, rents) => {
                        Tile::Property(Property::new(price, group, RentTable::new(rents)))
                    }
                    Descriptor::Railroad => Tile::Railroad(Railroad {
                        price: RAILROAD_PRICE,
                        mortgaged: false,
                    }),
                    Descriptor::Utility => Tile::Utility(Utility {
                        price: UTILITY_PRICE,
                        mortgaged: false,
                    }),
                    Descriptor::IncomeTax => Tile::Tax(income_tax),
                    Descriptor::LuxuryTax => Tile::Tax(luxury_tax),
                    Descriptor::Chance => Tile::Chance,
                    Descriptor::CommunityChest => Tile::CommunityChest,
                    Descriptor::Jail => Tile::Jail,
                    Descriptor::FreeParking => Tile::FreeParking,
                    Descriptor::GoToJail => Tile::GoToJail,
                };
                Space {
                    name,
                    position,
                    tile,
                }
            })
            .collect();

        Self { spaces }
    }

    /// Returns the space at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not on the board.
    #[must_use]
    pub fn space_at(&self, position: u8) -> &Space {
        assert!(position < BOARD_SIZE, "board position {position} out of range");
        &self.spaces[position as usize]
    }

    /// Returns the space at `position` for mutation.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not on the board.
    pub fn space_at_mut(&mut self, position: u8) -> &mut Space {
        assert!(position < BOARD_SIZE, "board position {position} out of range");
        &mut self.spaces[position as usize]
    }

    /// Returns the street property at `position`, if that space is one.
    #[must_use]
    pub fn property_at(&self, position: u8) -> Option<&Property> {
        match &self.space_at(position).tile {
            Tile::Property(property) => Some(property),
            _ => None,
        }
    }

    /// Returns the street property at `position` for mutation.
    pub fn property_at_mut(&mut self, position: u8) -> Option<&mut Property> {
        match &mut self.space_at_mut(position).tile {
            Tile::Property(property) => Some(property),
            _ => None,
        }
    }

    /// Finds the first space with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Space> {
        self.spaces.iter().find(|space| space.name == name)
    }

    /// Finds the nearest space of `kind` strictly ahead of `from`, wrapping
    /// around the board.
    #[must_use]
    pub fn nearest_of_type(&self, from: u8, kind: SpaceKind) -> Option<&Space> {
        (1..=BOARD_SIZE)
            .map(|step| self.space_at((from % BOARD_SIZE + step) % BOARD_SIZE))
            .find(|space| space.kind() == kind)
    }

    /// Returns the positions of every space of `kind`, in board order.
    #[must_use]
    pub fn positions_of(&self, kind: SpaceKind) -> Vec<u8> {
        self.spaces
            .iter()
            .filter(|space| space.kind() == kind)
            .map(Space::position)
            .collect()
    }

    /// Returns the positions of every property in `group`, in board order.
    #[must_use]
    pub fn group_positions(&self, group: ColorGroup) -> Vec<u8> {
        self.spaces
            .iter()
            .filter(|space| matches!(&space.tile, Tile::Property(p) if p.group() == group))
            .map(Space::position)
            .collect()
    }

    /// Returns the position of the first space of `kind`.
    #[must_use]
    pub fn first_of(&self, kind: SpaceKind) -> Option<u8> {
        self.spaces
            .iter()
            .find(|space| space.kind() == kind)
            .map(Space::position)
    }

    /// Returns every space in board order.
    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }
}
