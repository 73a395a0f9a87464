//! Purchasable spaces and their rent rules.
//!
//! Rent is always computed from the board as it stands at the moment of
//! landing. Nothing here caches ownership.

use crate::player::Money;

/// Houses a property can hold before converting to a hotel.
pub const MAX_HOUSES: u8 = 4;

/// Color groups of the street properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorGroup {
    /// Brown (two properties).
    Brown,
    /// Light blue.
    LightBlue,
    /// Pink.
    Pink,
    /// Orange.
    Orange,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Dark blue (two properties).
    DarkBlue,
}

impl ColorGroup {
    /// Every color group in board order.
    pub const ALL: [Self; 8] = [
        Self::Brown,
        Self::LightBlue,
        Self::Pink,
        Self::Orange,
        Self::Red,
        Self::Yellow,
        Self::Green,
        Self::DarkBlue,
    ];

    /// Cost of one house (or of the hotel step) in this group.
    #[must_use]
    pub const fn house_cost(self) -> Money {
        match self {
            Self::Brown | Self::LightBlue => 50,
            Self::Pink | Self::Orange => 100,
            Self::Red | Self::Yellow => 150,
            Self::Green | Self::DarkBlue => 200,
        }
    }
}

/// Rent owed at each development level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentTable {
    /// Rent with no buildings.
    pub base: Money,
    /// Rent with one to four houses.
    pub houses: [Money; 4],
    /// Rent with a hotel.
    pub hotel: Money,
}

impl RentTable {
    /// Creates a table from the six printed rent values.
    #[must_use]
    pub const fn new(values: [Money; 6]) -> Self {
        Self {
            base: values[0],
            houses: [values[1], values[2], values[3], values[4]],
            hotel: values[5],
        }
    }
}

/// A street property belonging to a color group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    price: Money,
    group: ColorGroup,
    rent: RentTable,
    houses: u8,
    hotel: bool,
    mortgaged: bool,
}

impl Property {
    /// Creates an undeveloped, unmortgaged property.
    #[must_use]
    pub const fn new(price: Money, group: ColorGroup, rent: RentTable) -> Self {
        Self {
            price,
            group,
            rent,
            houses: 0,
            hotel: false,
            mortgaged: false,
        }
    }

    /// Returns the purchase price.
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Returns the color group.
    #[must_use]
    pub const fn group(&self) -> ColorGroup {
        self.group
    }

    /// Returns the rent table.
    #[must_use]
    pub const fn rent_table(&self) -> &RentTable {
        &self.rent
    }

    /// Returns the number of houses (always 0 once a hotel stands).
    #[must_use]
    pub const fn houses(&self) -> u8 {
        self.houses
    }

    /// Returns whether a hotel stands on the property.
    #[must_use]
    pub const fn has_hotel(&self) -> bool {
        self.hotel
    }

    /// Returns whether the property is mortgaged.
    #[must_use]
    pub const fn is_mortgaged(&self) -> bool {
        self.mortgaged
    }

    /// Returns the development level: houses, or 5 for a hotel.
    #[must_use]
    pub const fn level(&self) -> u8 {
        if self.hotel { MAX_HOUSES + 1 } else { self.houses }
    }

    /// Returns whether any building stands on the property.
    #[must_use]
    pub const fn is_developed(&self) -> bool {
        self.hotel || self.houses > 0
    }

    /// Adds one house, converting four houses into a hotel.
    ///
    /// Returns `false` if a hotel already stands.
    pub const fn add_house(&mut self) -> bool {
        if self.hotel {
            return false;
        }
        if self.houses == MAX_HOUSES {
            self.houses = 0;
            self.hotel = true;
        } else {
            self.houses += 1;
        }
        true
    }

    /// Sets the mortgaged flag.
    pub const fn set_mortgaged(&mut self, mortgaged: bool) {
        self.mortgaged = mortgaged;
    }

    /// Strips buildings and the mortgage, returning `(houses, hotels)` removed.
    pub const fn clear(&mut self) -> (u8, u8) {
        let removed = (self.houses, if self.hotel { 1 } else { 0 });
        self.houses = 0;
        self.hotel = false;
        self.mortgaged = false;
        removed
    }

    /// Rent owed by a visitor.
    ///
    /// A mortgaged property is always free. An undeveloped property doubles
    /// its base rent when its owner holds the whole color group.
    #[must_use]
    pub const fn rent(&self, monopoly: bool) -> Money {
        if self.mortgaged {
            return 0;
        }
        if self.hotel {
            return self.rent.hotel;
        }
        match self.houses {
            0 if monopoly => self.rent.base * 2,
            0 => self.rent.base,
            n => self.rent.houses[(n - 1) as usize],
        }
    }
}

/// A railroad station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Railroad {
    /// Purchase price.
    pub price: Money,
    /// Whether the railroad is mortgaged.
    pub mortgaged: bool,
}

/// A utility company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utility {
    /// Purchase price.
    pub price: Money,
    /// Whether the utility is mortgaged.
    pub mortgaged: bool,
}

/// Rent for a railroad whose owner holds `owned` railroads.
///
/// Doubles with every additional railroad: 25, 50, 100, 200 at the default
/// base. An unowned railroad collects nothing.
#[must_use]
pub const fn railroad_rent(base: Money, owned: usize) -> Money {
    if owned == 0 {
        return 0;
    }
    base << (owned - 1)
}

/// Rent for a utility whose owner holds `owned` utilities.
#[must_use]
pub const fn utility_rent(roll_total: u8, owned: usize) -> Money {
    let multiplier = match owned {
        0 => return 0,
        1 => 4,
        _ => 10,
    };
    roll_total as Money * multiplier
}
