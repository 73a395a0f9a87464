//! The bank: building supply and unowned properties.

use alloc::vec::Vec;

/// Finite house and hotel supply plus the pool of unowned spaces.
///
/// The bank's cash is unlimited and is not tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    houses: u8,
    hotels: u8,
    available: Vec<u8>,
}

impl Bank {
    /// Creates a bank with the given building supply and no properties.
    #[must_use]
    pub const fn new(houses: u8, hotels: u8) -> Self {
        Self {
            houses,
            hotels,
            available: Vec::new(),
        }
    }

    /// Returns the houses left in the supply.
    #[must_use]
    pub const fn houses(&self) -> u8 {
        self.houses
    }

    /// Returns the hotels left in the supply.
    #[must_use]
    pub const fn hotels(&self) -> u8 {
        self.hotels
    }

    /// Takes one house from the supply. Returns `false` if none are left.
    pub const fn take_house(&mut self) -> bool {
        if self.houses == 0 {
            return false;
        }
        self.houses -= 1;
        true
    }

    /// Takes one hotel from the supply. Returns `false` if none are left.
    pub const fn take_hotel(&mut self) -> bool {
        if self.hotels == 0 {
            return false;
        }
        self.hotels -= 1;
        true
    }

    /// Returns houses and hotels to the supply.
    pub const fn return_buildings(&mut self, houses: u8, hotels: u8) {
        self.houses = self.houses.saturating_add(houses);
        self.hotels = self.hotels.saturating_add(hotels);
    }

    /// Replaces the pool of unowned spaces.
    pub fn set_available(&mut self, positions: Vec<u8>) {
        self.available = positions;
    }

    /// Returns whether the space at `position` is unowned.
    #[must_use]
    pub fn is_available(&self, position: u8) -> bool {
        self.available.contains(&position)
    }

    /// Removes a space from the pool. Returns `false` if it was not there.
    pub fn claim(&mut self, position: u8) -> bool {
        let Some(index) = self.available.iter().position(|&p| p == position) else {
            return false;
        };
        self.available.remove(index);
        true
    }

    /// Puts a space back into the pool, keeping board order.
    pub fn restore(&mut self, position: u8) {
        if let Err(index) = self.available.binary_search(&position) {
            self.available.insert(index, position);
        }
    }

    /// Returns the unowned spaces in board order.
    #[must_use]
    pub fn available(&self) -> &[u8] {
        &self.available
    }
}
