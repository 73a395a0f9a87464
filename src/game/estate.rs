use crate::board::Tile;
use crate::error::{BuildError, MortgageError};
use crate::event::Event;
use crate::player::{Money, PlayerId};
use crate::property::{ColorGroup, MAX_HOUSES};

use super::Game;

/// Interest charged on top of the mortgage value to lift a mortgage, in percent.
const MORTGAGE_INTEREST_PERCENT: Money = 10;

impl Game {
    /// Builds one house on a property, or a hotel on a property with four
    /// houses.
    ///
    /// Returns the property's new development level (5 is a hotel).
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not active, the space is not a
    /// street property they own, they lack the whole color group, any
    /// property of the group is mortgaged, the build is uneven or already
    /// maxed, the bank is out of buildings, or the player lacks funds.
    pub fn build_house(&mut self, player_id: PlayerId, position: u8) -> Result<u8, BuildError> {
        let money = self
            .player(player_id)
            .ok_or(BuildError::PlayerNotFound)?
            .money;
        let property = self
            .board
            .property_at(position)
            .ok_or(BuildError::NotAProperty)?;
        if self.owner_of(position) != Some(player_id) {
            return Err(BuildError::NotOwner);
        }

        let group = property.group();
        if !self.has_monopoly(player_id, group) {
            return Err(BuildError::NoMonopoly);
        }

        let group_positions = self.board.group_positions(group);
        let members = group_positions
            .iter()
            .filter_map(|&member| self.board.property_at(member));
        let mut lowest = u8::MAX;
        for member in members {
            if member.is_mortgaged() {
                return Err(BuildError::Mortgaged);
            }
            lowest = lowest.min(member.level());
        }

        if property.has_hotel() {
            return Err(BuildError::FullyDeveloped);
        }
        if property.level() > lowest {
            return Err(BuildError::UnevenBuilding);
        }

        let cost = group.house_cost();
        if money < cost {
            return Err(BuildError::InsufficientFunds);
        }

        let to_hotel = property.houses() == MAX_HOUSES;
        if to_hotel {
            if !self.bank.take_hotel() {
                return Err(BuildError::NoHotelsLeft);
            }
            self.bank.return_buildings(MAX_HOUSES, 0);
        } else if !self.bank.take_house() {
            return Err(BuildError::NoHousesLeft);
        }

        let mut level = 0;
        if let Some(property) = self.board.property_at_mut(position) {
            property.add_house();
            level = property.level();
        }
        if let Some(player) = self.player_mut(player_id) {
            player.money -= cost;
        }
        self.narrate(Event::Built {
            player: player_id,
            position,
            level,
        });

        Ok(level)
    }

    /// Mortgages an owned space for half its price.
    ///
    /// Returns the amount received.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not active or does not own the
    /// space, the space is already mortgaged, or buildings stand on its
    /// color group.
    pub fn mortgage(&mut self, player_id: PlayerId, position: u8) -> Result<Money, MortgageError> {
        let price = self.check_mortgage_owner(player_id, position)?;
        let tile = &self.board.space_at(position).tile;
        if tile.is_mortgaged() {
            return Err(MortgageError::AlreadyMortgaged);
        }
        if let Tile::Property(property) = tile {
            if self.group_has_buildings(property.group()) {
                return Err(MortgageError::HasBuildings);
            }
        }

        let amount = price / 2;
        self.board.space_at_mut(position).tile.set_mortgaged(true);
        self.credit(player_id, amount);
        self.narrate(Event::Mortgaged {
            player: player_id,
            position,
            amount,
        });

        Ok(amount)
    }

    /// Lifts a mortgage by repaying its value plus interest.
    ///
    /// Returns the amount paid.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not active or does not own the
    /// space, the space is not mortgaged, or the player lacks funds.
    pub fn unmortgage(&mut self, player_id: PlayerId, position: u8) -> Result<Money, MortgageError> {
        let price = self.check_mortgage_owner(player_id, position)?;
        if !self.board.space_at(position).tile.is_mortgaged() {
            return Err(MortgageError::NotMortgaged);
        }

        let value = price / 2;
        let amount = value + value * MORTGAGE_INTEREST_PERCENT / 100;
        let player = self
            .player_mut(player_id)
            .ok_or(MortgageError::PlayerNotFound)?;
        if !player.can_afford(amount) {
            return Err(MortgageError::InsufficientFunds);
        }
        player.money -= amount;

        self.board.space_at_mut(position).tile.set_mortgaged(false);
        self.narrate(Event::Unmortgaged {
            player: player_id,
            position,
            amount,
        });

        Ok(amount)
    }

    /// Returns the price of the space after checking the player owns it.
    fn check_mortgage_owner(&self, player_id: PlayerId, position: u8) -> Result<Money, MortgageError> {
        if !self.is_active(player_id) {
            return Err(MortgageError::PlayerNotFound);
        }
        let price = self
            .board
            .space_at(position)
            .tile
            .price()
            .ok_or(MortgageError::NotMortgageable)?;
        if self.owner_of(position) != Some(player_id) {
            return Err(MortgageError::NotOwner);
        }
        Ok(price)
    }

    fn group_has_buildings(&self, group: ColorGroup) -> bool {
        self.board
            .group_positions(group)
            .into_iter()
            .filter_map(|position| self.board.property_at(position))
            .any(|property| property.is_developed())
    }

    /// Returns a player's cash plus the value of their holdings.
    ///
    /// Spaces count at their price (half if mortgaged) and buildings at
    /// their cost, a hotel counting as five houses.
    #[must_use]
    pub fn net_worth(&self, player_id: PlayerId) -> Option<Money> {
        let player = self.player(player_id)?;
        let holdings: Money = self
            .properties_of(player_id)
            .into_iter()
            .map(|position| {
                let tile = &self.board.space_at(position).tile;
                let price = tile.price().unwrap_or(0);
                let deed = if tile.is_mortgaged() { price / 2 } else { price };
                let buildings = match tile {
                    Tile::Property(property) => {
                        Money::from(property.level()) * property.group().house_cost()
                    }
                    _ => 0,
                };
                deed + buildings
            })
            .sum();
        Some(player.money + holdings)
    }
}
