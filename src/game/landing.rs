use crate::board::{SpaceKind, Tile};
use crate::card::DeckKind;
use crate::dice::Roll;
use crate::error::PurchaseError;
use crate::event::Event;
use crate::player::{Money, PlayerId};
use crate::property::{railroad_rent, utility_rent};

use super::Game;

/// How rent is computed for the landing being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RentRule {
    /// The printed rent.
    Normal,
    /// Railroads charge this multiple of their rent; utilities charge this
    /// multiple of the roll regardless of how many the owner holds.
    Multiplied(Money),
}

impl Game {
    /// Rent owed by a visitor to `position` after `roll`.
    ///
    /// Returns 0 for unowned and unownable spaces. Computed from the current
    /// ownership and development on every call.
    #[must_use]
    pub fn rent_due(&self, position: u8, roll: Roll) -> Money {
        self.rent_with(position, roll, RentRule::Normal)
    }

    fn rent_with(&self, position: u8, roll: Roll, rule: RentRule) -> Money {
        let Some(owner) = self.owner_of(position) else {
            return 0;
        };

        match &self.board.space_at(position).tile {
            Tile::Property(property) => property.rent(self.has_monopoly(owner, property.group())),
            Tile::Railroad(railroad) if !railroad.mortgaged => {
                let owned = self.count_owned(owner, SpaceKind::Railroad);
                let rent = railroad_rent(self.options.railroad_base_rent, owned);
                match rule {
                    RentRule::Normal => rent,
                    RentRule::Multiplied(multiplier) => rent * multiplier,
                }
            }
            Tile::Utility(utility) if !utility.mortgaged => match rule {
                RentRule::Normal => {
                    utility_rent(roll.total(), self.count_owned(owner, SpaceKind::Utility))
                }
                RentRule::Multiplied(multiplier) => Money::from(roll.total()) * multiplier,
            },
            _ => 0,
        }
    }

    /// Applies the effect of the space the player now stands on.
    pub(super) fn resolve_landing(
        &mut self,
        player_id: PlayerId,
        position: u8,
        roll: Roll,
        rule: RentRule,
    ) {
        let space = self.board.space_at(position);
        let name = space.name();
        let tile = space.tile.clone();
        self.narrate(Event::Landed {
            player: player_id,
            position,
            name,
        });

        match tile {
            Tile::Property(_) | Tile::Railroad(_) | Tile::Utility(_) => {
                self.resolve_ownable(player_id, position, roll, rule);
            }
            Tile::Tax(amount) => {
                self.charge(player_id, amount, None, |paid| Event::TaxPaid {
                    player: player_id,
                    amount: paid,
                });
            }
            Tile::Chance => self.draw_card(player_id, DeckKind::Chance, roll),
            Tile::CommunityChest => self.draw_card(player_id, DeckKind::CommunityChest, roll),
            Tile::GoToJail => self.send_to_jail(player_id),
            Tile::Go | Tile::Jail | Tile::FreeParking => {}
        }
    }

    fn resolve_ownable(&mut self, player_id: PlayerId, position: u8, roll: Roll, rule: RentRule) {
        match self.owner_of(position) {
            Some(owner) if owner == player_id => {}
            Some(owner) => {
                let rent = self.rent_with(position, roll, rule);
                if rent > 0 {
                    self.charge(player_id, rent, Some(owner), |amount| Event::RentPaid {
                        payer: player_id,
                        owner,
                        amount,
                    });
                }
            }
            None => self.offer_purchase(player_id, position),
        }
    }

    /// Offers an unowned space to the player. Declining is silent.
    fn offer_purchase(&mut self, player_id: PlayerId, position: u8) {
        let space = self.board.space_at(position);
        let Some(price) = space.tile.price() else {
            return;
        };
        if !self.bank.is_available(position) {
            return;
        }
        let Some(player) = self.players.iter().find(|player| player.id() == player_id) else {
            return;
        };

        if !player.can_afford(price) {
            self.narrate(Event::CannotAfford {
                player: player_id,
                position,
                price,
            });
            return;
        }

        if self.policy.should_buy(player, space, price) {
            // Affordability and availability were checked above.
            let _ = self.buy_property(player_id, position);
        } else {
            self.narrate(Event::Declined {
                player: player_id,
                position,
            });
        }
    }

    /// Buys an unowned space from the bank at its printed price.
    ///
    /// Returns the price paid.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not active, the space cannot be
    /// owned or is already owned, or the player lacks funds.
    pub fn buy_property(&mut self, player_id: PlayerId, position: u8) -> Result<Money, PurchaseError> {
        let price = self
            .board
            .space_at(position)
            .tile
            .price()
            .ok_or(PurchaseError::NotPurchasable)?;
        if self.owners.contains_key(&position) || !self.bank.is_available(position) {
            return Err(PurchaseError::AlreadyOwned);
        }

        let buyer = self
            .player_mut(player_id)
            .ok_or(PurchaseError::PlayerNotFound)?;
        if !buyer.can_afford(price) {
            return Err(PurchaseError::InsufficientFunds);
        }
        buyer.money -= price;

        self.bank.claim(position);
        self.owners.insert(position, player_id);
        self.narrate(Event::Bought {
            player: player_id,
            position,
            price,
        });

        Ok(price)
    }
}
