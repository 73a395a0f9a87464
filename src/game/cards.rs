use alloc::vec::Vec;

use crate::board::Space;
use crate::card::{Card, CardEffect, DeckKind};
use crate::dice::Roll;
use crate::event::Event;
use crate::player::{Money, PlayerId};

use super::Game;
use super::landing::RentRule;

impl Game {
    /// Draws the top card of a deck and applies it to the player.
    pub(super) fn draw_card(&mut self, player_id: PlayerId, kind: DeckKind, roll: Roll) {
        let Some(card) = self.deck_mut(kind).draw() else {
            return;
        };
        self.narrate(Event::CardDrawn {
            player: player_id,
            deck: kind,
            text: card.text,
        });
        self.apply_card(player_id, card, roll);
    }

    fn apply_card(&mut self, player_id: PlayerId, card: Card, roll: Roll) {
        let Some(position) = self.player(player_id).map(|player| player.position) else {
            return;
        };

        match card.effect {
            CardEffect::AdvanceTo(target) => {
                self.move_forward_to(player_id, target, roll, RentRule::Normal);
            }
            CardEffect::AdvanceToNearest {
                kind,
                rent_multiplier,
            } => {
                if let Some(target) = self.board.nearest_of_type(position, kind).map(Space::position)
                {
                    self.move_forward_to(
                        player_id,
                        target,
                        roll,
                        RentRule::Multiplied(rent_multiplier),
                    );
                }
            }
            CardEffect::GoBack(steps) => self.move_back(player_id, steps, roll),
            CardEffect::GoToJail => self.send_to_jail(player_id),
            CardEffect::Collect(amount) => {
                self.credit(player_id, amount);
                self.narrate(Event::Collected {
                    player: player_id,
                    amount,
                });
            }
            CardEffect::Pay(amount) => {
                self.charge(player_id, amount, None, |paid| Event::Paid {
                    player: player_id,
                    amount: paid,
                });
            }
            CardEffect::CollectFromEachPlayer(amount) => {
                for other in self.opponents_of(player_id) {
                    self.charge(other, amount, Some(player_id), |paid| Event::Transferred {
                        from: other,
                        to: player_id,
                        amount: paid,
                    });
                }
            }
            CardEffect::PayEachPlayer(amount) => {
                for other in self.opponents_of(player_id) {
                    let solvent =
                        self.charge(player_id, amount, Some(other), |paid| Event::Transferred {
                            from: player_id,
                            to: other,
                            amount: paid,
                        });
                    if !solvent {
                        break;
                    }
                }
            }
            CardEffect::Repairs {
                per_house,
                per_hotel,
            } => {
                let (houses, hotels) = self.buildings_of(player_id);
                let total = Money::from(houses) * per_house + Money::from(hotels) * per_hotel;
                if total > 0 {
                    self.charge(player_id, total, None, |paid| Event::Paid {
                        player: player_id,
                        amount: paid,
                    });
                }
            }
            CardEffect::GetOutOfJailFree => {
                if let Some(player) = self.player_mut(player_id) {
                    player.jail_cards.push(card.deck);
                }
            }
        }
    }

    fn opponents_of(&self, player_id: PlayerId) -> Vec<PlayerId> {
        self.players
            .iter()
            .map(|player| player.id())
            .filter(|&id| id != player_id)
            .collect()
    }

    /// Returns the total `(houses, hotels)` standing on a player's properties.
    #[must_use]
    pub fn buildings_of(&self, player_id: PlayerId) -> (u16, u16) {
        self.properties_of(player_id)
            .into_iter()
            .filter_map(|position| self.board.property_at(position))
            .fold((0, 0), |(houses, hotels), property| {
                (
                    houses + u16::from(property.houses()),
                    hotels + u16::from(property.has_hotel()),
                )
            })
    }
}
