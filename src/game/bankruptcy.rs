use crate::board::Tile;
use crate::card::DeckKind;
use crate::event::Event;
use crate::player::{Money, PlayerId};

use super::{Game, GameStatus};

impl Game {
    /// Takes a mandatory payment from `payer`.
    ///
    /// The creditor, if any, receives only what the payer actually had. If
    /// the payer's money goes negative they are declared bankrupt before this
    /// returns. `event` builds the narration from the amount received.
    ///
    /// Returns whether the payer is still solvent.
    pub(super) fn charge(
        &mut self,
        payer: PlayerId,
        amount: Money,
        creditor: Option<PlayerId>,
        event: impl FnOnce(Money) -> Event,
    ) -> bool {
        let Some(player) = self.player_mut(payer) else {
            return false;
        };
        let covered = amount.min(player.money.max(0));
        player.money -= amount;
        let solvent = player.money >= 0;

        if let Some(owner) = creditor.and_then(|id| self.player_mut(id)) {
            owner.money += covered;
        }
        self.narrate(event(covered));

        if !solvent {
            self.declare_bankruptcy(payer);
        }
        solvent
    }

    /// Credits money from the bank.
    pub(super) fn credit(&mut self, player_id: PlayerId, amount: Money) {
        if let Some(player) = self.player_mut(player_id) {
            player.money += amount;
        }
    }

    /// Removes a player from the game, returning everything they own to the
    /// bank, and ends the game if one player remains.
    pub(super) fn declare_bankruptcy(&mut self, player_id: PlayerId) {
        let Some(index) = self.index_of(player_id) else {
            return;
        };

        for position in self.properties_of(player_id) {
            self.owners.remove(&position);
            match &mut self.board.space_at_mut(position).tile {
                Tile::Property(property) => {
                    let (houses, hotels) = property.clear();
                    self.bank.return_buildings(houses, hotels);
                }
                tile => tile.set_mortgaged(false),
            }
            self.bank.restore(position);
        }

        let mut player = self.players.remove(index);
        for deck in player.jail_cards.drain(..) {
            match deck {
                DeckKind::Chance => self.chance.return_jail_card(),
                DeckKind::CommunityChest => self.community_chest.return_jail_card(),
            }
        }
        self.jailed.retain(|&id| id != player_id);
        self.eliminated.push(player);

        if index < self.current {
            self.current -= 1;
        }
        if self.current >= self.players.len() {
            self.current = 0;
        }

        self.narrate(Event::Bankrupt { player: player_id });

        if self.players.len() <= 1 {
            self.status = GameStatus::Finished;
            let winner = self.players.first().map(|player| player.id());
            self.narrate(Event::GameOver { winner });
        }
    }
}
