use crate::board::JAIL_POSITION;
use crate::error::JailError;
use crate::event::{Event, JailRelease};
use crate::player::PlayerId;

use super::Game;

impl Game {
    /// Sends a player directly to jail without passing Go.
    pub(super) fn send_to_jail(&mut self, player_id: PlayerId) {
        let Some(player) = self.player_mut(player_id) else {
            return;
        };
        player.position = JAIL_POSITION;
        player.jail_turns = 0;
        if !self.jailed.contains(&player_id) {
            self.jailed.push(player_id);
        }
        self.dice.reset();
        self.narrate(Event::SentToJail { player: player_id });
    }

    /// Plays a jailed player's turn.
    ///
    /// A held card is used first. Otherwise the fee is paid if the player
    /// has served the maximum turns, or chooses to, and can afford it. A
    /// player released this way rolls and moves normally. A player still
    /// jailed rolls for doubles; doubles release and move them, anything else
    /// adds a served turn. Jail rolls never earn an extra turn.
    pub(super) fn jail_turn(&mut self, player_id: PlayerId) {
        let Some(player) = self.players.iter().find(|player| player.id() == player_id) else {
            return;
        };

        let mut released = false;
        if player.has_jail_card() {
            released = self.use_jail_card(player_id).is_ok();
        } else if player.can_afford(self.options.jail_fee) {
            let must_pay = player.jail_turns >= self.options.max_jail_turns;
            if must_pay || self.policy.should_pay_jail_fee(player) {
                released = self.pay_jail_fee(player_id).is_ok();
            }
        }

        let roll = self.roll(player_id);
        self.dice.reset();

        if !released {
            if !roll.is_doubles() {
                if let Some(player) = self.player_mut(player_id) {
                    player.jail_turns += 1;
                    let turns = player.jail_turns;
                    self.narrate(Event::StayedInJail {
                        player: player_id,
                        turns,
                    });
                }
                return;
            }
            self.release(player_id, JailRelease::Doubles);
        }

        self.advance(player_id, roll.total(), roll);
    }

    /// Pays the jail fee to leave jail.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not active, not in jail, or cannot
    /// afford the fee.
    pub fn pay_jail_fee(&mut self, player_id: PlayerId) -> Result<(), JailError> {
        let fee = self.options.jail_fee;
        let player = self.player(player_id).ok_or(JailError::PlayerNotFound)?;
        if !self.is_in_jail(player_id) {
            return Err(JailError::NotInJail);
        }
        if !player.can_afford(fee) {
            return Err(JailError::InsufficientFunds);
        }

        self.charge(player_id, fee, None, |paid| Event::Paid {
            player: player_id,
            amount: paid,
        });
        self.release(player_id, JailRelease::Fee);
        Ok(())
    }

    /// Uses a held Get Out of Jail Free card, returning it to its deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not active, not in jail, or holds
    /// no card.
    pub fn use_jail_card(&mut self, player_id: PlayerId) -> Result<(), JailError> {
        if !self.is_active(player_id) {
            return Err(JailError::PlayerNotFound);
        }
        if !self.is_in_jail(player_id) {
            return Err(JailError::NotInJail);
        }
        let deck = self
            .player_mut(player_id)
            .and_then(|player| player.jail_cards.pop())
            .ok_or(JailError::NoCard)?;

        self.deck_mut(deck).return_jail_card();
        self.release(player_id, JailRelease::Card);
        Ok(())
    }

    fn release(&mut self, player_id: PlayerId, how: JailRelease) {
        self.jailed.retain(|&id| id != player_id);
        if let Some(player) = self.player_mut(player_id) {
            player.jail_turns = 0;
        }
        self.narrate(Event::LeftJail {
            player: player_id,
            how,
        });
    }
}
