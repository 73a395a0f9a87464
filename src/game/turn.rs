use crate::board::BOARD_SIZE;
use crate::dice::Roll;
use crate::event::Event;
use crate::player::PlayerId;

use super::landing::RentRule;
use super::{Game, GameStatus};

impl Game {
    /// Plays the current player's full turn, including any extra turns
    /// earned by rolling doubles, then passes play to the next player.
    ///
    /// Returns whether the game continues.
    pub fn play_one_turn(&mut self) -> bool {
        if self.status != GameStatus::InProgress {
            return false;
        }
        let Some(player_id) = self.players.get(self.current).map(|player| player.id()) else {
            return false;
        };

        self.narrate(Event::TurnStarted { player: player_id });
        self.dice.reset();

        while self.take_single_turn(player_id) {
            self.narrate(Event::ExtraTurn { player: player_id });
        }

        self.pass_turn(player_id);
        self.status == GameStatus::InProgress
    }

    /// Plays one roll of a turn. Returns whether the player rolls again.
    fn take_single_turn(&mut self, player_id: PlayerId) -> bool {
        if self.is_in_jail(player_id) {
            self.jail_turn(player_id);
            return false;
        }

        let roll = self.roll(player_id);
        if roll.is_doubles() && self.dice.should_go_to_jail() {
            self.send_to_jail(player_id);
            return false;
        }

        self.advance(player_id, roll.total(), roll);

        roll.is_doubles()
            && self.status == GameStatus::InProgress
            && self.is_active(player_id)
            && !self.is_in_jail(player_id)
    }

    /// Hands play to whoever follows `player_id` in turn order.
    fn pass_turn(&mut self, player_id: PlayerId) {
        // A bankrupt player's slot already holds their successor.
        if let Some(index) = self.index_of(player_id) {
            self.current = index + 1;
        }
        if self.current >= self.players.len() {
            self.current = 0;
        }
    }

    pub(super) fn roll(&mut self, player_id: PlayerId) -> Roll {
        let roll = self.dice.roll(&mut self.rng);
        self.narrate(Event::Rolled {
            player: player_id,
            roll,
        });
        roll
    }

    /// Moves forward by `steps` and resolves the landing.
    pub(super) fn advance(&mut self, player_id: PlayerId, steps: u8, roll: Roll) {
        let Some(from) = self.player(player_id).map(|player| player.position) else {
            return;
        };
        let to = (from + steps % BOARD_SIZE) % BOARD_SIZE;
        self.move_forward_to(player_id, to, roll, RentRule::Normal);
    }

    /// Moves forward to `to`, paying the salary if the move wraps past Go,
    /// and resolves the landing.
    pub(super) fn move_forward_to(
        &mut self,
        player_id: PlayerId,
        to: u8,
        roll: Roll,
        rule: RentRule,
    ) {
        let salary = self.options.pass_go_salary;
        let Some(player) = self.player_mut(player_id) else {
            return;
        };
        let from = player.position;
        player.position = to;
        let wrapped = to < from;
        if wrapped {
            player.money += salary;
        }

        self.narrate(Event::Moved {
            player: player_id,
            from,
            to,
        });
        if wrapped {
            self.narrate(Event::PassedGo {
                player: player_id,
                salary,
            });
        }

        self.resolve_landing(player_id, to, roll, rule);
    }

    /// Moves backwards by `steps` without passing Go and resolves the landing.
    pub(super) fn move_back(&mut self, player_id: PlayerId, steps: u8, roll: Roll) {
        let Some(player) = self.player_mut(player_id) else {
            return;
        };
        let from = player.position;
        let to = (from + BOARD_SIZE - steps % BOARD_SIZE) % BOARD_SIZE;
        player.position = to;

        self.narrate(Event::Moved {
            player: player_id,
            from,
            to,
        });
        self.resolve_landing(player_id, to, roll, RentRule::Normal);
    }
}
