//! Game engine and state management.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::bank::Bank;
use crate::board::{BOARD_SIZE, Board, Space, SpaceKind};
use crate::card::{Deck, DeckKind};
use crate::dice::Dice;
use crate::error::{JoinError, StartError};
use crate::event::Event;
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};
use crate::policy::{DefaultPolicy, Policy};
use crate::property::ColorGroup;

mod bankruptcy;
mod cards;
mod estate;
mod jail;
mod landing;
pub mod state;
mod turn;

pub use state::GameStatus;

/// A property game engine that manages players, the board and turn flow.
///
/// The game is the single owner of every piece of mutable state: the board's
/// development, the bank, both card decks, the dice and the players. Use
/// [`GameOptions`] to configure amounts such as the starting money and the
/// jail fee.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The board and its development state.
    pub board: Board,
    /// Building supply and unowned spaces.
    pub bank: Bank,
    /// Chance deck.
    pub chance: Deck,
    /// Community Chest deck.
    pub community_chest: Deck,
    /// The dice.
    pub dice: Dice,
    /// Current game status.
    status: GameStatus,
    /// Next player ID to assign.
    next_id: PlayerId,
    /// Active players in turn order.
    players: Vec<Player>,
    /// Bankrupt players in elimination order.
    eliminated: Vec<Player>,
    /// Index into `players` of the player to act next.
    current: usize,
    /// Players currently in jail.
    jailed: Vec<PlayerId>,
    /// Owner of each owned space (`position` -> `player_id`).
    owners: HashMap<u8, PlayerId>,
    /// Narration not yet taken by the driver.
    events: Vec<Event>,
    /// Decision maker for optional choices.
    policy: Box<dyn Policy>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Panics
    ///
    /// Panics if `options.dice_sides` is zero.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use boardwalk::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut game = Self {
            board: Board::classic(options.income_tax, options.luxury_tax),
            bank: Bank::new(options.houses, options.hotels),
            chance: Deck::new(DeckKind::Chance),
            community_chest: Deck::new(DeckKind::CommunityChest),
            dice: Dice::new(options.dice_sides),
            options,
            status: GameStatus::Setup,
            next_id: 0,
            players: Vec::new(),
            eliminated: Vec::new(),
            current: 0,
            jailed: Vec::new(),
            owners: HashMap::new(),
            events: Vec::new(),
            policy: Box::new(DefaultPolicy),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.reset_table();
        game
    }

    /// Replaces the decision policy.
    #[must_use]
    pub fn with_policy(mut self, policy: impl Policy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Replaces the decision policy in place.
    pub fn set_policy(&mut self, policy: Box<dyn Policy>) {
        self.policy = policy;
    }

    /// Restores the board, bank and decks to their starting state.
    fn reset_table(&mut self) {
        self.board = Board::classic(self.options.income_tax, self.options.luxury_tax);
        self.bank = Bank::new(self.options.houses, self.options.hotels);
        self.bank.set_available(
            self.board
                .spaces()
                .iter()
                .filter(|space| space.is_purchasable())
                .map(Space::position)
                .collect(),
        );
        self.owners.clear();

        self.chance = Deck::new(DeckKind::Chance);
        self.community_chest = Deck::new(DeckKind::CommunityChest);
        self.chance.shuffle(&mut self.rng);
        self.community_chest.shuffle(&mut self.rng);
    }

    /// Joins the game under a unique name.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has started, the name is taken, or the
    /// table is full.
    pub fn join(&mut self, name: &str) -> Result<PlayerId, JoinError> {
        if self.status != GameStatus::Setup {
            return Err(JoinError::GameInProgress);
        }
        if self.players.iter().any(|player| player.name() == name) {
            return Err(JoinError::DuplicateName);
        }
        if self.players.len() >= self.options.max_players {
            return Err(JoinError::TableFull);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.players.push(Player::new(
            id,
            String::from(name),
            self.options.starting_money,
        ));
        Ok(id)
    }

    /// Seeds starting money, clears jail and ownership, shuffles the decks
    /// and starts the game with the first player to join.
    ///
    /// # Errors
    ///
    /// Returns an error if the game was already started or too few players
    /// have joined.
    pub fn initialize_game(&mut self) -> Result<(), StartError> {
        if self.status != GameStatus::Setup {
            return Err(StartError::AlreadyStarted);
        }
        if self.players.len() < self.options.min_players.max(2) {
            return Err(StartError::NotEnoughPlayers);
        }

        for player in &mut self.players {
            player.money = self.options.starting_money;
            player.position = 0;
            player.jail_turns = 0;
            player.jail_cards.clear();
        }
        self.jailed.clear();
        self.eliminated.clear();
        self.events.clear();
        self.reset_table();
        self.dice.reset();
        self.current = 0;
        self.status = GameStatus::InProgress;

        Ok(())
    }

    /// Returns the current game status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Returns the last player standing once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        if !self.is_game_over() || self.players.len() != 1 {
            return None;
        }
        self.players.first()
    }

    /// Returns the active players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns bankrupt players in the order they were eliminated.
    #[must_use]
    pub fn eliminated(&self) -> &[Player] {
        &self.eliminated
    }

    /// Returns the number of active players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns an active player.
    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == player_id)
    }

    /// Returns an active player for mutation.
    pub fn player_mut(&mut self, player_id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.id() == player_id)
    }

    /// Returns the player whose turn is next.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if self.status != GameStatus::InProgress {
            return None;
        }
        self.players.get(self.current)
    }

    /// Returns whether the player is still in the game.
    #[must_use]
    pub fn is_active(&self, player_id: PlayerId) -> bool {
        self.player(player_id).is_some()
    }

    /// Returns whether the player is in jail.
    #[must_use]
    pub fn is_in_jail(&self, player_id: PlayerId) -> bool {
        self.jailed.contains(&player_id)
    }

    /// Returns the jailed players.
    #[must_use]
    pub fn jailed(&self) -> &[PlayerId] {
        &self.jailed
    }

    /// Returns the owner of the space at `position`.
    #[must_use]
    pub fn owner_of(&self, position: u8) -> Option<PlayerId> {
        self.owners.get(&position).copied()
    }

    /// Returns the positions owned by a player, in board order.
    #[must_use]
    pub fn properties_of(&self, player_id: PlayerId) -> Vec<u8> {
        (0..BOARD_SIZE)
            .filter(|position| self.owners.get(position) == Some(&player_id))
            .collect()
    }

    /// Returns how many spaces of `kind` the player owns.
    #[must_use]
    pub fn count_owned(&self, player_id: PlayerId, kind: SpaceKind) -> usize {
        self.board
            .positions_of(kind)
            .into_iter()
            .filter(|position| self.owners.get(position) == Some(&player_id))
            .count()
    }

    /// Returns whether the player owns every property of a color group.
    ///
    /// Always computed from the current ownership index.
    #[must_use]
    pub fn has_monopoly(&self, player_id: PlayerId, group: ColorGroup) -> bool {
        let positions = self.board.group_positions(group);
        !positions.is_empty()
            && positions
                .iter()
                .all(|position| self.owners.get(position) == Some(&player_id))
    }

    /// Returns the narration recorded so far.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Takes the narration recorded so far, leaving the journal empty.
    pub fn take_events(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.events)
    }

    /// Records an event and sends it to the log.
    fn narrate(&mut self, event: Event) {
        match event {
            Event::Rolled { .. } | Event::Moved { .. } | Event::Landed { .. } => {
                log::debug!("{event}");
            }
            _ => log::info!("{event}"),
        }
        self.events.push(event);
    }

    fn index_of(&self, player_id: PlayerId) -> Option<usize> {
        self.players
            .iter()
            .position(|player| player.id() == player_id)
    }

    fn deck_mut(&mut self, kind: DeckKind) -> &mut Deck {
        match kind {
            DeckKind::Chance => &mut self.chance,
            DeckKind::CommunityChest => &mut self.community_chest,
        }
    }
}
