//! Error types for game operations.
//!
//! Running out of money on a mandatory payment is not an error: the engine
//! resolves it through bankruptcy. These errors cover driver requests that
//! cannot be honored in the current state.

use thiserror::Error;

/// Errors that can occur when a player joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// The game has already been initialized.
    #[error("game already in progress")]
    GameInProgress,
    /// Another player already uses this name.
    #[error("player name already taken")]
    DuplicateName,
    /// The table is at its player limit.
    #[error("table is full")]
    TableFull,
}

/// Errors that can occur when initializing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The game was already initialized.
    #[error("game already started")]
    AlreadyStarted,
    /// Fewer players than the configured minimum have joined.
    #[error("not enough players")]
    NotEnoughPlayers,
}

/// Errors that can occur when buying a property from the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The space cannot be owned.
    #[error("space is not purchasable")]
    NotPurchasable,
    /// The space already has an owner.
    #[error("space is already owned")]
    AlreadyOwned,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur when building houses or hotels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Only color-group properties can be developed.
    #[error("space is not a color-group property")]
    NotAProperty,
    /// The player does not own the property.
    #[error("player does not own this property")]
    NotOwner,
    /// The player does not own the whole color group.
    #[error("player does not own the whole color group")]
    NoMonopoly,
    /// A property in the color group is mortgaged.
    #[error("a property in the color group is mortgaged")]
    Mortgaged,
    /// Building here would make the group uneven.
    #[error("houses must be built evenly across the color group")]
    UnevenBuilding,
    /// The property already has a hotel.
    #[error("property is fully developed")]
    FullyDeveloped,
    /// The bank has no houses left.
    #[error("the bank has no houses left")]
    NoHousesLeft,
    /// The bank has no hotels left.
    #[error("the bank has no hotels left")]
    NoHotelsLeft,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur when mortgaging or unmortgaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MortgageError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The player does not own the space.
    #[error("player does not own this space")]
    NotOwner,
    /// The space cannot be mortgaged.
    #[error("space cannot be mortgaged")]
    NotMortgageable,
    /// The property is already mortgaged.
    #[error("property is already mortgaged")]
    AlreadyMortgaged,
    /// The property is not mortgaged.
    #[error("property is not mortgaged")]
    NotMortgaged,
    /// Buildings stand on the color group.
    #[error("color group still has buildings")]
    HasBuildings,
    /// Insufficient funds to lift the mortgage.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur when leaving jail on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JailError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The player is not in jail.
    #[error("player is not in jail")]
    NotInJail,
    /// The player holds no Get Out of Jail Free card.
    #[error("player holds no get out of jail free card")]
    NoCard,
    /// Insufficient funds for the fee.
    #[error("insufficient funds")]
    InsufficientFunds,
}
