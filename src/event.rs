//! Narration of everything that happens during play.

use core::fmt;

use crate::card::DeckKind;
use crate::dice::Roll;
use crate::player::{Money, PlayerId};

/// How a player got out of jail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JailRelease {
    /// Used a Get Out of Jail Free card.
    Card,
    /// Paid the fee.
    Fee,
    /// Rolled doubles.
    Doubles,
}

/// One observable action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A player's turn began.
    TurnStarted {
        /// Acting player.
        player: PlayerId,
    },
    /// Dice were rolled.
    Rolled {
        /// Acting player.
        player: PlayerId,
        /// The faces.
        roll: Roll,
    },
    /// A player moved.
    Moved {
        /// Acting player.
        player: PlayerId,
        /// Start position.
        from: u8,
        /// End position.
        to: u8,
    },
    /// A player passed Go.
    PassedGo {
        /// Acting player.
        player: PlayerId,
        /// Salary credited.
        salary: Money,
    },
    /// A player landed on a space.
    Landed {
        /// Acting player.
        player: PlayerId,
        /// Position.
        position: u8,
        /// Printed name.
        name: &'static str,
    },
    /// A player bought a space.
    Bought {
        /// Buyer.
        player: PlayerId,
        /// Position.
        position: u8,
        /// Price paid.
        price: Money,
    },
    /// A player could not afford an unowned space.
    CannotAfford {
        /// Acting player.
        player: PlayerId,
        /// Position.
        position: u8,
        /// Asking price.
        price: Money,
    },
    /// A player passed on an affordable space.
    Declined {
        /// Acting player.
        player: PlayerId,
        /// Position.
        position: u8,
    },
    /// Rent changed hands.
    RentPaid {
        /// Payer.
        payer: PlayerId,
        /// Owner.
        owner: PlayerId,
        /// Amount actually received by the owner.
        amount: Money,
    },
    /// A tax was paid.
    TaxPaid {
        /// Payer.
        player: PlayerId,
        /// Amount.
        amount: Money,
    },
    /// A card was drawn.
    CardDrawn {
        /// Drawer.
        player: PlayerId,
        /// Deck.
        deck: DeckKind,
        /// Printed text.
        text: &'static str,
    },
    /// Money was received from the bank.
    Collected {
        /// Receiver.
        player: PlayerId,
        /// Amount.
        amount: Money,
    },
    /// Money was paid to the bank.
    Paid {
        /// Payer.
        player: PlayerId,
        /// Amount.
        amount: Money,
    },
    /// Money moved between two players.
    Transferred {
        /// Payer.
        from: PlayerId,
        /// Receiver.
        to: PlayerId,
        /// Amount actually received.
        amount: Money,
    },
    /// A player was sent to jail.
    SentToJail {
        /// Jailed player.
        player: PlayerId,
    },
    /// A player left jail.
    LeftJail {
        /// Released player.
        player: PlayerId,
        /// Release path.
        how: JailRelease,
    },
    /// A player stayed in jail.
    StayedInJail {
        /// Jailed player.
        player: PlayerId,
        /// Turns served so far.
        turns: u8,
    },
    /// A player gets another turn for rolling doubles.
    ExtraTurn {
        /// Acting player.
        player: PlayerId,
    },
    /// A house or hotel was built.
    Built {
        /// Builder.
        player: PlayerId,
        /// Position.
        position: u8,
        /// New development level (5 is a hotel).
        level: u8,
    },
    /// A space was mortgaged.
    Mortgaged {
        /// Owner.
        player: PlayerId,
        /// Position.
        position: u8,
        /// Amount received.
        amount: Money,
    },
    /// A mortgage was lifted.
    Unmortgaged {
        /// Owner.
        player: PlayerId,
        /// Position.
        position: u8,
        /// Amount paid.
        amount: Money,
    },
    /// A player went bankrupt and left the game.
    Bankrupt {
        /// Eliminated player.
        player: PlayerId,
    },
    /// The game ended.
    GameOver {
        /// Last player standing.
        winner: Option<PlayerId>,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurnStarted { player } => write!(f, "player {player} starts their turn"),
            Self::Rolled { player, roll } => write!(
                f,
                "player {player} rolls {} and {} ({})",
                roll.first,
                roll.second,
                roll.total()
            ),
            Self::Moved { player, from, to } => {
                write!(f, "player {player} moves from {from} to {to}")
            }
            Self::PassedGo { player, salary } => {
                write!(f, "player {player} passes Go and collects ${salary}")
            }
            Self::Landed {
                player,
                position,
                name,
            } => write!(f, "player {player} lands on {name} ({position})"),
            Self::Bought {
                player,
                position,
                price,
            } => write!(f, "player {player} buys space {position} for ${price}"),
            Self::CannotAfford {
                player,
                position,
                price,
            } => write!(
                f,
                "player {player} cannot afford space {position} at ${price}"
            ),
            Self::Declined { player, position } => {
                write!(f, "player {player} declines to buy space {position}")
            }
            Self::RentPaid {
                payer,
                owner,
                amount,
            } => write!(f, "player {payer} pays ${amount} rent to player {owner}"),
            Self::TaxPaid { player, amount } => {
                write!(f, "player {player} pays ${amount} in tax")
            }
            Self::CardDrawn { player, deck, text } => {
                let deck = match deck {
                    DeckKind::Chance => "Chance",
                    DeckKind::CommunityChest => "Community Chest",
                };
                write!(f, "player {player} draws {deck}: {text}")
            }
            Self::Collected { player, amount } => {
                write!(f, "player {player} collects ${amount}")
            }
            Self::Paid { player, amount } => write!(f, "player {player} pays ${amount}"),
            Self::Transferred { from, to, amount } => {
                write!(f, "player {from} pays ${amount} to player {to}")
            }
            Self::SentToJail { player } => write!(f, "player {player} goes to jail"),
            Self::LeftJail { player, how } => {
                let how = match how {
                    JailRelease::Card => "using a card",
                    JailRelease::Fee => "by paying the fee",
                    JailRelease::Doubles => "by rolling doubles",
                };
                write!(f, "player {player} leaves jail {how}")
            }
            Self::StayedInJail { player, turns } => {
                write!(f, "player {player} stays in jail ({turns} turns served)")
            }
            Self::ExtraTurn { player } => {
                write!(f, "player {player} rolled doubles and goes again")
            }
            Self::Built {
                player,
                position,
                level,
            } => {
                if *level > 4 {
                    write!(f, "player {player} builds a hotel on space {position}")
                } else {
                    write!(
                        f,
                        "player {player} builds house {level} on space {position}"
                    )
                }
            }
            Self::Mortgaged {
                player,
                position,
                amount,
            } => write!(
                f,
                "player {player} mortgages space {position} for ${amount}"
            ),
            Self::Unmortgaged {
                player,
                position,
                amount,
            } => write!(
                f,
                "player {player} lifts the mortgage on space {position} for ${amount}"
            ),
            Self::Bankrupt { player } => write!(f, "player {player} is bankrupt"),
            Self::GameOver { winner: Some(id) } => write!(f, "game over: player {id} wins"),
            Self::GameOver { winner: None } => write!(f, "game over"),
        }
    }
}
