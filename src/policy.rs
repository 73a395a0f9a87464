//! Player decisions the engine delegates to its driver.

use crate::board::Space;
use crate::player::{Money, Player};

/// Answers the optional choices a turn can raise.
///
/// The engine only asks about purchases the player can afford, so a policy
/// never has to guard against forced spending.
pub trait Policy {
    /// Whether `player` buys the unowned `space` for `price`.
    fn should_buy(&mut self, player: &Player, space: &Space, price: Money) -> bool;

    /// Whether `player` pays the jail fee before rolling, ahead of the
    /// mandatory release.
    fn should_pay_jail_fee(&mut self, player: &Player) -> bool {
        let _ = player;
        false
    }
}

/// Buys everything affordable and waits out jail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultPolicy;

impl Policy for DefaultPolicy {
    fn should_buy(&mut self, player: &Player, _space: &Space, price: Money) -> bool {
        player.can_afford(price)
    }
}
