//! Game configuration options.

use crate::player::Money;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use boardwalk::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_money(2000)
///     .with_pass_go_salary(400)
///     .with_jail_fee(100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Money each player starts with.
    pub starting_money: Money,
    /// Salary credited for passing Go.
    pub pass_go_salary: Money,
    /// Fee to leave jail.
    pub jail_fee: Money,
    /// Turns served before the fee becomes mandatory.
    pub max_jail_turns: u8,
    /// Income tax amount.
    pub income_tax: Money,
    /// Luxury tax amount.
    pub luxury_tax: Money,
    /// Houses in the bank's supply.
    pub houses: u8,
    /// Hotels in the bank's supply.
    pub hotels: u8,
    /// Rent for a single owned railroad.
    pub railroad_base_rent: Money,
    /// Sides on each die.
    pub dice_sides: u8,
    /// Players required to start.
    pub min_players: usize,
    /// Maximum players at the table.
    pub max_players: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_money: 1500,
            pass_go_salary: 200,
            jail_fee: 50,
            max_jail_turns: 3,
            income_tax: 200,
            luxury_tax: 100,
            houses: 32,
            hotels: 12,
            railroad_base_rent: 25,
            dice_sides: 6,
            min_players: 2,
            max_players: 8,
        }
    }
}

impl GameOptions {
    /// Sets the starting money.
    ///
    /// # Example
    ///
    /// ```
    /// use boardwalk::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_money(1000);
    /// assert_eq!(options.starting_money, 1000);
    /// ```
    #[must_use]
    pub const fn with_starting_money(mut self, money: Money) -> Self {
        self.starting_money = money;
        self
    }

    /// Sets the salary for passing Go.
    ///
    /// # Example
    ///
    /// ```
    /// use boardwalk::GameOptions;
    ///
    /// let options = GameOptions::default().with_pass_go_salary(400);
    /// assert_eq!(options.pass_go_salary, 400);
    /// ```
    #[must_use]
    pub const fn with_pass_go_salary(mut self, salary: Money) -> Self {
        self.pass_go_salary = salary;
        self
    }

    /// Sets the jail fee.
    ///
    /// # Example
    ///
    /// ```
    /// use boardwalk::GameOptions;
    ///
    /// let options = GameOptions::default().with_jail_fee(100);
    /// assert_eq!(options.jail_fee, 100);
    /// ```
    #[must_use]
    pub const fn with_jail_fee(mut self, fee: Money) -> Self {
        self.jail_fee = fee;
        self
    }

    /// Sets how many turns are served before the jail fee is mandatory.
    ///
    /// # Example
    ///
    /// ```
    /// use boardwalk::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_jail_turns(2);
    /// assert_eq!(options.max_jail_turns, 2);
    /// ```
    #[must_use]
    pub const fn with_max_jail_turns(mut self, turns: u8) -> Self {
        self.max_jail_turns = turns;
        self
    }

    /// Sets the income and luxury tax amounts.
    ///
    /// # Example
    ///
    /// ```
    /// use boardwalk::GameOptions;
    ///
    /// let options = GameOptions::default().with_taxes(150, 75);
    /// assert_eq!(options.income_tax, 150);
    /// assert_eq!(options.luxury_tax, 75);
    /// ```
    #[must_use]
    pub const fn with_taxes(mut self, income: Money, luxury: Money) -> Self {
        self.income_tax = income;
        self.luxury_tax = luxury;
        self
    }

    /// Sets the bank's house and hotel supply.
    ///
    /// # Example
    ///
    /// ```
    /// use boardwalk::GameOptions;
    ///
    /// let options = GameOptions::default().with_building_supply(8, 2);
    /// assert_eq!(options.houses, 8);
    /// assert_eq!(options.hotels, 2);
    /// ```
    #[must_use]
    pub const fn with_building_supply(mut self, houses: u8, hotels: u8) -> Self {
        self.houses = houses;
        self.hotels = hotels;
        self
    }

    /// Sets the rent for a single owned railroad.
    ///
    /// # Example
    ///
    /// ```
    /// use boardwalk::GameOptions;
    ///
    /// let options = GameOptions::default().with_railroad_base_rent(50);
    /// assert_eq!(options.railroad_base_rent, 50);
    /// ```
    #[must_use]
    pub const fn with_railroad_base_rent(mut self, rent: Money) -> Self {
        self.railroad_base_rent = rent;
        self
    }

    /// Sets the number of sides on each die.
    ///
    /// # Example
    ///
    /// ```
    /// use boardwalk::GameOptions;
    ///
    /// let options = GameOptions::default().with_dice_sides(8);
    /// assert_eq!(options.dice_sides, 8);
    /// ```
    #[must_use]
    pub const fn with_dice_sides(mut self, sides: u8) -> Self {
        self.dice_sides = sides;
        self
    }

    /// Sets the minimum and maximum number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use boardwalk::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_limits(3, 4);
    /// assert_eq!(options.min_players, 3);
    /// assert_eq!(options.max_players, 4);
    /// ```
    #[must_use]
    pub const fn with_player_limits(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }
}
