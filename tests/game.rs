//! Game integration tests.

use boardwalk::card::{CHANCE_CARDS, COMMUNITY_CHEST_CARDS};
use boardwalk::{
    BOARD_SIZE, BuildError, Card, DeckKind, Event, Game, GameOptions, GameStatus, JAIL_POSITION,
    JailError, JailRelease, JoinError, Money, MortgageError, Player, Policy, PurchaseError, Roll,
    Space, StartError,
};

/// Declines every purchase so tests control ownership explicitly.
struct NeverBuy;

impl Policy for NeverBuy {
    fn should_buy(&mut self, _player: &Player, _space: &Space, _price: Money) -> bool {
        false
    }
}

fn start(game: &mut Game, names: &[&str]) {
    for name in names {
        game.join(name).unwrap();
    }
    game.initialize_game().unwrap();
}

fn new_game(names: &[&str]) -> Game {
    let mut game = Game::new(GameOptions::default(), 7);
    start(&mut game, names);
    game
}

fn passive_game(names: &[&str]) -> Game {
    let mut game = Game::new(GameOptions::default(), 7).with_policy(NeverBuy);
    start(&mut game, names);
    game
}

fn chance(prefix: &str) -> Card {
    *CHANCE_CARDS
        .iter()
        .find(|card| card.text.starts_with(prefix))
        .unwrap()
}

fn chest(prefix: &str) -> Card {
    *COMMUNITY_CHEST_CARDS
        .iter()
        .find(|card| card.text.starts_with(prefix))
        .unwrap()
}

fn place(game: &mut Game, player_id: u8, position: u8) {
    game.player_mut(player_id).unwrap().position = position;
}

fn money(game: &Game, player_id: u8) -> Money {
    game.player(player_id).unwrap().money
}

fn position(game: &Game, player_id: u8) -> u8 {
    game.player(player_id).unwrap().position
}

fn count_events(game: &Game, pred: impl Fn(&Event) -> bool) -> usize {
    game.events().iter().filter(|event| pred(event)).count()
}

#[test]
fn join_and_start_errors() {
    let mut game = Game::new(GameOptions::default().with_player_limits(2, 2), 1);
    assert_eq!(game.status(), GameStatus::Setup);
    assert_eq!(game.join("Ada"), Ok(0));
    assert_eq!(game.join("Ada"), Err(JoinError::DuplicateName));
    assert_eq!(game.initialize_game(), Err(StartError::NotEnoughPlayers));
    assert_eq!(game.join("Grace"), Ok(1));
    assert_eq!(game.join("Linus"), Err(JoinError::TableFull));

    game.initialize_game().unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.initialize_game(), Err(StartError::AlreadyStarted));
    assert_eq!(game.join("Linus"), Err(JoinError::GameInProgress));
}

#[test]
fn initialize_seeds_money_and_unowned_board() {
    let game = new_game(&["Ada", "Grace", "Linus"]);

    assert_eq!(game.player_count(), 3);
    for player in game.players() {
        assert_eq!(player.money, 1500);
        assert_eq!(player.position, 0);
        assert!(player.jail_cards.is_empty());
    }
    assert_eq!(game.current_player().map(Player::id), Some(0));
    assert_eq!(game.bank.available().len(), 28);
    assert_eq!(game.bank.houses(), 32);
    assert_eq!(game.bank.hotels(), 12);
    assert_eq!(game.chance.len(), 16);
    assert_eq!(game.community_chest.len(), 16);
    assert!(game.jailed().is_empty());
}

#[test]
fn wrap_past_go_collects_salary_and_resolves_chest() {
    let mut game = new_game(&["Ada", "Grace"]);
    place(&mut game, 0, 35);
    game.community_chest.stack(chest("You inherit"));
    game.dice.load(&[(3, 4)]);

    assert!(game.play_one_turn());

    assert_eq!(position(&game, 0), 2);
    assert_eq!(money(&game, 0), 1500 + 200 + 100);
    assert_eq!(count_events(&game, |e| matches!(e, Event::PassedGo { .. })), 1);
    assert!(game.events().contains(&Event::CardDrawn {
        player: 0,
        deck: DeckKind::CommunityChest,
        text: "You inherit $100.",
    }));
    assert_eq!(game.current_player().map(Player::id), Some(1));
}

#[test]
fn landing_exactly_on_go_pays_salary_once() {
    let mut game = new_game(&["Ada", "Grace"]);
    place(&mut game, 0, 36);
    game.dice.load(&[(1, 3)]);

    game.play_one_turn();

    assert_eq!(position(&game, 0), 0);
    assert_eq!(money(&game, 0), 1700);
}

#[test]
fn doubles_grant_an_extra_roll() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.dice.load(&[(3, 3), (1, 2)]);

    game.play_one_turn();

    // Oriental Avenue then Connecticut Avenue, both bought.
    assert_eq!(position(&game, 0), 9);
    assert_eq!(game.owner_of(6), Some(0));
    assert_eq!(game.owner_of(9), Some(0));
    assert_eq!(money(&game, 0), 1500 - 100 - 120);
    assert_eq!(count_events(&game, |e| matches!(e, Event::ExtraTurn { .. })), 1);
    assert_eq!(game.current_player().map(Player::id), Some(1));
    assert_eq!(game.dice.loaded_len(), 0);
}

#[test]
fn third_doubles_send_player_to_jail() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.dice.load(&[(2, 2), (3, 3), (1, 1)]);

    game.play_one_turn();

    let ada = game.player(0).unwrap();
    assert_eq!(ada.position, JAIL_POSITION);
    assert_eq!(ada.jail_turns, 0);
    // Income tax on the first roll; the third roll never moves the token.
    assert_eq!(ada.money, 1300);
    assert!(game.is_in_jail(0));
    assert_eq!(game.current_player().map(Player::id), Some(1));
    assert_eq!(game.dice.doubles(), 0);
}

#[test]
fn go_to_jail_space_jails_without_salary() {
    let mut game = new_game(&["Ada", "Grace"]);
    place(&mut game, 0, 27);
    game.dice.load(&[(1, 2)]);

    game.play_one_turn();

    assert_eq!(position(&game, 0), JAIL_POSITION);
    assert_eq!(money(&game, 0), 1500);
    assert!(game.is_in_jail(0));
    assert_eq!(game.jailed(), &[0]);
}

#[test]
fn jailed_player_without_doubles_stays() {
    let mut game = passive_game(&["Ada", "Grace"]);
    place(&mut game, 0, 27);
    game.dice.load(&[(1, 2), (1, 2), (1, 2)]);

    game.play_one_turn();
    game.play_one_turn();
    game.play_one_turn();

    let ada = game.player(0).unwrap();
    assert_eq!(ada.position, JAIL_POSITION);
    assert_eq!(ada.jail_turns, 1);
    assert_eq!(ada.money, 1500);
    assert!(game.is_in_jail(0));
    assert!(game.events().contains(&Event::StayedInJail {
        player: 0,
        turns: 1
    }));
}

#[test]
fn jailed_player_rolling_doubles_walks_out_without_extra_turn() {
    let mut game = passive_game(&["Ada", "Grace"]);
    place(&mut game, 0, 27);
    game.dice.load(&[(1, 2), (1, 2), (2, 2)]);

    game.play_one_turn();
    game.play_one_turn();
    game.take_events();
    game.play_one_turn();

    assert!(!game.is_in_jail(0));
    assert_eq!(position(&game, 0), 14);
    assert_eq!(money(&game, 0), 1500);
    assert!(game.events().contains(&Event::LeftJail {
        player: 0,
        how: JailRelease::Doubles
    }));
    assert_eq!(count_events(&game, |e| matches!(e, Event::ExtraTurn { .. })), 0);
    assert_eq!(game.current_player().map(Player::id), Some(1));
}

#[test]
fn jail_fee_is_mandatory_after_max_turns() {
    let mut game = passive_game(&["Ada", "Grace"]);
    place(&mut game, 0, 27);
    game.dice.load(&[(1, 2), (1, 2), (1, 2)]);

    game.play_one_turn();
    game.play_one_turn();
    game.player_mut(0).unwrap().jail_turns = 3;
    game.play_one_turn();

    let ada = game.player(0).unwrap();
    assert!(!game.is_in_jail(0));
    assert_eq!(ada.money, 1450);
    assert_eq!(ada.position, 13);
    assert_eq!(ada.jail_turns, 0);
    assert!(game.events().contains(&Event::LeftJail {
        player: 0,
        how: JailRelease::Fee
    }));
}

#[test]
fn jail_card_is_kept_used_and_returned() {
    let mut game = passive_game(&["Ada", "Grace"]);
    game.chance.stack(chance("Get Out of Jail Free"));
    place(&mut game, 0, 4);
    game.dice.load(&[(1, 2), (1, 2), (1, 2), (1, 2), (1, 2)]);

    game.play_one_turn();
    assert_eq!(game.player(0).unwrap().jail_cards, vec![DeckKind::Chance]);
    assert_eq!(game.chance.len(), 15);

    game.play_one_turn();
    place(&mut game, 0, 27);
    game.play_one_turn();
    assert!(game.is_in_jail(0));
    game.play_one_turn();
    game.play_one_turn();

    let ada = game.player(0).unwrap();
    assert!(!game.is_in_jail(0));
    assert!(ada.jail_cards.is_empty());
    assert_eq!(ada.position, 13);
    assert_eq!(ada.money, 1500);
    assert_eq!(game.chance.len(), 16);
    assert!(game.events().contains(&Event::LeftJail {
        player: 0,
        how: JailRelease::Card
    }));
}

#[test]
fn jail_actions_report_errors() {
    let mut game = new_game(&["Ada", "Grace"]);
    assert_eq!(game.pay_jail_fee(0), Err(JailError::NotInJail));
    assert_eq!(game.use_jail_card(9), Err(JailError::PlayerNotFound));

    place(&mut game, 0, 27);
    game.dice.load(&[(1, 2)]);
    game.play_one_turn();

    assert_eq!(game.use_jail_card(0), Err(JailError::NoCard));
    game.player_mut(0).unwrap().money = 10;
    assert_eq!(game.pay_jail_fee(0), Err(JailError::InsufficientFunds));
    game.player_mut(0).unwrap().money = 100;
    assert_eq!(game.pay_jail_fee(0), Ok(()));
    assert_eq!(money(&game, 0), 50);
    assert!(!game.is_in_jail(0));
}

#[test]
fn railroad_rent_scales_with_railroads_owned() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.buy_property(1, 5).unwrap();
    game.buy_property(1, 15).unwrap();
    place(&mut game, 0, 12);
    game.dice.load(&[(1, 2)]);

    game.play_one_turn();

    assert_eq!(money(&game, 0), 1450);
    assert_eq!(money(&game, 1), 1500 - 400 + 50);
    assert!(game.events().contains(&Event::RentPaid {
        payer: 0,
        owner: 1,
        amount: 50
    }));
}

#[test]
fn street_rent_doubles_with_monopoly() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.buy_property(1, 39).unwrap();
    let roll = Roll::new(1, 3);
    assert_eq!(game.rent_due(39, roll), 50);

    game.buy_property(1, 37).unwrap();
    assert_eq!(game.rent_due(39, roll), 100);

    place(&mut game, 0, 35);
    game.dice.load(&[(1, 3)]);
    game.play_one_turn();
    assert_eq!(money(&game, 0), 1400);
}

#[test]
fn utility_rent_uses_the_roll() {
    let mut game = new_game(&["Ada", "Grace"]);
    let roll = Roll::new(3, 4);
    assert_eq!(game.rent_due(12, roll), 0);

    game.buy_property(1, 12).unwrap();
    assert_eq!(game.rent_due(12, roll), 28);
    game.buy_property(1, 28).unwrap();
    assert_eq!(game.rent_due(12, roll), 70);
}

#[test]
fn landing_on_own_or_mortgaged_space_costs_nothing() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.buy_property(0, 3).unwrap();
    game.buy_property(1, 6).unwrap();
    game.mortgage(1, 6).unwrap();
    assert_eq!(game.rent_due(6, Roll::new(1, 2)), 0);

    game.dice.load(&[(1, 2), (5, 1)]);
    game.play_one_turn();
    assert_eq!(money(&game, 0), 1440);

    place(&mut game, 1, 0);
    game.play_one_turn();
    assert_eq!(money(&game, 1), 1500 - 100 + 50);
}

#[test]
fn declined_and_unaffordable_purchases_leave_space_unowned() {
    let mut game = passive_game(&["Ada", "Grace"]);
    game.dice.load(&[(1, 2)]);
    game.play_one_turn();
    assert_eq!(game.owner_of(3), None);
    assert!(game.events().contains(&Event::Declined {
        player: 0,
        position: 3
    }));

    let mut game = new_game(&["Ada", "Grace"]);
    game.player_mut(0).unwrap().money = 50;
    game.dice.load(&[(1, 2)]);
    game.play_one_turn();
    assert_eq!(game.owner_of(3), None);
    assert_eq!(money(&game, 0), 50);
    assert!(game.events().contains(&Event::CannotAfford {
        player: 0,
        position: 3,
        price: 60
    }));
}

#[test]
fn buy_property_errors() {
    let mut game = new_game(&["Ada", "Grace"]);
    assert_eq!(game.buy_property(0, 0), Err(PurchaseError::NotPurchasable));
    assert_eq!(game.buy_property(9, 1), Err(PurchaseError::PlayerNotFound));
    assert_eq!(game.buy_property(0, 1), Ok(60));
    assert_eq!(game.buy_property(1, 1), Err(PurchaseError::AlreadyOwned));
    game.player_mut(1).unwrap().money = 10;
    assert_eq!(game.buy_property(1, 3), Err(PurchaseError::InsufficientFunds));
    assert!(!game.bank.is_available(1));
    assert!(game.bank.is_available(3));
}

#[test]
fn go_back_three_never_pays_salary() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.chance.stack(chance("Go Back 3"));
    place(&mut game, 0, 4);
    game.dice.load(&[(1, 2)]);

    game.play_one_turn();

    // Lands back on Income Tax.
    assert_eq!(position(&game, 0), 4);
    assert_eq!(money(&game, 0), 1300);
    assert_eq!(count_events(&game, |e| matches!(e, Event::PassedGo { .. })), 0);
}

#[test]
fn advance_to_go_collects_salary() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.chance.stack(chance("Advance to Go"));
    place(&mut game, 0, 4);
    game.dice.load(&[(1, 2)]);

    game.play_one_turn();

    assert_eq!(position(&game, 0), 0);
    assert_eq!(money(&game, 0), 1700);
}

#[test]
fn nearest_railroad_card_charges_double_rent() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.buy_property(1, 15).unwrap();
    game.chance.stack(chance("Advance to the nearest Railroad"));
    place(&mut game, 0, 4);
    game.dice.load(&[(1, 2)]);

    game.play_one_turn();

    assert_eq!(position(&game, 0), 15);
    assert_eq!(money(&game, 0), 1450);
    assert_eq!(money(&game, 1), 1300 + 50);
}

#[test]
fn nearest_utility_card_charges_ten_times_the_roll() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.buy_property(1, 12).unwrap();
    game.chance.stack(chance("Advance token to nearest Utility"));
    place(&mut game, 0, 4);
    game.dice.load(&[(1, 2)]);

    game.play_one_turn();

    assert_eq!(position(&game, 0), 12);
    assert_eq!(money(&game, 0), 1470);
}

#[test]
fn birthday_collects_from_every_opponent() {
    let mut game = new_game(&["Ada", "Grace", "Linus"]);
    game.community_chest.stack(chest("It is your birthday"));
    place(&mut game, 0, 14);
    game.dice.load(&[(1, 2)]);

    game.play_one_turn();

    assert_eq!(money(&game, 0), 1520);
    assert_eq!(money(&game, 1), 1490);
    assert_eq!(money(&game, 2), 1490);
}

#[test]
fn chairman_pays_every_opponent() {
    let mut game = new_game(&["Ada", "Grace", "Linus"]);
    game.chance.stack(chance("You have been elected Chairman"));
    place(&mut game, 0, 4);
    game.dice.load(&[(1, 2)]);

    game.play_one_turn();

    assert_eq!(money(&game, 0), 1400);
    assert_eq!(money(&game, 1), 1550);
    assert_eq!(money(&game, 2), 1550);
}

#[test]
fn repairs_charge_per_building() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.buy_property(0, 1).unwrap();
    game.buy_property(0, 3).unwrap();
    game.build_house(0, 1).unwrap();
    game.build_house(0, 3).unwrap();
    game.build_house(0, 1).unwrap();
    assert_eq!(game.buildings_of(0), (3, 0));

    game.chance.stack(chance("Make general repairs"));
    place(&mut game, 0, 4);
    game.dice.load(&[(1, 2)]);
    game.play_one_turn();

    assert_eq!(money(&game, 0), 1500 - 120 - 150 - 75);
}

#[test]
fn building_rules_are_enforced() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.buy_property(0, 1).unwrap();

    assert_eq!(game.build_house(0, 0), Err(BuildError::NotAProperty));
    assert_eq!(game.build_house(9, 1), Err(BuildError::PlayerNotFound));
    assert_eq!(game.build_house(1, 1), Err(BuildError::NotOwner));
    assert_eq!(game.build_house(0, 1), Err(BuildError::NoMonopoly));

    game.buy_property(0, 3).unwrap();
    game.mortgage(0, 3).unwrap();
    assert_eq!(game.build_house(0, 1), Err(BuildError::Mortgaged));
    game.unmortgage(0, 3).unwrap();

    assert_eq!(game.build_house(0, 1), Ok(1));
    assert_eq!(game.build_house(0, 1), Err(BuildError::UnevenBuilding));
    assert_eq!(game.build_house(0, 3), Ok(1));

    game.player_mut(0).unwrap().money = 10;
    assert_eq!(game.build_house(0, 1), Err(BuildError::InsufficientFunds));
}

#[test]
fn fifth_building_becomes_a_hotel() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.buy_property(0, 1).unwrap();
    game.buy_property(0, 3).unwrap();
    for _ in 0..4 {
        game.build_house(0, 1).unwrap();
        game.build_house(0, 3).unwrap();
    }
    assert_eq!(game.bank.houses(), 24);

    assert_eq!(game.build_house(0, 1), Ok(5));
    let property = game.board.property_at(1).unwrap();
    assert!(property.has_hotel());
    assert_eq!(property.houses(), 0);
    assert_eq!(game.bank.houses(), 28);
    assert_eq!(game.bank.hotels(), 11);
    assert_eq!(game.rent_due(1, Roll::new(1, 2)), 250);

    assert_eq!(game.build_house(0, 3), Ok(5));
    assert_eq!(game.build_house(0, 1), Err(BuildError::FullyDeveloped));
    assert_eq!(game.buildings_of(0), (0, 2));
}

#[test]
fn building_supply_runs_out() {
    let mut game = Game::new(GameOptions::default().with_building_supply(1, 0), 7);
    start(&mut game, &["Ada", "Grace"]);
    game.buy_property(0, 1).unwrap();
    game.buy_property(0, 3).unwrap();

    assert_eq!(game.build_house(0, 1), Ok(1));
    assert_eq!(game.build_house(0, 3), Err(BuildError::NoHousesLeft));
    assert_eq!(money(&game, 0), 1500 - 120 - 50);
}

#[test]
fn mortgage_and_unmortgage() {
    let mut game = new_game(&["Ada", "Grace"]);
    assert_eq!(game.mortgage(0, 1), Err(MortgageError::NotOwner));
    assert_eq!(game.mortgage(0, 0), Err(MortgageError::NotMortgageable));
    game.buy_property(0, 1).unwrap();
    game.buy_property(0, 5).unwrap();

    assert_eq!(game.unmortgage(0, 1), Err(MortgageError::NotMortgaged));
    assert_eq!(game.mortgage(0, 1), Ok(30));
    assert_eq!(game.mortgage(0, 1), Err(MortgageError::AlreadyMortgaged));
    assert_eq!(game.mortgage(0, 5), Ok(100));
    assert!(game.board.space_at(5).tile.is_mortgaged());
    assert_eq!(money(&game, 0), 1500 - 260 + 130);
    assert_eq!(game.net_worth(0), Some(1370 + 30 + 100));

    assert_eq!(game.unmortgage(0, 1), Ok(33));
    assert!(!game.board.space_at(1).tile.is_mortgaged());
    game.player_mut(0).unwrap().money = 0;
    assert_eq!(game.unmortgage(0, 5), Err(MortgageError::InsufficientFunds));
}

#[test]
fn mortgage_refused_while_group_has_buildings() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.buy_property(0, 1).unwrap();
    game.buy_property(0, 3).unwrap();
    game.build_house(0, 1).unwrap();

    assert_eq!(game.mortgage(0, 3), Err(MortgageError::HasBuildings));
    assert_eq!(game.net_worth(0), Some(1500 - 120 - 50 + 120 + 50));
}

#[test]
fn bankruptcy_to_creditor_pays_what_is_left_and_ends_game() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.buy_property(0, 1).unwrap();
    game.buy_property(1, 39).unwrap();
    game.player_mut(0).unwrap().money = 30;
    place(&mut game, 0, 35);
    game.dice.load(&[(2, 2)]);

    assert!(!game.play_one_turn());

    assert!(game.is_game_over());
    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.player_count(), 1);
    assert_eq!(game.winner().map(Player::id), Some(1));
    assert_eq!(money(&game, 1), 1100 + 30);
    assert_eq!(game.eliminated().len(), 1);
    assert_eq!(game.eliminated()[0].id(), 0);
    assert_eq!(game.owner_of(1), None);
    assert!(game.bank.is_available(1));
    assert!(game.events().contains(&Event::GameOver { winner: Some(1) }));
    assert_eq!(count_events(&game, |e| matches!(e, Event::ExtraTurn { .. })), 0);
    assert!(game.current_player().is_none());
    assert!(!game.play_one_turn());
}

#[test]
fn bankruptcy_returns_buildings_and_mortgages_to_bank() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.buy_property(0, 1).unwrap();
    game.buy_property(0, 3).unwrap();
    game.buy_property(0, 5).unwrap();
    game.mortgage(0, 5).unwrap();
    game.build_house(0, 1).unwrap();
    game.build_house(0, 3).unwrap();
    game.community_chest.stack(chest("Get Out of Jail Free"));
    game.community_chest.draw();
    game.player_mut(0).unwrap().jail_cards.push(DeckKind::CommunityChest);
    assert_eq!(game.community_chest.len(), 15);
    game.player_mut(0).unwrap().money = 50;
    place(&mut game, 0, 35);
    game.dice.load(&[(1, 2)]);

    game.play_one_turn();

    assert!(!game.is_active(0));
    assert_eq!(game.bank.houses(), 32);
    assert_eq!(game.bank.available().len(), 28);
    assert!(!game.board.property_at(1).unwrap().is_developed());
    assert!(!game.board.space_at(5).tile.is_mortgaged());
    assert!(game.properties_of(0).is_empty());
    assert_eq!(game.community_chest.len(), 16);
}

#[test]
fn bankruptcy_keeps_turn_order() {
    let mut game = passive_game(&["Ada", "Grace", "Linus"]);
    game.player_mut(1).unwrap().money = 50;
    place(&mut game, 1, 1);
    game.dice.load(&[(1, 2), (1, 2), (1, 2)]);

    game.play_one_turn();
    assert!(game.play_one_turn());

    assert!(!game.is_active(1));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.player_count(), 2);
    assert_eq!(game.current_player().map(Player::id), Some(2));

    game.play_one_turn();
    assert_eq!(game.current_player().map(Player::id), Some(0));
}

#[test]
fn events_are_journaled_until_taken() {
    let mut game = new_game(&["Ada", "Grace"]);
    game.dice.load(&[(1, 2)]);
    game.play_one_turn();

    assert_eq!(game.events()[0], Event::TurnStarted { player: 0 });
    let events = game.take_events();
    assert!(events.contains(&Event::Bought {
        player: 0,
        position: 3,
        price: 60
    }));
    assert!(game.events().is_empty());
    assert_eq!(events[1].to_string(), "player 0 rolls 1 and 2 (3)");
}

#[test]
fn seeded_games_hold_their_invariants() {
    for seed in 0..4 {
        let mut game = Game::new(GameOptions::default(), seed);
        start(&mut game, &["Ada", "Grace", "Linus", "Alan"]);

        for _ in 0..3000 {
            let continues = game.play_one_turn();

            let owned: usize = game
                .players()
                .iter()
                .map(|player| game.properties_of(player.id()).len())
                .sum();
            assert_eq!(owned + game.bank.available().len(), 28);
            for player in game.players() {
                assert!(player.position < BOARD_SIZE);
                assert!(player.money >= 0);
            }
            assert_eq!(game.chance.len() + count_held(&game, DeckKind::Chance), 16);
            game.take_events();

            if !continues {
                assert!(game.winner().is_some());
                break;
            }
        }
    }
}

fn count_held(game: &Game, deck: DeckKind) -> usize {
    game.players()
        .iter()
        .flat_map(|player| player.jail_cards.iter())
        .filter(|&&kind| kind == deck)
        .count()
}
