//! CLI property game example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use boardwalk::{Game, GameOptions, Money, Player, PlayerId, Policy, Space, Tile};

const OPPONENTS: [&str; 3] = ["Ada", "Grace", "Linus"];
const TURN_LIMIT: usize = 2000;
/// Cash the computer players keep back before building.
const BUILD_RESERVE: Money = 300;

/// Asks the human about purchases and lets the computer buy what it can.
struct PromptPolicy {
    human: PlayerId,
}

impl Policy for PromptPolicy {
    fn should_buy(&mut self, player: &Player, space: &Space, price: Money) -> bool {
        if player.id() != self.human {
            return player.can_afford(price);
        }
        let answer = prompt_line(&format!(
            "Buy {} for ${price}? You have ${} (y/n): ",
            space.name(),
            player.money
        ));
        matches!(answer.as_str(), "y" | "yes")
    }

    fn should_pay_jail_fee(&mut self, player: &Player) -> bool {
        if player.id() != self.human {
            return false;
        }
        let answer = prompt_line("Pay the jail fee now? (y/n): ");
        matches!(answer.as_str(), "y" | "yes")
    }
}

fn main() {
    env_logger::init();
    println!("Property game CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    let Ok(human) = game.join("You") else {
        return;
    };
    for name in OPPONENTS {
        if let Err(err) = game.join(name) {
            println!("Join error: {err:?}");
        }
    }
    game.set_policy(Box::new(PromptPolicy { human }));

    if let Err(err) = game.initialize_game() {
        println!("Start error: {err:?}");
        return;
    }

    for _ in 0..TURN_LIMIT {
        let Some(current) = game.current_player().map(Player::id) else {
            break;
        };

        if current == human {
            print_status(&game, human);
            if !human_actions(&mut game, human) {
                println!("Goodbye.");
                return;
            }
        } else {
            build_everywhere(&mut game, current);
        }

        let continues = game.play_one_turn();
        for event in game.take_events() {
            println!("  {event}");
        }
        if !continues {
            break;
        }
    }

    print_standings(&game);
}

/// Handles the human's between-turn actions. Returns `false` to quit.
fn human_actions(game: &mut Game, human: PlayerId) -> bool {
    loop {
        let line =
            prompt_line("[enter]roll [b N]build [m N]mortgage [u N]unmortgage [j]ail fee [q]uit: ");
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let position = words.next().and_then(|word| word.parse::<u8>().ok());

        let result = match (command, position) {
            ("", _) => return true,
            ("q" | "quit", _) => return false,
            ("b", Some(position)) => game
                .build_house(human, position)
                .map(|_| ())
                .map_err(|err| err.to_string()),
            ("m", Some(position)) => game
                .mortgage(human, position)
                .map(|_| ())
                .map_err(|err| err.to_string()),
            ("u", Some(position)) => game
                .unmortgage(human, position)
                .map(|_| ())
                .map_err(|err| err.to_string()),
            ("j", _) => game.pay_jail_fee(human).map_err(|err| err.to_string()),
            _ => Err(String::from("unknown command")),
        };

        match result {
            Ok(()) => {
                for event in game.take_events() {
                    println!("  {event}");
                }
            }
            Err(err) => println!("Action error: {err}"),
        }
    }
}

/// Builds on every complete color group while cash stays above the reserve.
fn build_everywhere(game: &mut Game, player_id: PlayerId) {
    loop {
        let mut built = false;
        for position in game.properties_of(player_id) {
            let money = game.player(player_id).map_or(0, |player| player.money);
            let Some(property) = game.board.property_at(position) else {
                continue;
            };
            if money - property.group().house_cost() < BUILD_RESERVE {
                continue;
            }
            if game.build_house(player_id, position).is_ok() {
                built = true;
            }
        }
        if !built {
            break;
        }
    }
}

fn print_status(game: &Game, human: PlayerId) {
    let Some(player) = game.player(human) else {
        return;
    };
    let space = game.board.space_at(player.position);
    let jail = if game.is_in_jail(human) { " (in jail)" } else { "" };
    println!(
        "\n{}: ${} on {} ({}){jail}",
        player.name(),
        player.money,
        space.name(),
        player.position
    );

    for position in game.properties_of(human) {
        let space = game.board.space_at(position);
        let detail = match &space.tile {
            Tile::Property(property) if property.has_hotel() => String::from("hotel"),
            Tile::Property(property) => format!("{} houses", property.houses()),
            _ => String::new(),
        };
        let mortgaged = if space.tile.is_mortgaged() {
            colorize(" mortgaged", "90")
        } else {
            String::new()
        };
        println!("  [{position:>2}] {} {detail}{mortgaged}", space.name());
    }
}

fn print_standings(game: &Game) {
    println!();
    if let Some(winner) = game.winner() {
        println!("{} wins with ${}.", winner.name(), winner.money);
    } else {
        println!("No winner yet. Standings:");
        let mut standings: Vec<(&str, Money)> = game
            .players()
            .iter()
            .map(|player| {
                (
                    player.name(),
                    game.net_worth(player.id()).unwrap_or(player.money),
                )
            })
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1));
        for (name, worth) in standings {
            println!("  {name}: ${worth}");
        }
    }
    for player in game.eliminated() {
        println!("  {} went bankrupt.", player.name());
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return String::from("q"),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
