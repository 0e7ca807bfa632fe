use car_games::terminal::Exit;
use car_games::{GameError, Result, games, logging};
use std::env;
use std::io::Write;
use tracing::info;

fn main()
{
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()>
{
    logging::init()?;

    let mut args = env::args().skip(1);
    let command = args.next();
    let rest: Vec<String> = args.collect();
    match command.as_deref() {
        None => home_screen(),
        Some("list") => {
            list_games();
            Ok(())
        }
        Some("-h") | Some("--help") => {
            print_help();
            Ok(())
        }
        Some(name) if games::registry().iter().any(|game| game.name == name) => {
            games::run(name, &rest)?;
            Ok(())
        }
        Some(other) => Err(GameError::UnknownCommand(other.to_string())),
    }
}

fn home_screen() -> Result<()>
{
    let registry = games::registry();
    loop {
        println!("Car Games");
        println!();
        println!("Select a game:");
        for (idx, game) in registry.iter().enumerate() {
            println!("  {}. {} - {}", idx + 1, game.title, game.description);
        }
        println!();
        print!("Enter number or name (default 1, q to quit): ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input)? == 0 {
            return Ok(());
        }
        let choice = input.trim();
        if choice.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        let name = match select(&registry, choice) {
            Some(name) => name,
            None => {
                eprintln!("{}", GameError::InvalidSelection(choice.to_string()));
                println!();
                continue;
            }
        };

        info!(game = name, "selected from home screen");
        if games::run(name, &[])? == Exit::Quit {
            return Ok(());
        }
        println!();
    }
}

fn select(registry: &[games::GameDescriptor], choice: &str) -> Option<&'static str>
{
    if choice.is_empty() {
        return registry.first().map(|game| game.name);
    }
    if let Ok(index) = choice.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|idx| registry.get(idx))
            .map(|game| game.name);
    }
    registry
        .iter()
        .find(|game| game.name.eq_ignore_ascii_case(choice) || game.title.eq_ignore_ascii_case(choice))
        .map(|game| game.name)
}

fn list_games()
{
    println!("Available games:");
    for game in games::registry() {
        println!("  {:<17} - {}", game.name, game.description);
    }
}

fn print_help()
{
    println!("car-games");
    println!("\nUsage:");
    println!("  car-games                 open the home screen");
    println!("  car-games list");
    println!("  car-games rainbow-road [--seed=N]");
    println!("  car-games twenty-questions [--seed=N]");
    println!("  car-games find-me [--players=1-6] [--names=A,B,...] [--seed=N]");
    println!("  car-games hangman [--seed=N]");
    println!("\nNotes:");
    println!("  --players=1 plays Find Me as a single team.");
    println!("  Set CAR_GAMES_LOG=<file> to write debug logs to a file.");
    println!("  Ctrl-C leaves any game.");
}
