use super::SeedConfig;
use crate::display::score_pips;
use crate::engine::ledger::{MAX_PLAYERS, ScoreLedger};
use crate::engine::policies::{Point, Threshold};
use crate::engine::pool::ItemPool;
use crate::engine::{Phase, RoundEngine};
use crate::error::{GameError, Result};
use crate::pools::SPOTTING_ITEMS;
use crate::terminal::{self, Exit, GREEN, Input, TerminalGuard, bold, paint, paint_bg};
use crossterm::event::KeyCode;
use rand::Rng;
use tracing::{debug, info};

const DEFAULT_PLAYERS: usize = 2;
const MAX_NAME_LEN: usize = 20;

pub type FindMeEngine<R> = RoundEngine<Threshold, R>;

#[derive(Debug, PartialEq, Eq)]
pub struct FindMeConfig
{
    pub seed: SeedConfig,
    pub players: usize,
    pub names: Vec<String>,
}

impl Default for FindMeConfig
{
    fn default() -> Self
    {
        Self {
            seed: SeedConfig::default(),
            players: DEFAULT_PLAYERS,
            names: Vec::new(),
        }
    }
}

impl FindMeConfig
{
    pub fn from_args(args: &[String]) -> Result<Self>
    {
        let mut config = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if config.seed.accept(arg, &mut iter)? {
                continue;
            }
            if arg == "--players" {
                config.players = parse_players(next_value(&mut iter, "--players")?)?;
            } else if let Some(value) = arg.strip_prefix("--players=") {
                config.players = parse_players(value)?;
            } else if arg == "--names" {
                config.names = parse_names(next_value(&mut iter, "--names")?);
            } else if let Some(value) = arg.strip_prefix("--names=") {
                config.names = parse_names(value);
            } else {
                return Err(GameError::UnknownOption {
                    game: "find-me",
                    option: arg.clone(),
                });
            }
        }

        if config.names.len() > config.players {
            return Err(GameError::InvalidValue {
                option: "--names",
                reason: format!(
                    "{} names given for {} players",
                    config.names.len(),
                    config.players
                ),
            });
        }
        Ok(config)
    }
}

fn next_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    option: &'static str,
) -> Result<&'a str>
{
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| GameError::InvalidValue {
            option,
            reason: "expected a value".to_string(),
        })
}

fn parse_players(value: &str) -> Result<usize>
{
    let count = value.parse::<usize>().map_err(|_| GameError::InvalidValue {
        option: "--players",
        reason: format!("'{value}' is not a number"),
    })?;
    if count == 0 || count > MAX_PLAYERS {
        return Err(GameError::PlayerCount {
            count,
            max: MAX_PLAYERS,
        });
    }
    Ok(count)
}

fn parse_names(value: &str) -> Vec<String>
{
    value
        .split(',')
        .map(|name| name.trim().to_string())
        .collect()
}

pub fn new_engine<R: Rng>(config: &FindMeConfig, rng: R) -> Result<FindMeEngine<R>>
{
    let pool = ItemPool::new("find-me", &SPOTTING_ITEMS)?;
    let mut policy = Threshold::new(config.players)?;
    for (index, name) in config.names.iter().enumerate() {
        if !name.is_empty() {
            policy.ledger_mut().rename(index, name.as_str())?;
        }
    }
    Ok(RoundEngine::new(pool, policy, rng))
}

#[derive(Debug, Default)]
pub struct Setup
{
    editing: Option<usize>,
}

pub fn run(config: FindMeConfig) -> Result<Exit>
{
    let mut engine = new_engine(&config, config.seed.rng())?;
    let mut setup = Setup::default();
    let mut term = TerminalGuard::enter()?;
    info!(players = config.players, "find me opened");

    loop {
        term.draw(&render(&engine, &setup))?;
        let code = match terminal::read_input()? {
            Input::Interrupt => return Ok(Exit::Quit),
            Input::Key(code) => code,
            Input::Paste(_) | Input::Resize => continue,
        };

        match engine.phase() {
            Phase::NotStarted => {
                if let Some(exit) = handle_setup(&mut engine, &mut setup, code)? {
                    return Ok(exit);
                }
            }
            Phase::Active => handle_play(&mut engine, code)?,
            phase if phase.is_terminal() => {
                if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                    engine.reset();
                }
            }
            _ => {}
        }
    }
}

pub fn handle_setup<R: Rng>(
    engine: &mut FindMeEngine<R>,
    setup: &mut Setup,
    code: KeyCode,
) -> Result<Option<Exit>>
{
    let ledger = engine.policy_mut().ledger_mut();
    if let Some(index) = setup.editing {
        match code {
            KeyCode::Char(ch) => edit_name(ledger, index, |name| {
                if name.chars().count() < MAX_NAME_LEN {
                    name.push(ch);
                }
            })?,
            KeyCode::Backspace => edit_name(ledger, index, |name| {
                name.pop();
            })?,
            KeyCode::Tab => setup.editing = Some((index + 1) % ledger.len()),
            KeyCode::Enter | KeyCode::Esc => setup.editing = None,
            _ => {}
        }
        return Ok(None);
    }

    match code {
        KeyCode::Char(ch @ '1'..='6') => {
            let count = ch as usize - '0' as usize;
            if count != ledger.len() {
                ledger.resize(count)?;
                debug!(count, "player count changed");
            }
        }
        KeyCode::Tab if !ledger.is_team() => setup.editing = Some(0),
        KeyCode::Enter => engine.start(),
        KeyCode::Esc => return Ok(Some(Exit::Home)),
        _ => {}
    }
    Ok(None)
}

fn edit_name(ledger: &mut ScoreLedger, index: usize, edit: impl FnOnce(&mut String)) -> Result<()>
{
    let mut name = ledger
        .name(index)
        .ok_or(GameError::UnknownPlayer(index))?
        .to_string();
    edit(&mut name);
    ledger.rename(index, name)
}

pub fn handle_play<R: Rng>(engine: &mut FindMeEngine<R>, code: KeyCode) -> Result<()>
{
    let players = engine.policy().ledger().len();
    match code {
        KeyCode::Char(' ') | KeyCode::Enter if players == 1 => {
            engine.advance(Point(0))?;
        }
        KeyCode::Char(ch @ '1'..='6') => {
            let index = ch as usize - '1' as usize;
            if index < players {
                engine.advance(Point(index))?;
            }
        }
        KeyCode::Char('e' | 'E') | KeyCode::Esc => engine.reset(),
        _ => {}
    }
    Ok(())
}

pub fn render<R: Rng>(engine: &FindMeEngine<R>, setup: &Setup) -> Vec<String>
{
    let mut lines = vec!["Car Games - Find Me".to_string(), String::new()];
    let ledger = engine.policy().ledger();

    match engine.phase() {
        Phase::NotStarted => render_setup(&mut lines, ledger, setup),
        Phase::Active => render_play(&mut lines, engine),
        _ => {
            lines.push(bold("🎉 Game Over! 🎉"));
            lines.push(String::new());
            let headline = match engine.policy().winner() {
                Some(_) if ledger.is_team() => "Great teamwork!".to_string(),
                Some(winner) => format!("{} Wins!", ledger.players()[winner].name),
                None => String::new(),
            };
            lines.push(bold(&paint(&headline, GREEN)));
            lines.push(String::new());
            lines.push("Enter: play again".to_string());
        }
    }
    lines
}

fn render_setup(lines: &mut Vec<String>, ledger: &ScoreLedger, setup: &Setup)
{
    lines.push(bold("Find Me"));
    lines.push(if ledger.is_team() {
        "Team up to spot items!".to_string()
    } else {
        "Players race to spot items first!".to_string()
    });
    lines.push(String::new());

    let choices: Vec<String> = (1..=MAX_PLAYERS)
        .map(|count| {
            let label = if count == 1 {
                "1 Team".to_string()
            } else {
                format!("{count} Players")
            };
            if count == ledger.len() {
                paint_bg(&format!(" {label} "), GREEN)
            } else {
                format!(" {label} ")
            }
        })
        .collect();
    lines.push(format!("Number of Players: {}", choices.join("|")));
    lines.push(String::new());

    if !ledger.is_team() {
        lines.push("Player Names".to_string());
        for (index, player) in ledger.players().iter().enumerate() {
            let marker = if setup.editing == Some(index) { ">" } else { " " };
            let cursor = if setup.editing == Some(index) { "▏" } else { "" };
            lines.push(format!("{marker} {}. {}{cursor}", index + 1, player.name));
        }
        lines.push(String::new());
    }

    if setup.editing.is_some() {
        lines.push("Type to edit   Tab: next name   Enter: done".to_string());
    } else if ledger.is_team() {
        lines.push("1-6: players   Enter: start game   Esc: home".to_string());
    } else {
        lines.push("1-6: players   Tab: edit names   Enter: start game   Esc: home".to_string());
    }
}

fn render_play<R: Rng>(lines: &mut Vec<String>, engine: &FindMeEngine<R>)
{
    let ledger = engine.policy().ledger();
    lines.push("Find this:".to_string());
    lines.push(String::new());
    lines.push(format!("    {}", engine.current_glyph()));
    lines.push(bold(&paint(engine.current_label(), GREEN)));
    lines.push(String::new());

    if ledger.is_team() {
        lines.push(bold(&paint(
            &format!("Team Score: {}", ledger.players()[0].score),
            GREEN,
        )));
        lines.push(String::new());
        lines.push("Space/Enter: found it   E: end game".to_string());
        return;
    }

    let width = ledger
        .players()
        .iter()
        .map(|player| player.name.chars().count())
        .max()
        .unwrap_or(0);
    for (index, player) in ledger.players().iter().enumerate() {
        lines.push(format!(
            "[{}] {:<width$}  {}",
            index + 1,
            player.name,
            paint(&score_pips(player.score, ledger.threshold()), GREEN),
        ));
    }
    lines.push(String::new());
    lines.push(format!("1-{}: score a point   E: end game", ledger.len()));
}
