use super::SeedConfig;
use crate::display::{gallows_segments, guessed_letters, masked_phrase, rasterize};
use crate::engine::policies::Penalty;
use crate::engine::pool::ItemPool;
use crate::engine::{Phase, RoundEngine};
use crate::error::Result;
use crate::input::LetterEntry;
use crate::pools::PHRASES;
use crate::terminal::{self, Exit, GREEN, Input, RED, TerminalGuard, bold, paint, paint_bg};
use crossterm::event::KeyCode;
use rand::Rng;
use tracing::{debug, info};

const CANVAS_WIDTH: usize = 30;
const CANVAS_HEIGHT: usize = 12;
const WARN_AFTER: u32 = 3;

pub type HangmanEngine<R> = RoundEngine<Penalty, R>;

pub fn new_engine<R: Rng>(rng: R) -> Result<HangmanEngine<R>>
{
    let pool = ItemPool::new("hangman", &PHRASES)?;
    Ok(RoundEngine::new(pool, Penalty::default(), rng))
}

pub fn run(config: SeedConfig) -> Result<Exit>
{
    let mut engine = new_engine(config.rng())?;
    let mut entry = LetterEntry::default();
    let mut term = TerminalGuard::enter()?;
    info!("hangman opened");

    loop {
        term.draw(&render(&engine, &entry))?;
        let input = terminal::read_input()?;
        if let Some(exit) = handle_input(&mut engine, &mut entry, input)? {
            return Ok(exit);
        }
    }
}

pub fn handle_input<R: Rng>(
    engine: &mut HangmanEngine<R>,
    entry: &mut LetterEntry,
    input: Input,
) -> Result<Option<Exit>>
{
    let code = match input {
        Input::Interrupt => return Ok(Some(Exit::Quit)),
        Input::Resize => return Ok(None),
        Input::Paste(text) => {
            guess(engine, entry, &text)?;
            return Ok(None);
        }
        Input::Key(code) => code,
    };

    if engine.phase() == Phase::NotStarted {
        match code {
            KeyCode::Enter => {
                engine.start();
                entry.focus();
            }
            KeyCode::Esc => return Ok(Some(Exit::Home)),
            _ => {}
        }
        return Ok(None);
    }

    match code {
        KeyCode::Tab => {
            engine.start();
            entry.focus();
        }
        KeyCode::Esc => {
            engine.reset();
            entry.blur();
        }
        KeyCode::Char(ch) => {
            let mut buf = [0u8; 4];
            guess(engine, entry, ch.encode_utf8(&mut buf))?;
        }
        _ => {}
    }
    Ok(None)
}

fn guess<R: Rng>(engine: &mut HangmanEngine<R>, entry: &mut LetterEntry, text: &str) -> Result<()>
{
    if let Some(letter) = engine.enter_text(entry, text)? {
        debug!(%letter, phase = ?engine.phase(), "letter guessed");
    }
    if engine.phase() != Phase::Active {
        entry.blur();
    }
    Ok(())
}

pub fn render<R: Rng>(engine: &HangmanEngine<R>, entry: &LetterEntry) -> Vec<String>
{
    let mut lines = vec!["Car Games - Hangman".to_string(), String::new()];

    if engine.phase() == Phase::NotStarted {
        lines.push(bold("Hangman"));
        lines.push(String::new());
        lines.push("Guess the phrase letter by letter.".to_string());
        lines.push("Be careful - too many wrong guesses and you lose!".to_string());
        lines.push(String::new());
        lines.push("Enter: start game   Esc: home".to_string());
        return lines;
    }

    let round = engine.round();
    let phrase = engine.current_label();
    let incorrect = round.counter().value();

    lines.extend(rasterize(
        gallows_segments(incorrect),
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
    ));
    lines.push(String::new());
    lines.push(format!("  {}", bold(&masked_phrase(phrase, round.consumed()).to_string())));
    lines.push(String::new());

    match engine.phase() {
        Phase::Won => lines.push(bold(&paint("🎉 You Won! 🎉", GREEN))),
        Phase::Lost => {
            lines.push(bold(&paint("💀 Game Over 💀", RED)));
            lines.push(format!("The phrase was: {phrase}"));
        }
        _ => {
            let tally = format!(
                "Incorrect guesses: {}/{}",
                incorrect,
                engine.policy().max_incorrect()
            );
            lines.push(if incorrect > WARN_AFTER {
                paint(&tally, RED)
            } else {
                tally
            });

            let guessed = guessed_letters(phrase, round.consumed());
            if !guessed.is_empty() {
                let tiles: Vec<String> = guessed
                    .into_iter()
                    .map(|(letter, hit)| {
                        let tile = format!(" {} ", letter.to_ascii_uppercase());
                        paint_bg(&tile, if hit { GREEN } else { RED })
                    })
                    .collect();
                lines.push(format!("Guessed letters: {}", tiles.join(" ")));
            }

            let cursor = if entry.is_focused() { "▏" } else { "" };
            lines.push(format!("Type a letter: {}{cursor}", entry.buffer()));
        }
    }

    lines.push(String::new());
    lines.push("Tab: new phrase   Esc: end game".to_string());
    lines
}
