use super::SeedConfig;
use crate::display::countdown_fraction;
use crate::engine::policies::{Countdown, Question};
use crate::engine::pool::ItemPool;
use crate::engine::{Phase, RoundEngine};
use crate::error::Result;
use crate::pools::QUESTION_ITEMS;
use crate::terminal::{self, Exit, Input, ORANGE, RED, TerminalGuard, bold, paint};
use crossterm::event::KeyCode;
use rand::Rng;
use tracing::info;

const LOW_QUESTIONS: u32 = 5;

pub type QuestionsEngine<R> = RoundEngine<Countdown, R>;

pub fn new_engine<R: Rng>(rng: R) -> Result<QuestionsEngine<R>>
{
    let pool = ItemPool::new("twenty-questions", &QUESTION_ITEMS)?;
    Ok(RoundEngine::new(pool, Countdown::default(), rng))
}

pub fn run(config: SeedConfig) -> Result<Exit>
{
    let mut engine = new_engine(config.rng())?;
    let mut term = TerminalGuard::enter()?;
    info!("twenty questions opened");

    loop {
        term.draw(&render(&engine))?;
        if let Some(exit) = handle_input(&mut engine, terminal::read_input()?)? {
            return Ok(exit);
        }
    }
}

pub fn handle_input<R: Rng>(engine: &mut QuestionsEngine<R>, input: Input) -> Result<Option<Exit>>
{
    let code = match input {
        Input::Interrupt => return Ok(Some(Exit::Quit)),
        Input::Key(code) => code,
        Input::Paste(_) | Input::Resize => return Ok(None),
    };

    if engine.phase() != Phase::Active {
        match code {
            KeyCode::Enter => engine.start(),
            KeyCode::Esc => return Ok(Some(Exit::Home)),
            _ => {}
        }
        return Ok(None);
    }

    match code {
        KeyCode::Char('-') | KeyCode::Down => {
            engine.advance(Question::Ask)?;
        }
        KeyCode::Char('+' | '=') | KeyCode::Up => {
            engine.advance(Question::GiveBack)?;
        }
        KeyCode::Char('a' | 'A') | KeyCode::Tab => {
            engine.advance(Question::ToggleAnswer)?;
        }
        KeyCode::Char('n' | 'N') => engine.start(),
        KeyCode::Char('e' | 'E') | KeyCode::Esc => engine.reset(),
        _ => {}
    }
    Ok(None)
}

pub fn render<R: Rng>(engine: &QuestionsEngine<R>) -> Vec<String>
{
    let mut lines = vec!["Car Games - 20 Questions".to_string(), String::new()];

    if engine.phase() != Phase::Active {
        lines.push(bold("20 Questions"));
        lines.push(String::new());
        lines.push("The person holding the device will see a word.".to_string());
        lines.push("Others must guess it using yes/no questions!".to_string());
        lines.push(String::new());
        lines.push("Enter: start game   Esc: home".to_string());
        return lines;
    }

    let label = engine.current_label();
    let glyph = engine.current_glyph();
    if engine.policy().is_revealed() {
        let banner = format!("  {glyph}  {label}  {glyph}  ");
        let rule = "═".repeat(banner.chars().count() + 2);
        lines.push(format!("╔{rule}╗"));
        lines.push(format!("║ {} ║", bold(&banner)));
        lines.push(format!("╚{rule}╝"));
    } else {
        lines.push("Your word is:".to_string());
        lines.push(format!("{}  {glyph}", bold(&paint(label, ORANGE))));
        lines.push(String::new());
    }
    lines.push(String::new());

    let counter = engine.round().counter();
    let remaining = counter.value();
    let color = if remaining > LOW_QUESTIONS { ORANGE } else { RED };
    lines.push(format!(
        "  {}",
        terminal::bar(
            countdown_fraction(remaining, counter.max()),
            counter.max() as usize,
            color
        )
    ));
    let count = bold(&remaining.to_string());
    let count = if remaining > LOW_QUESTIONS {
        count
    } else {
        paint(&count, RED)
    };
    lines.push(format!("  {count} questions left"));
    lines.push(String::new());

    let ask = if counter.is_at_zero() {
        "-: asked one (none left)"
    } else {
        "-: asked one"
    };
    let give_back = if counter.is_at_max() {
        "+: give one back (full)"
    } else {
        "+: give one back"
    };
    let answer = if engine.policy().is_revealed() {
        "A: hide answer"
    } else {
        "A: show answer"
    };
    lines.push(format!("{ask}   {give_back}   {answer}"));
    lines.push("N: new word   E: end game".to_string());
    lines
}

#[cfg(test)]
mod tests
{
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn start_screen_until_started()
    {
        let engine = new_engine(StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(engine.phase(), Phase::NotStarted);
        assert!(render(&engine).iter().any(|line| line.contains("Enter: start game")));
    }

    #[test]
    fn shows_word_glyph_and_count()
    {
        let mut engine = new_engine(StdRng::seed_from_u64(5)).unwrap();
        engine.start();
        engine.advance(Question::Ask).unwrap();
        let lines = render(&engine).join("\n");
        assert!(lines.contains(engine.current_label()));
        assert!(lines.contains(engine.current_glyph()));
        assert!(lines.contains("19"));
        assert!(lines.contains("questions left"));
    }

    #[test]
    fn every_item_has_a_glyph()
    {
        let engine = new_engine(StdRng::seed_from_u64(5)).unwrap();
        for index in 0..engine.pool().len() {
            assert_ne!(engine.pool().glyph(index), crate::engine::pool::UNKNOWN_GLYPH);
        }
    }

    fn press(engine: &mut QuestionsEngine<StdRng>, code: KeyCode) -> Option<Exit>
    {
        handle_input(engine, Input::Key(code)).unwrap()
    }

    #[test]
    fn new_word_hides_answer_and_refills_questions()
    {
        let mut engine = new_engine(StdRng::seed_from_u64(5)).unwrap();
        press(&mut engine, KeyCode::Enter);
        assert_eq!(engine.phase(), Phase::Active);

        press(&mut engine, KeyCode::Char('-'));
        press(&mut engine, KeyCode::Down);
        press(&mut engine, KeyCode::Char('a'));
        assert!(engine.policy().is_revealed());
        assert_eq!(engine.round().counter().value(), 18);

        press(&mut engine, KeyCode::Char('n'));
        assert_eq!(engine.phase(), Phase::Active);
        assert!(!engine.policy().is_revealed());
        assert_eq!(engine.round().counter().value(), 20);
    }

    #[test]
    fn end_game_returns_to_start_screen()
    {
        let mut engine = new_engine(StdRng::seed_from_u64(5)).unwrap();
        press(&mut engine, KeyCode::Enter);
        press(&mut engine, KeyCode::Up);
        assert_eq!(engine.round().counter().value(), 20);

        assert_eq!(press(&mut engine, KeyCode::Char('e')), None);
        assert_eq!(engine.phase(), Phase::NotStarted);
        assert_eq!(press(&mut engine, KeyCode::Esc), Some(Exit::Home));
    }
}
