use super::SeedConfig;
use crate::display::progress_fraction;
use crate::engine::policies::{Exhaustion, Sighting};
use crate::engine::pool::ItemPool;
use crate::engine::{Phase, RoundEngine};
use crate::error::Result;
use crate::pools::RAINBOW_COLORS;
use crate::terminal::{self, BLUE, Exit, Input, TerminalGuard, bold, paint_bg};
use crossterm::event::KeyCode;
use rand::Rng;
use tracing::info;

const PROGRESS_WIDTH: usize = 28;

pub type RainbowEngine<R> = RoundEngine<Exhaustion, R>;

pub fn new_engine<R: Rng>(rng: R) -> Result<RainbowEngine<R>>
{
    let pool = ItemPool::new("rainbow-road", &RAINBOW_COLORS)?;
    let mut engine = RoundEngine::new(pool, Exhaustion::default(), rng);
    engine.start();
    Ok(engine)
}

pub fn run(config: SeedConfig) -> Result<Exit>
{
    let mut engine = new_engine(config.rng())?;
    let mut term = TerminalGuard::enter()?;
    info!("rainbow road opened");

    loop {
        term.draw(&render(&engine))?;
        if let Some(exit) = handle_input(&mut engine, terminal::read_input()?)? {
            return Ok(exit);
        }
    }
}

pub fn handle_input<R: Rng>(engine: &mut RainbowEngine<R>, input: Input) -> Result<Option<Exit>>
{
    let code = match input {
        Input::Interrupt => return Ok(Some(Exit::Quit)),
        Input::Key(code) => code,
        Input::Paste(_) | Input::Resize => return Ok(None),
    };

    match (engine.phase(), code) {
        (_, KeyCode::Esc) => return Ok(Some(Exit::Home)),
        (Phase::Active, KeyCode::Enter | KeyCode::Char(' ')) => {
            engine.advance(Sighting::Found)?;
        }
        (Phase::Active, KeyCode::Char('s' | 'S')) => {
            engine.advance(Sighting::Skipped)?;
        }
        (phase, KeyCode::Char('r' | 'R') | KeyCode::Enter) if phase.is_terminal() => {
            engine.reset();
            engine.start();
        }
        _ => {}
    }
    Ok(None)
}

pub fn render<R: Rng>(engine: &RainbowEngine<R>) -> Vec<String>
{
    let mut lines = vec!["Car Games - Rainbow Road".to_string(), String::new()];

    if engine.phase().is_terminal() {
        lines.push(bold("🌈 Congratulations! 🌈"));
        lines.push(String::new());
        lines.push("You found all the rainbow colors!".to_string());
        lines.push(String::new());
        lines.push("R/Enter: play again   Esc: home".to_string());
        return lines;
    }

    let found = engine.round().consumed().len();
    let total = engine.pool().len();

    lines.push(bold(&format!("Find a {} Vehicle", engine.current_label())));
    lines.push(String::new());
    if let Some(swatch) = engine.pool().swatch(engine.round().current_index()) {
        let blank = " ".repeat(16);
        lines.push(format!("  {}", paint_bg(&blank, swatch)));
        lines.push(format!("  {}", paint_bg(&format!("{:^16}", "🚗"), swatch)));
        lines.push(format!("  {}", paint_bg(&blank, swatch)));
        lines.push(String::new());
    }
    lines.push(format!(
        "  {}",
        terminal::bar(progress_fraction(found, total), PROGRESS_WIDTH, BLUE)
    ));
    lines.push(format!("  {found} of {total} colors found"));
    lines.push(String::new());

    let skip = if engine.policy().can_skip(engine.round(), engine.pool()) {
        "S: skip"
    } else {
        "S: skip (unavailable)"
    };
    lines.push(format!("Enter/Space: found it   {skip}   Esc: home"));
    lines
}

#[cfg(test)]
mod tests
{
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn press(engine: &mut RainbowEngine<StdRng>, code: KeyCode) -> Option<Exit>
    {
        handle_input(engine, Input::Key(code)).unwrap()
    }

    #[test]
    fn opens_on_red()
    {
        let engine = new_engine(StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(engine.phase(), Phase::Active);
        let lines = render(&engine);
        assert!(lines.iter().any(|line| line.contains("Find a Red Vehicle")));
        assert!(lines.iter().any(|line| line.contains("0 of 7 colors found")));
    }

    #[test]
    fn every_color_carries_its_swatch()
    {
        let engine = new_engine(StdRng::seed_from_u64(0)).unwrap();
        for index in 0..engine.pool().len() {
            assert!(engine.pool().swatch(index).is_some());
        }
        let red = engine.pool().swatch(0).unwrap();
        let expected = format!("\x1b[48;2;{};{};{}m", red.r, red.g, red.b);
        assert!(render(&engine).iter().any(|line| line.contains(&expected)));
    }

    #[test]
    fn keys_find_and_skip()
    {
        let mut engine = new_engine(StdRng::seed_from_u64(0)).unwrap();
        press(&mut engine, KeyCode::Char(' '));
        assert_eq!(engine.current_label(), "Orange");
        press(&mut engine, KeyCode::Char('s'));
        assert_eq!(engine.current_label(), "Yellow");
        assert_eq!(engine.policy().skipped().len(), 1);
        assert_eq!(press(&mut engine, KeyCode::Esc), Some(Exit::Home));
    }

    #[test]
    fn play_again_after_every_color_is_found()
    {
        let mut engine = new_engine(StdRng::seed_from_u64(0)).unwrap();
        for _ in 0..7 {
            press(&mut engine, KeyCode::Enter);
        }
        assert_eq!(engine.phase(), Phase::Complete);
        assert!(render(&engine).iter().any(|line| line.contains("You found all the rainbow colors!")));

        // Skip does nothing on the congratulations screen.
        press(&mut engine, KeyCode::Char('s'));
        assert_eq!(engine.phase(), Phase::Complete);

        press(&mut engine, KeyCode::Char('r'));
        assert_eq!(engine.phase(), Phase::Active);
        assert_eq!(engine.current_label(), "Red");
        assert!(engine.round().consumed().is_empty());
    }
}
