pub use crate::display::Rgb;
use crate::error::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};

pub const GREEN: Rgb = Rgb { r: 52, g: 199, b: 89 };
pub const RED: Rgb = Rgb { r: 255, g: 59, b: 48 };
pub const ORANGE: Rgb = Rgb { r: 255, g: 149, b: 0 };
pub const GREY: Rgb = Rgb { r: 142, g: 142, b: 147 };
pub const BLUE: Rgb = Rgb { r: 0, g: 122, b: 255 };

pub enum Input
{
    Key(KeyCode),
    Paste(String),
    Interrupt,
    Resize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit
{
    Home,
    Quit,
}

pub struct TerminalGuard
{
    stdout: Stdout,
}

impl TerminalGuard
{
    pub fn enter() -> Result<Self>
    {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste, Hide)?;
        Ok(Self { stdout })
    }

    pub fn draw(&mut self, lines: &[String]) -> Result<()>
    {
        let output = format!("{}\r\n", lines.join("\r\n"));
        queue!(self.stdout, MoveTo(0, 0), Clear(ClearType::All))?;
        self.stdout.write_all(output.as_bytes())?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalGuard
{
    fn drop(&mut self)
    {
        let _ = execute!(self.stdout, Show, DisableBracketedPaste, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub fn read_input() -> Result<Input>
{
    loop {
        match event::read()? {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) => {
                if kind == KeyEventKind::Release {
                    continue;
                }
                if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(Input::Interrupt);
                }
                return Ok(Input::Key(code));
            }
            Event::Paste(text) => return Ok(Input::Paste(text)),
            Event::Resize(..) => return Ok(Input::Resize),
            _ => {}
        }
    }
}

pub fn paint(text: &str, color: Rgb) -> String
{
    format!("\x1b[38;2;{};{};{}m{}\x1b[0m", color.r, color.g, color.b, text)
}

pub fn paint_bg(text: &str, color: Rgb) -> String
{
    format!(
        "\x1b[48;2;{};{};{}m\x1b[38;2;255;255;255m{}\x1b[0m",
        color.r, color.g, color.b, text
    )
}

pub fn bold(text: &str) -> String
{
    format!("\x1b[1m{text}\x1b[0m")
}

pub fn bar(fraction: f32, width: usize, color: Rgb) -> String
{
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!(
        "{}{}",
        paint(&"█".repeat(filled), color),
        paint(&"░".repeat(width - filled), GREY)
    )
}
