use std::collections::BTreeSet;
use std::fmt;

pub const PLACEHOLDER: char = '_';
pub const SEPARATOR: char = '/';
pub const PIP_FILLED: char = '●';
pub const PIP_EMPTY: char = '○';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb
{
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn fold_case(ch: char) -> char
{
    ch.to_lowercase().next().unwrap_or(ch)
}

/// One token per phrase character: guessed letters (lowercased), the
/// placeholder for unguessed ones, the separator for spaces and any other
/// character as is. `Display` joins the tokens with single spaces.
#[derive(Clone)]
pub struct MaskedPhrase<'a>
{
    chars: std::str::Chars<'a>,
    consumed: &'a BTreeSet<char>,
}

impl Iterator for MaskedPhrase<'_>
{
    type Item = char;

    fn next(&mut self) -> Option<char>
    {
        let ch = self.chars.next()?;
        let token = if ch.is_alphabetic() {
            let lower = fold_case(ch);
            if self.consumed.contains(&lower) {
                lower
            } else {
                PLACEHOLDER
            }
        } else if ch == ' ' {
            SEPARATOR
        } else {
            ch
        };
        Some(token)
    }
}

impl fmt::Display for MaskedPhrase<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        for (idx, token) in self.clone().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

pub fn masked_phrase<'a>(phrase: &'a str, consumed: &'a BTreeSet<char>) -> MaskedPhrase<'a>
{
    MaskedPhrase {
        chars: phrase.chars(),
        consumed,
    }
}

pub fn is_complete(phrase: &str, consumed: &BTreeSet<char>) -> bool
{
    phrase
        .chars()
        .filter(|ch| ch.is_alphabetic())
        .all(|ch| consumed.contains(&fold_case(ch)))
}

pub fn guessed_letters(phrase: &str, consumed: &BTreeSet<char>) -> Vec<(char, bool)>
{
    let lower = phrase.to_lowercase();
    consumed
        .iter()
        .map(|&letter| (letter, lower.contains(letter)))
        .collect()
}

pub fn progress_fraction(found: usize, total: usize) -> f32
{
    if total == 0 {
        return 1.0;
    }
    (found as f32 / total as f32).clamp(0.0, 1.0)
}

pub fn countdown_fraction(remaining: u32, limit: u32) -> f32
{
    progress_fraction(remaining as usize, limit as usize)
}

pub fn score_pips(score: u32, slots: u32) -> String
{
    (0..slots)
        .map(|slot| if slot < score { PIP_FILLED } else { PIP_EMPTY })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point
{
    pub x: f32,
    pub y: f32,
}

const fn pt(x: f32, y: f32) -> Point
{
    Point { x, y }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape
{
    Line { from: Point, to: Point },
    /// Ellipse inscribed in the box at `origin` with `size`.
    Ring { origin: Point, size: Point },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment
{
    pub name: &'static str,
    pub shape: Shape,
}

pub const GALLOWS: [Segment; 12] = [
    Segment {
        name: "base",
        shape: Shape::Line { from: pt(0.1, 0.9), to: pt(0.5, 0.9) },
    },
    Segment {
        name: "pole",
        shape: Shape::Line { from: pt(0.2, 0.9), to: pt(0.2, 0.1) },
    },
    Segment {
        name: "beam",
        shape: Shape::Line { from: pt(0.2, 0.1), to: pt(0.6, 0.1) },
    },
    Segment {
        name: "floor brace",
        shape: Shape::Line { from: pt(0.3, 0.9), to: pt(0.2, 0.7) },
    },
    Segment {
        name: "corner brace",
        shape: Shape::Line { from: pt(0.2, 0.25), to: pt(0.35, 0.1) },
    },
    Segment {
        name: "noose",
        shape: Shape::Line { from: pt(0.6, 0.1), to: pt(0.6, 0.25) },
    },
    Segment {
        name: "head",
        shape: Shape::Ring { origin: pt(0.55, 0.25), size: pt(0.1, 0.1) },
    },
    Segment {
        name: "body",
        shape: Shape::Line { from: pt(0.6, 0.35), to: pt(0.6, 0.65) },
    },
    Segment {
        name: "left arm",
        shape: Shape::Line { from: pt(0.6, 0.45), to: pt(0.5, 0.45) },
    },
    Segment {
        name: "right arm",
        shape: Shape::Line { from: pt(0.6, 0.45), to: pt(0.7, 0.45) },
    },
    Segment {
        name: "left leg",
        shape: Shape::Line { from: pt(0.6, 0.65), to: pt(0.5, 0.8) },
    },
    Segment {
        name: "right leg",
        shape: Shape::Line { from: pt(0.6, 0.65), to: pt(0.7, 0.8) },
    },
];

/// Segment `k` (1-based) is visible once `incorrect >= k`.
pub fn gallows_segments(incorrect: u32) -> &'static [Segment]
{
    let visible = (incorrect as usize).min(GALLOWS.len());
    &GALLOWS[..visible]
}

pub fn rasterize(segments: &[Segment], width: usize, height: usize) -> Vec<String>
{
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut grid = vec![vec![' '; width]; height];
    let scale_x = (width - 1) as f32;
    let scale_y = (height - 1) as f32;

    for segment in segments {
        match segment.shape {
            Shape::Line { from, to } => {
                let (x0, y0) = (from.x * scale_x, from.y * scale_y);
                let (x1, y1) = (to.x * scale_x, to.y * scale_y);
                let (dx, dy) = (x1 - x0, y1 - y0);
                let ch = if dx.abs() < 0.5 {
                    '|'
                } else if dy.abs() < 0.5 {
                    '-'
                } else if (dx > 0.0) == (dy > 0.0) {
                    '\\'
                } else {
                    '/'
                };
                let steps = (dx.abs().max(dy.abs()).ceil() as usize).max(1) * 2;
                for step in 0..=steps {
                    let t = step as f32 / steps as f32;
                    plot(&mut grid, x0 + dx * t, y0 + dy * t, ch);
                }
            }
            Shape::Ring { origin, size } => {
                let rx = size.x * scale_x / 2.0;
                let ry = size.y * scale_y / 2.0;
                let cx = origin.x * scale_x + rx;
                let cy = origin.y * scale_y + ry;
                for step in 0..16 {
                    let angle = step as f32 * std::f32::consts::TAU / 16.0;
                    plot(&mut grid, cx + rx * angle.cos(), cy + ry * angle.sin(), 'O');
                }
            }
        }
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect())
        .collect()
}

fn plot(grid: &mut [Vec<char>], x: f32, y: f32, ch: char)
{
    let (col, row) = (x.round(), y.round());
    if col < 0.0 || row < 0.0 {
        return;
    }
    if let Some(cell) = grid
        .get_mut(row as usize)
        .and_then(|cells| cells.get_mut(col as usize))
    {
        *cell = ch;
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn letters(text: &str) -> BTreeSet<char>
    {
        text.chars().collect()
    }

    #[test]
    fn masks_road_trip()
    {
        let consumed = letters("roadt");
        let masked = masked_phrase("Road trip", &consumed).to_string();
        assert_eq!(masked, "r o a d / t _ _ _");
    }

    #[test]
    fn punctuation_passes_through()
    {
        let consumed = letters("");
        let masked = masked_phrase("Let's go!", &consumed).to_string();
        assert_eq!(masked, "_ _ _ ' _ / _ _ !");
    }

    #[test]
    fn masked_tokens_are_one_per_character()
    {
        let consumed = letters("m");
        let tokens: Vec<char> = masked_phrase("Museum", &consumed).collect();
        assert_eq!(tokens, vec!['m', '_', '_', '_', '_', 'm']);
    }

    #[test]
    fn completion_requires_every_letter()
    {
        assert!(!is_complete("City break", &letters("citybrea")));
        assert!(is_complete("City break", &letters("citybreak")));
        assert!(is_complete("City break", &letters("citybreakxz")));
        assert!(is_complete("", &letters("")));
    }

    #[test]
    fn guessed_letters_are_sorted_and_tagged()
    {
        let consumed = letters("zoa");
        assert_eq!(
            guessed_letters("Road trip", &consumed),
            vec![('a', true), ('o', true), ('z', false)]
        );
    }

    #[test]
    fn gallows_reveals_cumulatively()
    {
        assert!(gallows_segments(0).is_empty());
        for k in 0..12u32 {
            let now = gallows_segments(k);
            let next = gallows_segments(k + 1);
            assert_eq!(now.len(), k as usize);
            assert_eq!(&next[..now.len()], now);
        }
        assert_eq!(gallows_segments(12).len(), 12);
        assert_eq!(gallows_segments(40).len(), 12);
        assert_eq!(gallows_segments(1)[0].name, "base");
        assert_eq!(gallows_segments(12)[11].name, "right leg");
    }

    #[test]
    fn progress_is_bounded_and_monotonic()
    {
        let mut previous = 0.0;
        for found in 0..=7 {
            let fraction = progress_fraction(found, 7);
            assert!((0.0..=1.0).contains(&fraction));
            assert!(fraction >= previous);
            assert_eq!(fraction == 1.0, found == 7);
            previous = fraction;
        }
        assert_eq!(progress_fraction(9, 7), 1.0);
    }

    #[test]
    fn pips_fill_from_the_left()
    {
        assert_eq!(score_pips(3, 5), "●●●○○");
        assert_eq!(score_pips(12, 4), "●●●●");
    }

    #[test]
    fn rasterized_base_sits_near_the_bottom()
    {
        let rows = rasterize(gallows_segments(1), 21, 11);
        assert_eq!(rows.len(), 11);
        assert!(rows[9].contains('-'));
        assert!(rows[..9].iter().all(|row| row.trim().is_empty()));
    }

    #[test]
    fn empty_canvas_has_no_rows()
    {
        assert!(rasterize(&GALLOWS, 0, 5).is_empty());
    }
}
