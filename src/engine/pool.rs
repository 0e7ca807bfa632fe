use crate::display::Rgb;
use crate::error::{GameError, Result};
use rand::Rng;
use std::collections::{BTreeSet, HashSet};

pub const UNKNOWN_GLYPH: &str = "❓";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Appearance
{
    Glyph(&'static str),
    Swatch(Rgb),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolItem
{
    pub label: &'static str,
    pub appearance: Option<Appearance>,
}

impl PoolItem
{
    pub const fn new(label: &'static str, glyph: &'static str) -> Self
    {
        Self {
            label,
            appearance: Some(Appearance::Glyph(glyph)),
        }
    }

    pub const fn swatch(label: &'static str, color: Rgb) -> Self
    {
        Self {
            label,
            appearance: Some(Appearance::Swatch(color)),
        }
    }

    pub const fn plain(label: &'static str) -> Self
    {
        Self {
            label,
            appearance: None,
        }
    }
}

/// The fixed, ordered candidate set a game draws its rounds from.
///
/// Labels are unique (ignoring case) and the pool is never empty, so any
/// index handed out by [`ItemPool::random_index`] or
/// [`ItemPool::next_unseen`] is valid for [`ItemPool::label`].
#[derive(Clone, Debug)]
pub struct ItemPool
{
    name: &'static str,
    items: &'static [PoolItem],
}

impl ItemPool
{
    pub fn new(name: &'static str, items: &'static [PoolItem]) -> Result<Self>
    {
        if items.is_empty() {
            return Err(GameError::EmptyPool(name));
        }

        let mut seen = HashSet::new();
        for item in items {
            if !seen.insert(item.label.to_lowercase()) {
                return Err(GameError::DuplicateLabel {
                    pool: name,
                    label: item.label,
                });
            }
        }

        Ok(Self { name, items })
    }

    pub fn name(&self) -> &'static str
    {
        self.name
    }

    pub fn len(&self) -> usize
    {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.items.is_empty()
    }

    pub fn label(&self, index: usize) -> &'static str
    {
        self.items[index].label
    }

    pub fn glyph(&self, index: usize) -> &'static str
    {
        self.glyph_for(self.label(index))
    }

    pub fn glyph_for(&self, label: &str) -> &'static str
    {
        self.items
            .iter()
            .find(|item| item.label.eq_ignore_ascii_case(label))
            .and_then(|item| match item.appearance {
                Some(Appearance::Glyph(glyph)) => Some(glyph),
                _ => None,
            })
            .unwrap_or(UNKNOWN_GLYPH)
    }

    pub fn swatch(&self, index: usize) -> Option<Rgb>
    {
        match self.items[index].appearance {
            Some(Appearance::Swatch(color)) => Some(color),
            _ => None,
        }
    }

    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize
    {
        rng.gen_range(0..self.items.len())
    }

    /// First index after `current`, wrapping around, that is not in `seen`.
    /// `current` itself is checked last.
    pub fn next_unseen(&self, current: usize, seen: &BTreeSet<usize>) -> Option<usize>
    {
        let len = self.items.len();
        (0..len)
            .map(|offset| (current + 1 + offset) % len)
            .find(|index| !seen.contains(index))
    }
}
