use super::ledger::ScoreLedger;
use super::pool::ItemPool;
use super::{Counter, Phase, RoundEngine, RoundPolicy, RoundState};
use crate::display::is_complete;
use crate::error::Result;
use crate::input::LetterEntry;
use rand::Rng;
use std::collections::BTreeSet;
use tracing::{debug, info};

pub const WIN_THRESHOLD: u32 = 10;
pub const MAX_INCORRECT: u32 = 12;
pub const QUESTION_LIMIT: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sighting
{
    Found,
    Skipped,
}

/// Walk the pool in order until every item has been found.
///
/// Skipping only records the item; a skipped item stays eligible and comes
/// round again, since the walk only steps over found items.
#[derive(Debug, Default)]
pub struct Exhaustion
{
    skipped: BTreeSet<usize>,
}

impl Exhaustion
{
    pub fn skipped(&self) -> &BTreeSet<usize>
    {
        &self.skipped
    }

    /// Skipping is off once found and skipped items leave just one spare.
    pub fn can_skip(&self, round: &RoundState<usize>, pool: &ItemPool) -> bool
    {
        round.consumed().len() + self.skipped.len() != pool.len() - 1
    }
}

impl RoundPolicy for Exhaustion
{
    type Token = usize;
    type Outcome = Sighting;

    fn initial_counter(&self) -> Counter
    {
        Counter::new(0, 0)
    }

    fn initial_index<R: Rng + ?Sized>(&self, _pool: &ItemPool, _rng: &mut R) -> usize
    {
        0
    }

    fn on_start(&mut self)
    {
        self.skipped.clear();
    }

    fn on_reset(&mut self)
    {
        self.skipped.clear();
    }

    fn advance<R: Rng + ?Sized>(
        &mut self,
        round: &mut RoundState<usize>,
        pool: &ItemPool,
        outcome: Sighting,
        _rng: &mut R,
    ) -> Result<Phase>
    {
        let current = round.current_index();
        match outcome {
            Sighting::Found => {
                round.consume(current);
                self.skipped.remove(&current);
                if round.consumed().len() == pool.len() {
                    return Ok(Phase::Complete);
                }
            }
            Sighting::Skipped => {
                if !self.can_skip(round, pool) {
                    debug!(item = pool.label(current), "skip unavailable");
                    return Ok(Phase::Active);
                }
                if !round.consumed().contains(&current) {
                    self.skipped.insert(current);
                }
            }
        }

        if let Some(next) = pool.next_unseen(current, round.consumed()) {
            round.set_current(next);
        }
        Ok(Phase::Active)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point(pub usize);

#[derive(Debug)]
pub struct Threshold
{
    ledger: ScoreLedger,
}

impl Threshold
{
    pub fn new(players: usize) -> Result<Self>
    {
        Ok(Self {
            ledger: ScoreLedger::new(players, WIN_THRESHOLD)?,
        })
    }

    pub fn ledger(&self) -> &ScoreLedger
    {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut ScoreLedger
    {
        &mut self.ledger
    }

    pub fn winner(&self) -> Option<usize>
    {
        self.ledger.winner()
    }
}

impl RoundPolicy for Threshold
{
    type Token = ();
    type Outcome = Point;

    fn initial_counter(&self) -> Counter
    {
        Counter::new(0, 0)
    }

    fn initial_index<R: Rng + ?Sized>(&self, pool: &ItemPool, rng: &mut R) -> usize
    {
        pool.random_index(rng)
    }

    fn on_start(&mut self)
    {
        self.ledger.clear_scores();
    }

    fn on_reset(&mut self)
    {
        self.ledger.clear_scores();
    }

    fn advance<R: Rng + ?Sized>(
        &mut self,
        round: &mut RoundState<()>,
        pool: &ItemPool,
        outcome: Point,
        rng: &mut R,
    ) -> Result<Phase>
    {
        let Point(player) = outcome;
        if let Some(winner) = self.ledger.score_point(player)? {
            info!(winner = self.ledger.name(winner).unwrap_or_default(), "threshold reached");
            return Ok(Phase::Won);
        }
        round.set_current(pool.random_index(rng));
        Ok(Phase::Active)
    }
}

#[derive(Debug)]
pub struct Penalty
{
    max_incorrect: u32,
}

impl Penalty
{
    pub fn new(max_incorrect: u32) -> Self
    {
        Self { max_incorrect }
    }

    pub fn max_incorrect(&self) -> u32
    {
        self.max_incorrect
    }
}

impl Default for Penalty
{
    fn default() -> Self
    {
        Self::new(MAX_INCORRECT)
    }
}

impl RoundPolicy for Penalty
{
    type Token = char;
    type Outcome = char;

    fn initial_counter(&self) -> Counter
    {
        Counter::new(0, self.max_incorrect)
    }

    fn initial_index<R: Rng + ?Sized>(&self, pool: &ItemPool, rng: &mut R) -> usize
    {
        pool.random_index(rng)
    }

    fn advance<R: Rng + ?Sized>(
        &mut self,
        round: &mut RoundState<char>,
        pool: &ItemPool,
        letter: char,
        _rng: &mut R,
    ) -> Result<Phase>
    {
        let letter = letter.to_lowercase().next().unwrap_or(letter);
        let phrase = pool.label(round.current_index());
        if !round.consume(letter) {
            return Ok(Phase::Active);
        }
        if !phrase.to_lowercase().contains(letter) {
            round.counter_mut().increment();
        }

        // Completion is checked before the miss cap.
        if is_complete(phrase, round.consumed()) {
            Ok(Phase::Won)
        } else if round.counter().is_at_max() {
            Ok(Phase::Lost)
        } else {
            Ok(Phase::Active)
        }
    }
}

impl<R: Rng> RoundEngine<Penalty, R>
{
    pub fn enter_text(&mut self, entry: &mut LetterEntry, raw: &str) -> Result<Option<char>>
    {
        let Some(letter) = entry.change(raw) else {
            return Ok(None);
        };
        if self.phase() != Phase::Active || self.round().consumed().contains(&letter) {
            return Ok(None);
        }
        self.advance(letter)?;
        Ok(Some(letter))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Question
{
    Ask,
    GiveBack,
    ToggleAnswer,
}

/// Counts questions down from a limit. Running out is not terminal; the
/// round goes on until a new word or the end of the game.
#[derive(Debug)]
pub struct Countdown
{
    limit: u32,
    revealed: bool,
}

impl Countdown
{
    pub fn new(limit: u32) -> Self
    {
        Self {
            limit,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool
    {
        self.revealed
    }
}

impl Default for Countdown
{
    fn default() -> Self
    {
        Self::new(QUESTION_LIMIT)
    }
}

impl RoundPolicy for Countdown
{
    type Token = ();
    type Outcome = Question;

    fn initial_counter(&self) -> Counter
    {
        Counter::new(self.limit, self.limit)
    }

    fn initial_index<R: Rng + ?Sized>(&self, pool: &ItemPool, rng: &mut R) -> usize
    {
        pool.random_index(rng)
    }

    fn on_start(&mut self)
    {
        self.revealed = false;
    }

    fn on_reset(&mut self)
    {
        self.revealed = false;
    }

    fn advance<R: Rng + ?Sized>(
        &mut self,
        round: &mut RoundState<()>,
        _pool: &ItemPool,
        outcome: Question,
        _rng: &mut R,
    ) -> Result<Phase>
    {
        match outcome {
            Question::Ask => {
                round.counter_mut().decrement();
            }
            Question::GiveBack => {
                round.counter_mut().increment();
            }
            Question::ToggleAnswer => self.revealed = !self.revealed,
        }
        Ok(Phase::Active)
    }
}
