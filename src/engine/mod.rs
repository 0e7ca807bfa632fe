pub mod ledger;
pub mod policies;
pub mod pool;

use crate::error::Result;
use pool::ItemPool;
use rand::Rng;
use std::collections::BTreeSet;
use std::fmt::Debug;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase
{
    NotStarted,
    Active,
    Won,
    Lost,
    Complete,
}

impl Phase
{
    pub fn is_terminal(self) -> bool
    {
        matches!(self, Phase::Won | Phase::Lost | Phase::Complete)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter
{
    value: u32,
    max: u32,
}

impl Counter
{
    pub fn new(value: u32, max: u32) -> Self
    {
        Self {
            value: value.min(max),
            max,
        }
    }

    pub fn value(&self) -> u32
    {
        self.value
    }

    pub fn max(&self) -> u32
    {
        self.max
    }

    pub fn is_at_max(&self) -> bool
    {
        self.value == self.max
    }

    pub fn is_at_zero(&self) -> bool
    {
        self.value == 0
    }

    pub fn increment(&mut self) -> bool
    {
        if self.value >= self.max {
            return false;
        }
        self.value += 1;
        true
    }

    pub fn decrement(&mut self) -> bool
    {
        if self.value == 0 {
            return false;
        }
        self.value -= 1;
        true
    }
}

#[derive(Clone, Debug)]
pub struct RoundState<T: Ord>
{
    phase: Phase,
    current_index: usize,
    consumed: BTreeSet<T>,
    counter: Counter,
}

impl<T: Ord> RoundState<T>
{
    fn new(counter: Counter) -> Self
    {
        Self {
            phase: Phase::NotStarted,
            current_index: 0,
            consumed: BTreeSet::new(),
            counter,
        }
    }

    pub fn phase(&self) -> Phase
    {
        self.phase
    }

    pub fn current_index(&self) -> usize
    {
        self.current_index
    }

    pub fn consumed(&self) -> &BTreeSet<T>
    {
        &self.consumed
    }

    pub fn counter(&self) -> Counter
    {
        self.counter
    }

    pub(crate) fn set_current(&mut self, index: usize)
    {
        self.current_index = index;
    }

    pub(crate) fn consume(&mut self, token: T) -> bool
    {
        self.consumed.insert(token)
    }

    pub(crate) fn counter_mut(&mut self) -> &mut Counter
    {
        &mut self.counter
    }

    fn restart(&mut self, index: usize, counter: Counter)
    {
        self.phase = Phase::Active;
        self.current_index = index;
        self.consumed.clear();
        self.counter = counter;
    }

    fn clear(&mut self, counter: Counter)
    {
        self.phase = Phase::NotStarted;
        self.current_index = 0;
        self.consumed.clear();
        self.counter = counter;
    }
}

pub trait RoundPolicy
{
    type Token: Ord + Copy + Debug;
    type Outcome: Debug;

    fn initial_counter(&self) -> Counter;

    fn initial_index<R: Rng + ?Sized>(&self, pool: &ItemPool, rng: &mut R) -> usize;

    fn on_start(&mut self) {}

    fn on_reset(&mut self) {}

    fn advance<R: Rng + ?Sized>(
        &mut self,
        round: &mut RoundState<Self::Token>,
        pool: &ItemPool,
        outcome: Self::Outcome,
        rng: &mut R,
    ) -> Result<Phase>;
}

pub struct RoundEngine<P: RoundPolicy, R: Rng>
{
    pool: ItemPool,
    policy: P,
    round: RoundState<P::Token>,
    rng: R,
}

impl<P: RoundPolicy, R: Rng> RoundEngine<P, R>
{
    pub fn new(pool: ItemPool, policy: P, rng: R) -> Self
    {
        let round = RoundState::new(policy.initial_counter());
        Self {
            pool,
            policy,
            round,
            rng,
        }
    }

    pub fn start(&mut self)
    {
        let index = self.policy.initial_index(&self.pool, &mut self.rng);
        self.policy.on_start();
        self.round.restart(index, self.policy.initial_counter());
        info!(
            pool = self.pool.name(),
            item = self.pool.label(index),
            "round started"
        );
    }

    /// Feeds one player action to the round. Outside [`Phase::Active`] the
    /// action is ignored and the current phase is returned unchanged.
    pub fn advance(&mut self, outcome: P::Outcome) -> Result<Phase>
    {
        if self.round.phase != Phase::Active {
            debug!(pool = self.pool.name(), phase = ?self.round.phase, ?outcome, "ignored outcome");
            return Ok(self.round.phase);
        }

        debug!(pool = self.pool.name(), ?outcome, "advance");
        let phase = self
            .policy
            .advance(&mut self.round, &self.pool, outcome, &mut self.rng)?;
        if phase != self.round.phase {
            info!(pool = self.pool.name(), from = ?self.round.phase, to = ?phase, "phase changed");
        }
        self.round.phase = phase;
        Ok(phase)
    }

    pub fn reset(&mut self)
    {
        self.policy.on_reset();
        self.round.clear(self.policy.initial_counter());
        debug!(pool = self.pool.name(), "round reset");
    }

    pub fn phase(&self) -> Phase
    {
        self.round.phase
    }

    pub fn round(&self) -> &RoundState<P::Token>
    {
        &self.round
    }

    pub fn pool(&self) -> &ItemPool
    {
        &self.pool
    }

    pub fn policy(&self) -> &P
    {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut P
    {
        &mut self.policy
    }

    pub fn current_label(&self) -> &'static str
    {
        self.pool.label(self.round.current_index)
    }

    pub fn current_glyph(&self) -> &'static str
    {
        self.pool.glyph(self.round.current_index)
    }
}
