pub mod find_me;
pub mod hangman;
pub mod rainbow_road;
pub mod twenty_questions;

use crate::error::{GameError, Result};
use crate::terminal::Exit;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub struct GameDescriptor
{
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub fn registry() -> Vec<GameDescriptor>
{
    vec![
        GameDescriptor {
            name: "rainbow-road",
            title: "Rainbow Road",
            description: "Spot vehicles by color",
        },
        GameDescriptor {
            name: "twenty-questions",
            title: "20 Questions",
            description: "Guess the mystery item",
        },
        GameDescriptor {
            name: "find-me",
            title: "Find Me",
            description: "Spot items to score points",
        },
        GameDescriptor {
            name: "hangman",
            title: "Hangman",
            description: "Guess the phrase letter by letter",
        },
    ]
}

pub fn run(name: &str, args: &[String]) -> Result<Exit>
{
    match name {
        "rainbow-road" => rainbow_road::run(SeedConfig::from_args("rainbow-road", args)?),
        "twenty-questions" => {
            twenty_questions::run(SeedConfig::from_args("twenty-questions", args)?)
        }
        "find-me" => find_me::run(find_me::FindMeConfig::from_args(args)?),
        "hangman" => hangman::run(SeedConfig::from_args("hangman", args)?),
        _ => Err(GameError::UnknownCommand(name.to_string())),
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedConfig
{
    pub seed: Option<u64>,
}

impl SeedConfig
{
    pub fn from_args(game: &'static str, args: &[String]) -> Result<Self>
    {
        let mut config = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if !config.accept(arg, &mut iter)? {
                return Err(GameError::UnknownOption {
                    game,
                    option: arg.clone(),
                });
            }
        }
        Ok(config)
    }

    pub(crate) fn accept<'a>(
        &mut self,
        arg: &str,
        rest: &mut impl Iterator<Item = &'a String>,
    ) -> Result<bool>
    {
        if arg == "--seed" {
            let value = rest.next().ok_or_else(|| GameError::InvalidValue {
                option: "--seed",
                reason: "expected a value".to_string(),
            })?;
            self.seed = Some(parse_seed(value)?);
        } else if let Some(value) = arg.strip_prefix("--seed=") {
            self.seed = Some(parse_seed(value)?);
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    pub fn rng(&self) -> StdRng
    {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_seed(value: &str) -> Result<u64>
{
    value.parse::<u64>().map_err(|_| GameError::InvalidValue {
        option: "--seed",
        reason: format!("'{value}' is not a non-negative integer"),
    })
}
