use crate::error::{GameError, Result};

pub const MAX_PLAYERS: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player
{
    pub name: String,
    pub score: u32,
}

#[derive(Clone, Debug)]
pub struct ScoreLedger
{
    players: Vec<Player>,
    threshold: u32,
}

impl ScoreLedger
{
    pub fn new(count: usize, threshold: u32) -> Result<Self>
    {
        let mut ledger = Self {
            players: Vec::new(),
            threshold,
        };
        ledger.resize(count)?;
        Ok(ledger)
    }

    pub fn default_names(count: usize) -> Vec<String>
    {
        if count == 1 {
            vec!["Team".to_string()]
        } else {
            (1..=count).map(|n| format!("Player {n}")).collect()
        }
    }

    pub fn resize(&mut self, count: usize) -> Result<()>
    {
        if count == 0 || count > MAX_PLAYERS {
            return Err(GameError::PlayerCount {
                count,
                max: MAX_PLAYERS,
            });
        }
        self.players = Self::default_names(count)
            .into_iter()
            .map(|name| Player { name, score: 0 })
            .collect();
        Ok(())
    }

    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<()>
    {
        let player = self
            .players
            .get_mut(index)
            .ok_or(GameError::UnknownPlayer(index))?;
        player.name = name.into();
        Ok(())
    }

    pub fn len(&self) -> usize
    {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.players.is_empty()
    }

    pub fn is_team(&self) -> bool
    {
        self.players.len() == 1
    }

    pub fn threshold(&self) -> u32
    {
        self.threshold
    }

    pub fn players(&self) -> &[Player]
    {
        &self.players
    }

    pub fn name(&self, index: usize) -> Option<&str>
    {
        self.players.get(index).map(|player| player.name.as_str())
    }

    pub fn score_point(&mut self, index: usize) -> Result<Option<usize>>
    {
        let player = self
            .players
            .get_mut(index)
            .ok_or(GameError::UnknownPlayer(index))?;
        player.score = player.score.saturating_add(1);
        Ok(self.winner())
    }

    pub fn winner(&self) -> Option<usize>
    {
        self.players
            .iter()
            .position(|player| player.score >= self.threshold)
    }

    pub fn clear_scores(&mut self)
    {
        for player in &mut self.players {
            player.score = 0;
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn ledger_with_scores(scores: &[u32]) -> ScoreLedger
    {
        let mut ledger = ScoreLedger::new(scores.len(), 10).unwrap();
        for (index, &score) in scores.iter().enumerate() {
            ledger.players[index].score = score;
        }
        ledger
    }

    #[test]
    fn first_qualifying_player_wins_ties()
    {
        let ledger = ledger_with_scores(&[10, 7, 10]);
        assert_eq!(ledger.winner(), Some(0));
    }

    #[test]
    fn no_winner_below_threshold()
    {
        let ledger = ledger_with_scores(&[9, 9, 3, 0]);
        assert_eq!(ledger.winner(), None);
    }

    #[test]
    fn scoring_reports_winner_on_crossing()
    {
        let mut ledger = ledger_with_scores(&[5, 9]);
        assert_eq!(ledger.score_point(0).unwrap(), None);
        assert_eq!(ledger.score_point(1).unwrap(), Some(1));
    }

    #[test]
    fn team_mode_uses_single_team_name()
    {
        let ledger = ScoreLedger::new(1, 10).unwrap();
        assert!(ledger.is_team());
        assert_eq!(ledger.name(0), Some("Team"));
    }

    #[test]
    fn resize_restores_default_names()
    {
        let mut ledger = ScoreLedger::new(2, 10).unwrap();
        ledger.rename(1, "Ada").unwrap();
        ledger.resize(3).unwrap();
        let names: Vec<&str> = ledger.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Player 1", "Player 2", "Player 3"]);
    }

    #[test]
    fn rejects_out_of_range_counts_and_players()
    {
        assert!(matches!(
            ScoreLedger::new(0, 10),
            Err(GameError::PlayerCount { count: 0, .. })
        ));
        assert!(ScoreLedger::new(7, 10).is_err());

        let mut ledger = ScoreLedger::new(2, 10).unwrap();
        assert!(matches!(
            ledger.score_point(2),
            Err(GameError::UnknownPlayer(2))
        ));
    }

    #[test]
    fn clear_scores_keeps_names()
    {
        let mut ledger = ledger_with_scores(&[4, 2]);
        ledger.rename(0, "Sam").unwrap();
        ledger.clear_scores();
        assert_eq!(ledger.players()[0], Player { name: "Sam".into(), score: 0 });
        assert_eq!(ledger.players()[1].score, 0);
    }
}
