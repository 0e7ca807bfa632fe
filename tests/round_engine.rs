use car_games::display::{gallows_segments, is_complete, masked_phrase, progress_fraction};
use car_games::engine::ledger::ScoreLedger;
use car_games::engine::policies::{Countdown, Exhaustion, Penalty, Question, Sighting};
use car_games::engine::pool::ItemPool;
use car_games::engine::{Phase, RoundEngine};
use car_games::input::LetterEntry;
use car_games::pools::{PHRASES, QUESTION_ITEMS, RAINBOW_COLORS, SPOTTING_ITEMS};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

fn rng() -> StdRng
{
    StdRng::seed_from_u64(2024)
}

#[test]
fn every_pool_is_valid()
{
    for (name, items) in [
        ("rainbow-road", &RAINBOW_COLORS[..]),
        ("twenty-questions", &QUESTION_ITEMS[..]),
        ("find-me", &SPOTTING_ITEMS[..]),
        ("hangman", &PHRASES[..]),
    ] {
        let pool = ItemPool::new(name, items).unwrap();
        assert!(!pool.is_empty());
    }
}

#[test]
fn next_unseen_ignores_skips()
{
    let pool = ItemPool::new("rainbow-road", &RAINBOW_COLORS).unwrap();
    let mut engine = RoundEngine::new(pool, Exhaustion::default(), rng());
    engine.start();
    engine.advance(Sighting::Found).unwrap();
    engine.advance(Sighting::Found).unwrap();
    // Orange is found at index 1; Yellow is current.
    assert_eq!(engine.round().current_index(), 2);
    engine.advance(Sighting::Found).unwrap();
    assert_eq!(engine.round().current_index(), 3);
    assert_eq!(
        engine.round().consumed().iter().copied().collect::<Vec<_>>(),
        vec![0, 1, 2]
    );

    engine.advance(Sighting::Skipped).unwrap();
    engine.advance(Sighting::Skipped).unwrap();
    assert_eq!(engine.round().current_index(), 5);
    assert_eq!(
        engine.policy().skipped().iter().copied().collect::<Vec<_>>(),
        vec![3, 4]
    );
    let next = engine
        .pool()
        .next_unseen(6, engine.round().consumed())
        .unwrap();
    assert_eq!(next, 3);
}

#[test]
fn find_me_tie_goes_to_lowest_index()
{
    let mut ledger = ScoreLedger::new(3, 10).unwrap();
    for _ in 0..10 {
        ledger.score_point(2).unwrap();
    }
    for _ in 0..7 {
        ledger.score_point(1).unwrap();
    }
    for _ in 0..9 {
        ledger.score_point(0).unwrap();
    }
    assert_eq!(ledger.winner(), Some(2));
    assert_eq!(ledger.score_point(0).unwrap(), Some(0));
}

#[test]
fn masking_matches_the_road_trip_example()
{
    let consumed: BTreeSet<char> = ['r', 'o', 'a', 'd', 't'].into_iter().collect();
    assert_eq!(
        masked_phrase("Road trip", &consumed).to_string(),
        "r o a d / t _ _ _"
    );
}

#[test]
fn completion_tracks_superset_of_letters()
{
    for item in PHRASES.iter() {
        let letters: BTreeSet<char> = item
            .label
            .to_lowercase()
            .chars()
            .filter(|ch| ch.is_alphabetic())
            .collect();
        let mut consumed = BTreeSet::new();
        for letter in &letters {
            assert!(!is_complete(item.label, &consumed));
            consumed.insert(*letter);
        }
        assert!(is_complete(item.label, &consumed));
    }
}

#[test]
fn gallows_and_progress_derivations_are_monotonic()
{
    for k in 0..12 {
        let visible = gallows_segments(k);
        assert!(gallows_segments(k + 1).starts_with(visible));
    }
    assert_eq!(gallows_segments(12).len(), 12);

    for found in 0..7 {
        assert!(progress_fraction(found, 7) < progress_fraction(found + 1, 7));
    }
    assert_eq!(progress_fraction(7, 7), 1.0);
}

#[test]
fn typed_pair_only_consumes_first_letter()
{
    let pool = ItemPool::new("hangman", &PHRASES).unwrap();
    let mut engine = RoundEngine::new(pool, Penalty::default(), rng());
    engine.start();
    let mut entry = LetterEntry::default();
    assert_eq!(engine.enter_text(&mut entry, "ab").unwrap(), Some('a'));
    assert_eq!(
        engine.round().consumed().iter().copied().collect::<Vec<_>>(),
        vec!['a']
    );
    assert_eq!(entry.buffer(), "");
}

#[test]
fn restart_clears_terminal_state()
{
    let pool = ItemPool::new("hangman", &PHRASES).unwrap();
    let mut engine = RoundEngine::new(pool, Penalty::default(), rng());
    engine.start();
    let phrase = engine.current_label().to_lowercase();
    for ch in ('a'..='z').filter(|ch| !phrase.contains(*ch)).take(12) {
        engine.advance(ch).unwrap();
    }
    assert_eq!(engine.phase(), Phase::Lost);

    engine.start();
    assert_eq!(engine.phase(), Phase::Active);
    assert_eq!(engine.round().counter().value(), 0);
    assert!(engine.round().consumed().is_empty());

    let pool = ItemPool::new("twenty-questions", &QUESTION_ITEMS).unwrap();
    let mut questions = RoundEngine::new(pool, Countdown::default(), rng());
    questions.start();
    for _ in 0..8 {
        questions.advance(Question::Ask).unwrap();
    }
    questions.reset();
    assert_eq!(questions.phase(), Phase::NotStarted);
    questions.start();
    assert_eq!(questions.round().counter().value(), 20);
}
