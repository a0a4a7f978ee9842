//! End-to-end game tests through the public API.

use trend_guess::{Direction, GameError, Phase, RulesEngine, Session, TrendGameBuilder};

fn session(pairs: &[(i32, f64)]) -> Session {
    Session::start(TrendGameBuilder::new().pairs(pairs)).unwrap()
}

// =============================================================================
// Two-Point Scenarios
// =============================================================================

#[test]
fn test_rising_pair_guessed_increase() {
    let mut s = session(&[(2000, 0.25), (2001, 0.29)]);
    let outcome = s.submit_guess(Direction::Increase).unwrap();

    assert!(outcome.correct);
    assert_eq!(s.state().score(), 1);
    assert_eq!(s.state().position(), 1);
    assert_eq!(s.state().phase(), Phase::Finished);
    assert!(outcome.feedback.contains("end of the game"));
}

#[test]
fn test_falling_pair_guessed_increase() {
    let mut s = session(&[(2000, 0.50), (2001, 0.40)]);
    let outcome = s.submit_guess(Direction::Increase).unwrap();

    assert!(!outcome.correct);
    assert_eq!(s.state().score(), 0);
    assert_eq!(outcome.actual, Direction::Decrease);
    assert!(outcome.feedback.contains("Decrease"));
}

#[test]
fn test_tie_is_wrong_for_both_directions() {
    for guess in [Direction::Increase, Direction::Decrease] {
        let mut s = session(&[(2000, 1.0), (2001, 1.0)]);
        let outcome = s.submit_guess(guess).unwrap();
        assert!(!outcome.correct, "tie guessed {guess} must be wrong");
        assert_eq!(s.state().score(), 0);
        assert!(outcome.feedback.starts_with("Wrong!"));
    }
}

// =============================================================================
// Full Sessions
// =============================================================================

#[test]
fn test_ten_points_finish_after_ninth_guess() {
    let pairs: Vec<(i32, f64)> = (0..10).map(|i| (2000 + i, f64::from(i % 3))).collect();
    let mut s = session(&pairs);

    for n in 1..=9 {
        assert!(!s.is_finished(), "finished early before guess {n}");
        let outcome = s.submit_guess(Direction::Increase).unwrap();
        assert_eq!(outcome.finished, n == 9);
        assert_eq!(outcome.position, n);
    }
    assert!(s.is_finished());

    let before = s.state().clone();
    let err = s.submit_guess(Direction::Decrease).unwrap_err();
    assert!(matches!(err, GameError::GameFinished { position: 9 }));
    assert_eq!(s.state(), &before);
}

#[test]
fn test_embedded_series_full_play() {
    let mut s = Session::with_default_dataset().unwrap();
    let mut messages = Vec::new();

    while !s.is_finished() {
        messages.push(s.submit_guess(Direction::Decrease).unwrap().feedback);
    }

    assert_eq!(messages.len(), 9);
    assert_eq!(s.state().score(), 0);
    assert!(messages
        .iter()
        .all(|m| m.starts_with("Wrong! The correct trend was Increase.")));
    assert!(messages[8].ends_with("You've reached the end of the game!"));
    assert_eq!(s.game().is_terminal(s.state()).map(|r| r.guesses), Some(9));
}

#[test]
fn test_visible_points_grow_by_one() {
    let mut s = Session::with_default_dataset().unwrap();
    let mut expected = 1;

    loop {
        let years: Vec<i32> = s.visible_points().map(|p| p.year).collect();
        assert_eq!(years.len(), expected);
        assert_eq!(years.first(), Some(&2000));
        assert_eq!(years.last(), Some(&(2000 + expected as i32 - 1)));

        if s.is_finished() {
            break;
        }
        s.submit_guess(Direction::Increase).unwrap();
        expected += 1;
    }
    assert_eq!(expected, 10);
}

#[test]
fn test_history_records_each_guess() {
    let mut s = session(&[(2000, 1.0), (2001, 2.0), (2002, 2.0), (2003, 1.0)]);
    s.submit_guess(Direction::Increase).unwrap();
    s.submit_guess(Direction::Increase).unwrap();
    s.submit_guess(Direction::Decrease).unwrap();

    let history = s.state().history();
    let correct: Vec<bool> = history.iter().map(|r| r.correct).collect();
    assert_eq!(correct, vec![true, false, true]);
    assert_eq!(history[1].actual, Direction::Decrease);
    assert_eq!(history[2].to.year, 2003);
    assert_eq!(s.state().score(), 2);
}

// =============================================================================
// Input Boundary
// =============================================================================

#[test]
fn test_invalid_input_never_reaches_engine() {
    let mut s = Session::with_default_dataset().unwrap();
    for raw in ["", "sideways", "increasee", "0"] {
        let err = s.submit_raw(raw).unwrap_err();
        assert!(matches!(err, GameError::InvalidGuess(_)));
    }
    assert_eq!(s.state().position(), 0);
    assert!(s.state().history().is_empty());
}

#[test]
fn test_short_dataset_is_fatal() {
    let err = Session::start(TrendGameBuilder::new().pairs(&[(2000, 0.1)])).unwrap_err();
    assert!(matches!(err, GameError::DatasetTooShort { len: 1 }));
    assert!(!err.is_recoverable());
}
