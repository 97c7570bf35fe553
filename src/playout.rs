//! Seeded random playouts.
//!
//! A playout applies uniformly chosen legal moves until the game ends or a
//! ply limit is hit. It exercises the rules end to end for soak tests and
//! benchmarks, and does not evaluate positions. Each report records where
//! its random stream started, so a single game out of a batch can be
//! replayed exactly.
//!
//! ```
//! use checkers_engine::{playout, Engine, GameRng};
//!
//! let mut engine = Engine::new();
//! let report = playout::random_playout(&mut engine, &mut GameRng::new(7), 500);
//! assert!(report.plies > 0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, GameRngState, Side, SideMap};
use crate::engine::Engine;
use crate::rules::{GameResult, RulesEngine};

/// Summary of one playout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutReport {
    /// Plies applied, counting each jump of a chain separately.
    pub plies: usize,
    /// Pieces captured by each side.
    pub captures: SideMap<usize>,
    /// Men crowned for each side.
    pub promotions: SideMap<usize>,
    /// `None` if the ply limit was reached first.
    pub result: Option<GameResult>,
    /// Stream position the game was played from.
    pub start: Option<GameRngState>,
}

impl PlayoutReport {
    #[must_use]
    pub fn total_captures(&self) -> usize {
        self.captures.iter().map(|(_, n)| n).sum()
    }
}

/// Play random legal moves from the engine's current state.
pub fn random_playout<R: RulesEngine>(
    engine: &mut Engine<R>,
    rng: &mut GameRng,
    max_plies: usize,
) -> PlayoutReport {
    let mut report = PlayoutReport {
        start: Some(rng.state()),
        ..PlayoutReport::default()
    };

    while report.plies < max_plies && !engine.is_game_over() {
        let mover = engine.side_to_move();
        let Some(mv) = rng.pick_move(engine.legal_moves()) else {
            break;
        };
        let Ok(outcome) = engine.apply(mv) else {
            break;
        };

        report.plies += 1;
        report.captures[mover] += usize::from(outcome.captured.is_some());
        report.promotions[mover] += usize::from(outcome.promoted);
    }

    report.result = engine.result();
    let remaining = engine.piece_counts();
    debug!(
        plies = report.plies,
        captures = report.total_captures(),
        light = remaining[Side::Light],
        dark = remaining[Side::Dark],
        finished = report.result.is_some(),
        "playout finished"
    );
    report
}

/// Play `games` independent playouts from the same starting engine, each on
/// its own fork of `rng`.
pub fn playout_batch<R: RulesEngine + Clone>(
    engine: &Engine<R>,
    rng: &mut GameRng,
    games: usize,
    max_plies: usize,
) -> Vec<PlayoutReport> {
    (0..games)
        .map(|_| random_playout(&mut engine.clone(), &mut rng.fork(), max_plies))
        .collect()
}

/// Replay the game behind `report` on a copy of `engine`, returning the
/// engine in its final position.
pub fn replay<R: RulesEngine + Clone>(
    engine: &Engine<R>,
    report: &PlayoutReport,
) -> Option<Engine<R>> {
    let start = report.start.as_ref()?;
    let mut replayed = engine.clone();
    random_playout(&mut replayed, &mut GameRng::from_state(start), report.plies);
    Some(replayed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playout_is_deterministic() {
        let mut a = Engine::new();
        let mut b = Engine::new();

        let ra = random_playout(&mut a, &mut GameRng::new(99), 400);
        let rb = random_playout(&mut b, &mut GameRng::new(99), 400);

        assert_eq!(ra, rb);
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_playout_respects_ply_limit() {
        let mut engine = Engine::new();
        let report = random_playout(&mut engine, &mut GameRng::new(1), 5);

        assert_eq!(report.plies, 5);
    }

    #[test]
    fn test_capture_count_matches_board() {
        let mut engine = Engine::new();
        let report = random_playout(&mut engine, &mut GameRng::new(3), 1000);

        let remaining = engine.piece_counts();
        assert_eq!(remaining[Side::Light] + report.captures[Side::Dark], 12);
        assert_eq!(remaining[Side::Dark] + report.captures[Side::Light], 12);
        assert_eq!(
            remaining[Side::Light] + remaining[Side::Dark] + report.total_captures(),
            24
        );
    }

    #[test]
    fn test_batch_games_differ_and_replay() {
        let engine = Engine::new();
        let reports = playout_batch(&engine, &mut GameRng::new(17), 8, 2000);

        assert_eq!(reports.len(), 8);
        assert!(reports.iter().any(|r| r.start != reports[0].start));
        assert!(reports.iter().any(|r| r.plies != reports[0].plies));

        let replayed = replay(&engine, &reports[3]).unwrap();
        let again = random_playout(
            &mut engine.clone(),
            &mut GameRng::from_state(&reports[3].start.unwrap()),
            2000,
        );
        assert_eq!(again, reports[3]);
        assert_eq!(replayed.result(), reports[3].result);
    }

    #[test]
    fn test_replay_without_start_is_none() {
        assert!(replay(&Engine::new(), &PlayoutReport::default()).is_none());
    }

    #[test]
    fn test_playout_on_finished_game_does_nothing() {
        let mut engine = Engine::new();
        random_playout(&mut engine, &mut GameRng::new(5), 10_000);

        if engine.is_game_over() {
            let again = random_playout(&mut engine, &mut GameRng::new(6), 10);
            assert_eq!(again.plies, 0);
            assert!(again.result.is_some());
        }
    }
}
