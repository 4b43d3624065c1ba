use web_time::Instant;

use crate::board::Board;
use crate::config::{ReplayConfig, SnapshotTiming};
use crate::error::{ReplayError, Result};
use crate::transcript::{self, TranscriptMove};
use crate::types::{GAME_LENGTH, Record};

/// Replays one game move by move, collecting a record per move.
///
/// Owns its board exclusively; run one instance per game.
pub struct GameReplay<'a> {
    board: Board,
    config: &'a ReplayConfig,
    records: Vec<Record>,
}

impl<'a> GameReplay<'a> {
    pub fn new(config: &'a ReplayConfig) -> Self {
        Self {
            board: Board::new(),
            config,
            records: Vec::with_capacity(GAME_LENGTH),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn round(&self) -> usize {
        self.records.len()
    }

    /// Applies the next move and appends its record. Returns the captured
    /// indices.
    pub fn step(&mut self, mv: TranscriptMove) -> Result<Vec<usize>> {
        let round = self.round();

        if self.config.require_captures && self.board.captures_for(mv.index, mv.player)? == 0 {
            return Err(ReplayError::NoCapture { index: mv.index });
        }

        let before = match self.config.snapshot {
            SnapshotTiming::BeforeMove => Some(self.board.snapshot(mv.player, mv.index, round)),
            SnapshotTiming::AfterMove => None,
        };

        let captured = self.board.apply_move(mv.index, mv.player)?;

        let record = before.unwrap_or_else(|| self.board.snapshot(mv.player, mv.index, round));
        self.records.push(record);

        log::trace!(
            "round {round}: {:?} at {} flipped {:?}\n{}",
            mv.player,
            mv.index,
            captured,
            self.board
        );
        Ok(captured)
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Replays a complete game.
///
/// The move list must hold exactly [`GAME_LENGTH`] moves; anything else is
/// rejected before the board is touched. Any error discards the records
/// collected so far.
pub fn replay(moves: &[TranscriptMove], config: &ReplayConfig) -> Result<Vec<Record>> {
    if moves.len() != GAME_LENGTH {
        return Err(ReplayError::MalformedTranscript(format!(
            "expected {GAME_LENGTH} moves, got {}",
            moves.len()
        )));
    }

    let started = Instant::now();
    let mut game = GameReplay::new(config);
    for &mv in moves {
        game.step(mv)?;
    }

    let (p1, p2) = game.board().count();
    log::debug!(
        "replayed {} moves in {:?}: final discs {p1}-{p2}",
        game.round(),
        started.elapsed()
    );
    Ok(game.into_records())
}

/// Parses a game file and replays it.
pub fn convert_transcript(text: &str, config: &ReplayConfig) -> Result<Vec<Record>> {
    let moves = transcript::parse_transcript(text)?;
    replay(&moves, config)
}
