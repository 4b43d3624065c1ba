//! Move-list extraction from recorded game files.
//!
//! A game file carries a header ending with the board layout
//! terminator `*]`, followed by tagged moves:
//!
//! ```text
//! (;GM[Othello]PB[p1]PW[p2]TY[8]BO[8 ...O*...*O... *];B[F5];W[F6];B[E6];...;)
//! ```
//!
//! Move content may carry a `/`-separated time annotation (`B[f5//0.01]`),
//! which is ignored. Passes (`B[PA]`) are dropped.

use crate::coord;
use crate::error::{ReplayError, Result};
use crate::types::Player;

const HEADER_TERMINATOR: &str = "*]";
const PASS: &str = "PA";

/// One decoded move from a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptMove {
    pub player: Player,
    pub index: usize,
}

/// Returns the move list that follows the header.
pub fn extract_move_list(text: &str) -> Result<&str> {
    let (_, body) = text.split_once(HEADER_TERMINATOR).ok_or_else(|| {
        ReplayError::MalformedTranscript(format!(
            "missing header terminator {HEADER_TERMINATOR:?}"
        ))
    })?;
    Ok(body.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ')' | ';')))
}

/// Decodes `TAG[content]` items in order, skipping passes.
pub fn parse_moves(body: &str) -> Result<Vec<TranscriptMove>> {
    let mut moves = Vec::new();
    let mut rest = body;

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ';');
        if rest.is_empty() {
            break;
        }

        let open = rest.find('[').ok_or_else(|| {
            ReplayError::MalformedTranscript(format!("expected a move tag at {:?}", preview(rest)))
        })?;
        let tag = rest[..open].trim();
        let after_open = &rest[open + 1..];
        let close = after_open.find(']').ok_or_else(|| {
            ReplayError::MalformedTranscript(format!("unterminated move tag {tag:?}"))
        })?;
        let content = &after_open[..close];
        rest = &after_open[close + 1..];

        let player = Player::from_token(tag)?;
        let square = content.split('/').next().unwrap_or_default().trim();
        if square.eq_ignore_ascii_case(PASS) {
            log::trace!("skipping pass by {player:?}");
            continue;
        }

        let index = coord::parse_index(square)?;
        moves.push(TranscriptMove { player, index });
    }

    Ok(moves)
}

/// Extracts and decodes the full move list of a game file.
pub fn parse_transcript(text: &str) -> Result<Vec<TranscriptMove>> {
    parse_moves(extract_move_list(text)?)
}

fn preview(text: &str) -> String {
    text.chars().take(16).collect()
}
