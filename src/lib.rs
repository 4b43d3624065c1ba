use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod coord;
pub mod dataset;
pub mod error;
pub mod replay;
pub mod transcript;
pub mod types;

pub use board::Board;
pub use config::{ConverterConfig, ReplayConfig, SnapshotTiming};
pub use error::{ConfigError, ReplayError};
pub use replay::{GameReplay, convert_transcript, replay};
pub use transcript::TranscriptMove;
pub use types::{Cell, GAME_LENGTH, Player, Record};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Converts a game file into its records for JS callers.
#[wasm_bindgen(js_name = convertTranscript)]
pub fn convert_transcript_js(text: &str, snapshot_before_move: bool) -> Result<JsValue, JsError> {
    let config = ReplayConfig {
        snapshot: if snapshot_before_move {
            SnapshotTiming::BeforeMove
        } else {
            SnapshotTiming::AfterMove
        },
        ..ReplayConfig::default()
    };
    let records = convert_transcript(text, &config)?;
    Ok(serde_wasm_bindgen::to_value(&records)?)
}
