// File: crates/engine-graph/src/moves.rs
// Summary: Move records as delivered by the move list / live analysis feeds.
// Notes:
// - Field names follow the compact PGN-JSON keys (`wv`, `d`, `sd`, `n`, `s`,
//   `tb`, `mt`); the long names are accepted as aliases.
// - Feeds often send numbers as strings ("d": "34"); both forms are accepted.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::eval::EvalScore;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Half-move index; 0 is White's first move. Live feeds count from 1.
    #[serde(default)]
    pub ply: u32,
    #[serde(rename = "wv", alias = "eval", default, skip_serializing_if = "Option::is_none")]
    pub eval: Option<EvalScore>,
    #[serde(rename = "d", alias = "depth", default, deserialize_with = "loose_number", skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(rename = "sd", alias = "selective_depth", default, deserialize_with = "loose_number", skip_serializing_if = "Option::is_none")]
    pub selective_depth: Option<f64>,
    #[serde(rename = "n", alias = "nodes", default, deserialize_with = "loose_number", skip_serializing_if = "Option::is_none")]
    pub nodes: Option<f64>,
    /// Nodes per second.
    #[serde(rename = "s", alias = "speed", default, deserialize_with = "loose_number", skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(rename = "tb", alias = "tb_hits", default, deserialize_with = "loose_number", skip_serializing_if = "Option::is_none")]
    pub tb_hits: Option<f64>,
    /// Time spent on the move, in milliseconds.
    #[serde(rename = "mt", alias = "time_ms", default, deserialize_with = "loose_number", skip_serializing_if = "Option::is_none")]
    pub time_ms: Option<f64>,
    /// Opening-book move: gets a label slot but is never plotted.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub book: bool,
}

impl MoveRecord {
    pub fn new(ply: u32) -> Self {
        Self { ply, ..Self::default() }
    }

    pub fn book(ply: u32) -> Self {
        Self { ply, book: true, ..Self::default() }
    }

    pub fn with_eval(mut self, eval: impl Into<EvalScore>) -> Self {
        self.eval = Some(eval.into());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
}

fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(match raw {
        Some(LooseNumber::Number(v)) => Some(v),
        Some(LooseNumber::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    })
}

/// Parse a JSON move list. `null` entries are moves not yet known.
pub fn parse_moves(json: &str) -> GraphResult<Vec<Option<MoveRecord>>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON move list from disk.
pub fn load_moves(path: impl AsRef<Path>) -> GraphResult<Vec<Option<MoveRecord>>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|source| GraphError::Io { path: path.to_path_buf(), source })?;
    parse_moves(&text)
}
