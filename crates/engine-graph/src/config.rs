// File: crates/engine-graph/src/config.rs
// Summary: User-tunable graph settings (eval bound, side colors, live engine names/colors).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::eval::MAX_EVAL;

/// Graph settings. Every field is optional in JSON; missing ones take the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Evaluations are plotted within `[-max_eval, max_eval]`.
    pub max_eval: f64,
    pub color_white: String,
    pub color_black: String,
    /// Eval chart series, in series-index order: white, black, then live engines.
    pub engine_names: Vec<String>,
    pub engine_colors: Vec<String>,
    /// Most x-axis labels drawn before ticks are skipped.
    pub max_x_ticks: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        let white = "#efefef".to_string();
        let black = "#000000".to_string();
        Self {
            max_eval: MAX_EVAL,
            engine_names: ["White", "Black", "Blueleela", "7Fish"].map(String::from).to_vec(),
            engine_colors: vec![white.clone(), black.clone(), "#007bff".into(), "darkred".into()],
            color_white: white,
            color_black: black,
            max_x_ticks: 25,
        }
    }
}

impl GraphConfig {
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| GraphError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&text)
    }

    /// (name, color) of each eval series. Engines without a color get gray.
    pub fn engines(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.engine_names.iter().enumerate().map(|(i, name)| {
            let color = self.engine_colors.get(i).map(String::as_str).unwrap_or("gray");
            (name.as_str(), color)
        })
    }
}
