// File: crates/engine-graph/src/category.rs
// Summary: The closed set of statistic categories, one chart per category.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Eval,
    Time,
    Speed,
    Node,
    Depth,
    Tb,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Depth,
        Category::Eval,
        Category::Node,
        Category::Speed,
        Category::Tb,
        Category::Time,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Eval => "eval",
            Category::Time => "time",
            Category::Speed => "speed",
            Category::Node => "node",
            Category::Depth => "depth",
            Category::Tb => "tb",
        }
    }

    /// Element id of the canvas the chart draws into, e.g. `table-eval`.
    pub fn canvas_id(self) -> String {
        format!("table-{}", self.as_str())
    }

    /// Series receiving the secondary point of a ply, if the category has one.
    /// Depth plots selective depth into `ply % 2 + 2`.
    pub const fn secondary_series(self, ply: u32) -> Option<usize> {
        match self {
            Category::Depth => Some((ply % 2) as usize + 2),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GraphError::UnknownCategory(s.to_string()))
    }
}
