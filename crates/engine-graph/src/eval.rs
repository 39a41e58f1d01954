// File: crates/engine-graph/src/eval.rs
// Summary: Engine evaluation scores and their bounded plotting surrogate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default plotting bound for evaluations, in pawns.
pub const MAX_EVAL: f64 = 10.0;

/// Evaluation as reported by an engine: a number of pawns, or a symbolic
/// score such as a mate announcement (`"M5"`, `"-M3"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvalScore {
    Pawns(f64),
    Text(String),
}

impl EvalScore {
    /// Numeric value, if the score is a number or a string that reads as one.
    /// An empty string reads as 0.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            EvalScore::Pawns(v) => Some(*v),
            EvalScore::Text(s) => {
                let s = s.trim();
                if s.is_empty() { Some(0.0) } else { s.parse::<f64>().ok() }
            }
        }
    }
}

impl From<f64> for EvalScore {
    fn from(v: f64) -> Self {
        EvalScore::Pawns(v)
    }
}

impl From<&str> for EvalScore {
    fn from(s: &str) -> Self {
        EvalScore::Text(s.to_string())
    }
}

impl fmt::Display for EvalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalScore::Pawns(v) => write!(f, "{v}"),
            EvalScore::Text(s) => f.write_str(s),
        }
    }
}

/// Map an evaluation onto `[-max_eval, max_eval]`.
///
/// Numbers are clamped. Anything else present saturates: to `-max_eval` when
/// it starts with `-` (mate against), `+max_eval` otherwise. Absent is 0.
pub fn clamp_eval(eval: Option<&EvalScore>, max_eval: f64) -> f64 {
    let Some(eval) = eval else { return 0.0 };
    match eval.as_number() {
        Some(v) if !v.is_nan() => v.clamp(-max_eval, max_eval),
        _ => match eval {
            EvalScore::Text(s) if s.starts_with('-') => -max_eval,
            _ => max_eval,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clamp(e: impl Into<EvalScore>) -> f64 {
        clamp_eval(Some(&e.into()), MAX_EVAL)
    }

    #[test]
    fn numbers_are_clamped() {
        for v in [-25.0, -10.0, -3.5, 0.0, 0.2, 9.99, 10.0, 42.0] {
            assert_eq!(clamp(v), v.clamp(-10.0, 10.0));
        }
    }

    #[test]
    fn numeric_strings_are_numbers() {
        assert_eq!(clamp("3.2"), 3.2);
        assert_eq!(clamp("-12"), -10.0);
        assert_eq!(clamp(""), 0.0);
    }

    #[test]
    fn mate_scores_saturate() {
        assert_eq!(clamp("-M3"), -10.0);
        assert_eq!(clamp("M5"), 10.0);
        assert_eq!(clamp("#7"), 10.0);
        assert_eq!(clamp(f64::NAN), 10.0);
    }

    #[test]
    fn absent_is_zero() {
        assert_eq!(clamp_eval(None, MAX_EVAL), 0.0);
    }

    #[test]
    fn bound_is_configurable() {
        assert_eq!(clamp_eval(Some(&EvalScore::Pawns(7.0)), 5.0), 5.0);
        assert_eq!(clamp_eval(Some(&"-M1".into()), 5.0), -5.0);
    }

    #[test]
    fn untagged_json() {
        let v: Vec<EvalScore> = serde_json::from_str(r#"[0.25, "M12", "-1.5"]"#).unwrap();
        assert_eq!(v[0], EvalScore::Pawns(0.25));
        assert_eq!(v[1], EvalScore::Text("M12".into()));
        assert_eq!(v[2].as_number(), Some(-1.5));
    }
}
