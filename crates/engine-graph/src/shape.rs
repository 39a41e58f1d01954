// File: crates/engine-graph/src/shape.rs
// Summary: Category -> point-shaping table for batch updates.

use crate::category::Category;
use crate::dataset::Point;
use crate::eval::clamp_eval;
use crate::moves::MoveRecord;

/// Points one move contributes to a category chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shaped {
    /// Goes to series `ply % 2`. `None` leaves a gap (statistic missing).
    pub primary: Option<Point>,
    /// Goes to `Category::secondary_series`, when the category has one.
    pub secondary: Option<Point>,
}

/// Shapes one move into points; `base` carries `x` and `ply`.
pub type Shaper = fn(&MoveRecord, Point, f64) -> Shaped;

impl Category {
    pub fn shaper(self) -> Shaper {
        match self {
            Category::Depth => shape_depth,
            Category::Eval => shape_eval,
            Category::Node => shape_node,
            Category::Speed => shape_speed,
            Category::Tb => shape_tb,
            Category::Time => shape_time,
        }
    }

    /// Shape `mv` at move slot `num` / ply `ply`.
    pub fn shape(self, mv: &MoveRecord, num: usize, ply: u32, max_eval: f64) -> Shaped {
        let base = Point::new(num as u32 + 1, ply, 0.0);
        (self.shaper())(mv, base, max_eval)
    }
}

fn with_y(base: &Point, y: Option<f64>) -> Option<Point> {
    y.map(|y| Point { y, ..base.clone() })
}

fn shape_depth(mv: &MoveRecord, base: Point, _: f64) -> Shaped {
    Shaped {
        secondary: with_y(&base, mv.selective_depth),
        primary: with_y(&base, mv.depth),
    }
}

fn shape_eval(mv: &MoveRecord, base: Point, max_eval: f64) -> Shaped {
    let point = Point {
        y: clamp_eval(mv.eval.as_ref(), max_eval),
        eval: mv.eval.clone(),
        ..base
    };
    Shaped { primary: Some(point), secondary: None }
}

fn shape_node(mv: &MoveRecord, base: Point, _: f64) -> Shaped {
    let primary = with_y(&base, mv.nodes).map(|p| Point { nodes: mv.nodes, ..p });
    Shaped { primary, secondary: None }
}

fn shape_speed(mv: &MoveRecord, base: Point, _: f64) -> Shaped {
    let primary = with_y(&base, mv.speed).map(|p| Point { nodes: mv.nodes, ..p });
    Shaped { primary, secondary: None }
}

fn shape_tb(mv: &MoveRecord, base: Point, _: f64) -> Shaped {
    Shaped { primary: with_y(&base, mv.tb_hits), secondary: None }
}

fn shape_time(mv: &MoveRecord, base: Point, _: f64) -> Shaped {
    // half-up rounding of seconds
    let secs = mv.time_ms.map(|ms| (ms / 1000.0 + 0.5).floor());
    Shaped { primary: with_y(&base, secs), secondary: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{EvalScore, MAX_EVAL};

    fn full_move(ply: u32) -> MoveRecord {
        MoveRecord {
            ply,
            eval: Some(EvalScore::Pawns(0.7)),
            depth: Some(31.0),
            selective_depth: Some(47.0),
            nodes: Some(9.0e7),
            speed: Some(3.1e6),
            tb_hits: Some(12.0),
            time_ms: Some(14_500.0),
            book: false,
        }
    }

    #[test]
    fn every_category_uses_base_coordinates() {
        let mv = full_move(9);
        for c in Category::ALL {
            let shaped = c.shape(&mv, 4, 9, MAX_EVAL);
            let p = shaped.primary.expect("primary point");
            assert_eq!((p.x, p.ply), (5, 9), "{c}");
        }
    }

    #[test]
    fn category_values() {
        let mv = full_move(9);
        let y = |c: Category| c.shape(&mv, 4, 9, MAX_EVAL).primary.map(|p| p.y);
        assert_eq!(y(Category::Depth), Some(31.0));
        assert_eq!(y(Category::Eval), Some(0.7));
        assert_eq!(y(Category::Node), Some(9.0e7));
        assert_eq!(y(Category::Speed), Some(3.1e6));
        assert_eq!(y(Category::Tb), Some(12.0));
        assert_eq!(y(Category::Time), Some(15.0));
    }

    #[test]
    fn extra_fields() {
        let mv = full_move(2);
        let speed = Category::Speed.shape(&mv, 1, 2, MAX_EVAL).primary.unwrap();
        assert_eq!(speed.nodes, Some(9.0e7));
        let eval = Category::Eval.shape(&mv, 1, 2, MAX_EVAL).primary.unwrap();
        assert_eq!(eval.eval, Some(EvalScore::Pawns(0.7)));
        assert_eq!(eval.nodes, None);
        let depth = Category::Depth.shape(&mv, 1, 2, MAX_EVAL);
        assert_eq!(depth.secondary.map(|p| p.y), Some(47.0));
        assert!(Category::Tb.shape(&mv, 1, 2, MAX_EVAL).secondary.is_none());
    }

    #[test]
    fn missing_statistics_leave_gaps_except_eval() {
        let mv = MoveRecord::new(3);
        assert!(Category::Node.shape(&mv, 1, 3, MAX_EVAL).primary.is_none());
        assert!(Category::Time.shape(&mv, 1, 3, MAX_EVAL).primary.is_none());
        let eval = Category::Eval.shape(&mv, 1, 3, MAX_EVAL).primary.unwrap();
        assert_eq!(eval.y, 0.0);
    }

    #[test]
    fn eval_is_clamped_but_raw_is_kept() {
        let mv = MoveRecord::new(0).with_eval("-M3");
        let p = Category::Eval.shape(&mv, 0, 0, MAX_EVAL).primary.unwrap();
        assert_eq!(p.y, -10.0);
        assert_eq!(p.eval, Some(EvalScore::Text("-M3".into())));
    }
}
