//! The transform attribute grammar: one function application per node.
//!
//! `translate(dx dy)`, `rotate(deg)` and `scale(f)` with integer arguments
//! separated by whitespace or commas (repeated separators collapse). Only
//! the first recognized `name(args)` pair is consumed; transform lists do
//! not compose.

use crate::element::{Element, Shape};
use crate::types::Point;

/// One parsed transform function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Translate(Point),
    Rotate(i32),
    Scale(i32),
}

impl Transform {
    /// Parse a `transform` attribute value.
    ///
    /// Unknown function names and values without a `(..)` pair yield `None`.
    pub fn parse(attr: &str) -> Option<Transform> {
        let open = attr.find('(')?;
        let close = open + attr[open..].find(')')?;
        let name = attr[..open].trim();
        let args = int_args(&attr[open + 1..close]);
        match name {
            "translate" => Some(Transform::Translate(Point::new(arg(&args, 0), arg(&args, 1)))),
            "rotate" => Some(Transform::Rotate(arg(&args, 0))),
            "scale" => Some(Transform::Scale(arg(&args, 0))),
            _ => None,
        }
    }

    /// Apply onto `element`; rotate and scale pivot about `origin`.
    pub fn apply(self, element: &mut Element, origin: Point) {
        match self {
            Transform::Translate(delta) => element.translate(delta),
            Transform::Rotate(degrees) => element.rotate(degrees, origin),
            Transform::Scale(factor) => element.scale(factor, origin),
        }
    }
}

/// Parse a `transform-origin` attribute (space-separated `x y`).
///
/// An absent attribute pivots about (0,0).
pub fn parse_origin(attr: Option<&str>) -> Point {
    match attr {
        Some(s) => {
            let args = int_args(s);
            Point::new(arg(&args, 0), arg(&args, 1))
        }
        None => Point::ZERO,
    }
}

/// Split on whitespace and commas, collapsing repeated separators.
///
/// Malformed numbers read as zero; the reader validated the document.
fn int_args(s: &str) -> Vec<i32> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| tok.parse().unwrap_or(0))
        .collect()
}

fn arg(args: &[i32], i: usize) -> i32 {
    args.get(i).copied().unwrap_or(0)
}
