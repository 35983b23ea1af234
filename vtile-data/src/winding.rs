//! Contour orientation helpers.
//!
//! The area of a contour is calculated with the shoelace formula over `x` and `y` of its points in the y-up tile
//! frame, with the last point connected to the first one. Counterclockwise contours have positive area, clockwise
//! contours have negative area. Tessellators use the sign to separate outer contours from holes: all contours with the
//! same sign as the first contour of a polygon are outer boundaries, the rest are holes.
//!
//! Nothing in this crate changes the orientation of stored contours.

use serde::{Deserialize, Serialize};

use crate::Point;

/// Direction in which a closed contour is traversed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winding {
    /// Clockwise.
    Clockwise,
    /// Counterclockwise.
    CounterClockwise,
}

impl Winding {
    /// Opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
        }
    }
}

/// Signed area of a closed contour. Contours with less than 3 points have zero area.
pub fn area_signed(contour: &[Point]) -> f32 {
    if contour.len() < 3 {
        return 0.0;
    }

    let mut prev = &contour[contour.len() - 1];
    let mut aggr = 0.0;
    for p in contour {
        aggr += prev.x * p.y - p.x * prev.y;
        prev = p;
    }

    aggr / 2.0
}

/// Winding of a closed contour. Degenerate contours with zero area are considered clockwise.
pub fn winding(contour: &[Point]) -> Winding {
    if area_signed(contour) <= 0.0 {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    }
}
