use serde::{Deserialize, Serialize};

/// A point in the integer plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance from the origin.
    ///
    /// Squaring preserves the distance ordering, so the selection algorithms
    /// never need the square root and stay in integer arithmetic.
    pub fn squared_distance(&self) -> i64 {
        self.x * self.x + self.y * self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_squared_distance() {
        assert_eq!(Point::new(0, 0).squared_distance(), 0);
        assert_eq!(Point::new(3, 4).squared_distance(), 25);
        assert_eq!(Point::new(-2, 2).squared_distance(), 8);
    }

    #[test]
    fn test_point_serde_round_trip() {
        let point = Point::new(-7, 12);
        let json = serde_json::to_string(&point).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }
}
