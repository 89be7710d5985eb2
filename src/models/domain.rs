use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of points in the iBUG 68-point facial landmark layout
pub const IBUG68_LEN: usize = 68;

/// Errors raised while building a landmark set from raw detector output
#[derive(Debug, Error, PartialEq)]
pub enum LandmarkError {
    #[error("Expected at least {expected} landmarks, got {actual}")]
    TooFewPoints { expected: usize, actual: usize },
}

/// 2D coordinate in image-pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Facial landmarks for one detected face, grouped by anatomical curve
///
/// The jaw outline runs from one side of the face to the other in detector
/// order. A usable set has at least two jaw points and one nose point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandmarkSet {
    #[serde(rename = "noseBridge")]
    pub nose_bridge: Vec<Point>,
    #[serde(rename = "jawOutline")]
    pub jaw_outline: Vec<Point>,
}

impl LandmarkSet {
    pub fn new(nose_bridge: Vec<Point>, jaw_outline: Vec<Point>) -> Self {
        Self {
            nose_bridge,
            jaw_outline,
        }
    }

    /// Build a landmark set from the 68-point iBUG layout
    ///
    /// Jaw outline is indices 0..17 and the nose (bridge then base) is
    /// indices 27..36.
    pub fn from_ibug68(points: &[Point]) -> Result<Self, LandmarkError> {
        if points.len() < IBUG68_LEN {
            return Err(LandmarkError::TooFewPoints {
                expected: IBUG68_LEN,
                actual: points.len(),
            });
        }

        Ok(Self {
            nose_bridge: points[27..36].to_vec(),
            jaw_outline: points[0..17].to_vec(),
        })
    }

    /// True when both curves are long enough to classify
    pub fn is_complete(&self) -> bool {
        !self.nose_bridge.is_empty() && self.jaw_outline.len() >= 2
    }
}

/// Coarse facing direction derived from landmark geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Left,
    Center,
    Right,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Left => "left",
            Orientation::Center => "center",
            Orientation::Right => "right",
        }
    }
}

/// Why a frame produced no actionable orientation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// Nose bridge empty or jaw outline shorter than two points
    MissingLandmarks,
    /// Nose-to-chin axis leans further from vertical than allowed
    Tilted { degrees: f64 },
    /// Jaw endpoints share an x coordinate
    DegenerateJaw,
    /// NaN or infinite coordinates in the geometry
    NonFinite,
}

/// Outcome of classifying one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    Facing(Orientation),
    Rejected(Rejection),
}

impl Classification {
    pub fn orientation(&self) -> Option<Orientation> {
        match self {
            Classification::Facing(orientation) => Some(*orientation),
            Classification::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Classification::Facing(_) => None,
            Classification::Rejected(rejection) => Some(*rejection),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Classification::Rejected(_))
    }
}

/// Pose classifier thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseThresholds {
    /// Largest accepted |angle| in degrees between nose-to-chin and vertical
    pub max_tilt_degrees: f64,
    /// Offset percentages strictly below this are `Left`
    pub left_percent: f64,
    /// Offset percentages strictly above this are `Right`
    pub right_percent: f64,
}

impl Default for PoseThresholds {
    fn default() -> Self {
        Self {
            max_tilt_degrees: 15.0,
            left_percent: 33.333,
            right_percent: 66.666,
        }
    }
}

/// Scored participant as supplied by the score source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    pub id: String,
    #[serde(alias = "point")]
    pub score: f64,
}

impl RankEntry {
    pub fn new(id: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }
}

/// Ranked participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedRankEntry {
    pub id: String,
    pub score: f64,
    /// Index of the first entry sharing this score in the sorted list
    #[serde(rename = "rankPosition")]
    pub rank_position: usize,
    /// Ordinal of this score among distinct scores, highest first
    #[serde(rename = "jointGroup")]
    pub joint_group: usize,
}

impl FormattedRankEntry {
    /// Podium trophy for this entry, if its tier is within `podium_tiers`
    pub fn trophy(&self, podium_tiers: usize) -> Option<Trophy> {
        if self.joint_group >= podium_tiers {
            return None;
        }
        Trophy::from_joint_group(self.joint_group)
    }
}

/// Podium tier awarded to the top distinct scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trophy {
    Gold,
    Silver,
    Bronze,
}

impl Trophy {
    pub fn from_joint_group(joint_group: usize) -> Option<Self> {
        match joint_group {
            0 => Some(Trophy::Gold),
            1 => Some(Trophy::Silver),
            2 => Some(Trophy::Bronze),
            _ => None,
        }
    }
}
