use crate::models::{Classification, LandmarkSet, Orientation, Point, PoseThresholds, Rejection};

/// Face orientation classifier
///
/// Reads the nose bridge and jaw outline of one detected face and decides
/// whether the subject faces left, center or right. "Left" and "right"
/// follow jaw array order as produced by the detector, not anatomy.
///
/// # Steps
/// 1. Reject faces whose nose-to-chin axis leans too far from vertical
/// 2. Locate the top of the nose relative to the jaw endpoints
/// 3. Bucket that offset into thirds
#[derive(Debug, Clone, Copy, Default)]
pub struct PoseClassifier {
    thresholds: PoseThresholds,
}

impl PoseClassifier {
    pub fn new(thresholds: PoseThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &PoseThresholds {
        &self.thresholds
    }

    /// Classify one landmark set
    ///
    /// Never fails: unusable geometry comes back as `Classification::Rejected`.
    pub fn classify(&self, landmarks: &LandmarkSet) -> Classification {
        if !landmarks.is_complete() {
            return Classification::Rejected(Rejection::MissingLandmarks);
        }

        let jaw = &landmarks.jaw_outline;
        let top_nose = landmarks.nose_bridge[0];
        let mid = jaw[jaw.len() / 2];
        let left = jaw[0];
        let right = jaw[jaw.len() - 1];

        if ![top_nose, mid, left, right].iter().all(Point::is_finite) {
            return Classification::Rejected(Rejection::NonFinite);
        }

        let degrees = tilt_degrees(top_nose, mid);
        if !self.is_upright(degrees) {
            tracing::trace!("Rejecting tilted face: {:.2} degrees", degrees);
            return Classification::Rejected(Rejection::Tilted { degrees });
        }

        let Some(percent) = nose_offset_percent(top_nose, left, right) else {
            return Classification::Rejected(Rejection::DegenerateJaw);
        };

        if !percent.is_finite() {
            return Classification::Rejected(Rejection::NonFinite);
        }

        Classification::Facing(self.orientation_for_offset(percent))
    }

    /// Whether a tilt angle is small enough to trust horizontal offsets
    #[inline]
    pub fn is_upright(&self, degrees: f64) -> bool {
        degrees.abs() <= self.thresholds.max_tilt_degrees
    }

    /// Bucket a nose offset percentage; both bounds are strict
    #[inline]
    pub fn orientation_for_offset(&self, percent: f64) -> Orientation {
        if percent < self.thresholds.left_percent {
            Orientation::Left
        } else if percent > self.thresholds.right_percent {
            Orientation::Right
        } else {
            Orientation::Center
        }
    }
}

/// Signed angle in degrees between `from -> to` and the vertical axis
#[inline]
pub fn tilt_degrees(from: Point, to: Point) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    dx.atan2(dy).to_degrees()
}

/// Distance of the nose from the right jaw point as a percentage of jaw width
///
/// Returns `None` for a zero-width jaw.
#[inline]
pub fn nose_offset_percent(top_nose: Point, left: Point, right: Point) -> Option<f64> {
    let width = left.x - right.x;
    if width == 0.0 {
        return None;
    }
    Some(((right.x - top_nose.x) / width * 100.0).abs())
}
