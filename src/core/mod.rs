// Core algorithm exports
pub mod alignment;
pub mod pose;
pub mod ranking;

pub use alignment::{AlignmentState, AlignmentTracker, FramePoller, LandmarkSource, SourceError, Transition};
pub use pose::{nose_offset_percent, tilt_degrees, PoseClassifier};
pub use ranking::{locate, rank, RankEngine, RankError};
