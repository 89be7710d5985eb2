use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::{sync::mpsc, time::{self, Duration}};

use crate::config::AlignmentSettings;
use crate::core::pose::PoseClassifier;
use crate::models::{Classification, LandmarkSet, Orientation};

/// Errors reported by a landmark source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Landmark source closed")]
    Closed,

    #[error("Landmark source unavailable: {0}")]
    Unavailable(String),
}

/// Per-frame supplier of detected landmarks
///
/// `Ok(None)` means the detector ran but found no face this frame.
#[async_trait]
pub trait LandmarkSource: Send {
    async fn next_frame(&mut self) -> Result<Option<LandmarkSet>, SourceError>;
}

/// Where the player stands relative to the target orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentState {
    /// No face in the current frame
    Searching,
    /// Face present but not (yet) held on the target
    Aligning,
    /// Target orientation held for the required number of frames
    Matched,
}

/// State change emitted by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: AlignmentState,
    pub to: AlignmentState,
}

/// Finite-state machine fed with one classification per frame
#[derive(Debug, Clone)]
pub struct AlignmentTracker {
    target: Orientation,
    required_frames: u32,
    streak: u32,
    state: AlignmentState,
}

impl AlignmentTracker {
    /// `required_frames` below 1 is treated as 1
    pub fn new(target: Orientation, required_frames: u32) -> Self {
        Self {
            target,
            required_frames: required_frames.max(1),
            streak: 0,
            state: AlignmentState::Searching,
        }
    }

    pub fn from_settings(target: Orientation, settings: &AlignmentSettings) -> Self {
        Self::new(target, settings.required_frames)
    }

    pub fn state(&self) -> AlignmentState {
        self.state
    }

    pub fn target(&self) -> Orientation {
        self.target
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Feed one frame; `None` means no face was detected
    ///
    /// Returns the transition when the state changed.
    pub fn advance(&mut self, frame: Option<Classification>) -> Option<Transition> {
        let next = match frame {
            None => {
                self.streak = 0;
                AlignmentState::Searching
            }
            Some(classification) if classification.orientation() == Some(self.target) => {
                self.streak = self.streak.saturating_add(1);
                if self.streak >= self.required_frames {
                    AlignmentState::Matched
                } else {
                    AlignmentState::Aligning
                }
            }
            Some(_) => {
                self.streak = 0;
                AlignmentState::Aligning
            }
        };

        self.transition_to(next)
    }

    /// Switch to a new target orientation and start over
    pub fn retarget(&mut self, target: Orientation) -> Option<Transition> {
        self.target = target;
        self.streak = 0;
        self.transition_to(AlignmentState::Searching)
    }

    fn transition_to(&mut self, next: AlignmentState) -> Option<Transition> {
        if next == self.state {
            return None;
        }
        let transition = Transition {
            from: self.state,
            to: next,
        };
        self.state = next;
        Some(transition)
    }
}

/// Tick loop driving a tracker from a landmark source
pub struct FramePoller {
    classifier: PoseClassifier,
    tracker: AlignmentTracker,
    tick: Duration,
}

impl FramePoller {
    pub fn new(classifier: PoseClassifier, tracker: AlignmentTracker, tick: Duration) -> Self {
        Self {
            classifier,
            tracker,
            tick,
        }
    }

    /// Poller whose streak length and tick come from `[alignment]`
    pub fn from_settings(
        classifier: PoseClassifier,
        target: Orientation,
        settings: &AlignmentSettings,
    ) -> Self {
        Self::new(
            classifier,
            AlignmentTracker::from_settings(target, settings),
            settings.tick(),
        )
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn tracker(&self) -> &AlignmentTracker {
        &self.tracker
    }

    /// Classify one polled frame and advance the tracker
    pub fn step(&mut self, frame: Option<&LandmarkSet>) -> Option<Transition> {
        let classification = frame.map(|landmarks| self.classifier.classify(landmarks));
        if let Some(Classification::Rejected(rejection)) = classification {
            tracing::trace!("Frame rejected: {:?}", rejection);
        }
        self.tracker.advance(classification)
    }

    /// Poll `source` once per tick until it closes or `tx` is dropped
    pub async fn run<S>(&mut self, source: &mut S, tx: mpsc::Sender<Transition>)
    where
        S: LandmarkSource + ?Sized,
    {
        let mut ticker = time::interval(self.tick);
        loop {
            ticker.tick().await;

            let frame = match source.next_frame().await {
                Ok(frame) => frame,
                Err(SourceError::Closed) => {
                    tracing::debug!("Landmark source closed, stopping poller");
                    break;
                }
                Err(e) => {
                    tracing::warn!("Landmark source failed, treating frame as empty: {}", e);
                    None
                }
            };

            if let Some(transition) = self.step(frame.as_ref()) {
                tracing::debug!("Alignment {:?} -> {:?}", transition.from, transition.to);
                if tx.send(transition).await.is_err() {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, Rejection};

    const CENTER: Option<Classification> = Some(Classification::Facing(Orientation::Center));
    const LEFT: Option<Classification> = Some(Classification::Facing(Orientation::Left));
    const REJECTED: Option<Classification> =
        Some(Classification::Rejected(Rejection::DegenerateJaw));

    #[test]
    fn test_starts_searching() {
        let tracker = AlignmentTracker::new(Orientation::Center, 3);
        assert_eq!(tracker.state(), AlignmentState::Searching);
    }

    #[test]
    fn test_matches_after_required_frames() {
        let mut tracker = AlignmentTracker::new(Orientation::Center, 3);

        assert_eq!(
            tracker.advance(CENTER),
            Some(Transition {
                from: AlignmentState::Searching,
                to: AlignmentState::Aligning
            })
        );
        assert_eq!(tracker.advance(CENTER), None);
        assert_eq!(
            tracker.advance(CENTER),
            Some(Transition {
                from: AlignmentState::Aligning,
                to: AlignmentState::Matched
            })
        );
        assert_eq!(tracker.advance(CENTER), None);
        assert_eq!(tracker.state(), AlignmentState::Matched);
    }

    #[test]
    fn test_off_target_resets_streak() {
        let mut tracker = AlignmentTracker::new(Orientation::Center, 2);

        tracker.advance(CENTER);
        tracker.advance(LEFT);
        assert_eq!(tracker.streak(), 0);
        tracker.advance(CENTER);
        assert_eq!(tracker.state(), AlignmentState::Aligning);
        tracker.advance(CENTER);
        assert_eq!(tracker.state(), AlignmentState::Matched);
    }

    #[test]
    fn test_rejected_frame_is_aligning() {
        let mut tracker = AlignmentTracker::new(Orientation::Center, 1);

        tracker.advance(CENTER);
        assert_eq!(tracker.state(), AlignmentState::Matched);
        tracker.advance(REJECTED);
        assert_eq!(tracker.state(), AlignmentState::Aligning);
    }

    #[test]
    fn test_lost_face_is_searching() {
        let mut tracker = AlignmentTracker::new(Orientation::Center, 1);

        tracker.advance(CENTER);
        assert_eq!(
            tracker.advance(None),
            Some(Transition {
                from: AlignmentState::Matched,
                to: AlignmentState::Searching
            })
        );
    }

    #[test]
    fn test_zero_required_frames_clamped() {
        let mut tracker = AlignmentTracker::new(Orientation::Left, 0);

        tracker.advance(LEFT);
        assert_eq!(tracker.state(), AlignmentState::Matched);
    }

    #[test]
    fn test_from_settings() {
        let settings = AlignmentSettings {
            required_frames: 2,
            tick_ms: 40,
        };
        let mut poller =
            FramePoller::from_settings(PoseClassifier::default(), Orientation::Center, &settings);

        assert_eq!(poller.tick(), Duration::from_millis(40));
        assert_eq!(poller.tracker().target(), Orientation::Center);

        let face = LandmarkSet::new(
            vec![Point::new(50.0, 0.0)],
            vec![Point::new(0.0, 20.0), Point::new(50.0, 100.0), Point::new(100.0, 20.0)],
        );
        poller.step(Some(&face));
        assert_eq!(poller.tracker().state(), AlignmentState::Aligning);
        poller.step(Some(&face));
        assert_eq!(poller.tracker().state(), AlignmentState::Matched);
    }

    #[test]
    fn test_retarget() {
        let mut tracker = AlignmentTracker::new(Orientation::Center, 1);

        tracker.advance(CENTER);
        tracker.retarget(Orientation::Left);
        assert_eq!(tracker.state(), AlignmentState::Searching);
        assert_eq!(tracker.target(), Orientation::Left);
        tracker.advance(CENTER);
        assert_eq!(tracker.state(), AlignmentState::Aligning);
    }
}
