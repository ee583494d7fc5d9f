// WiPose 📡 AGPL-3.0 License - https://github.com/wipose/wipose

//! Mock prediction generator.
//!
//! Synthesizes plausible [`PredictionResult`]s without any real CSI data,
//! for UI demonstration and testing. Each posture has a hand-authored table
//! of 17 base joint positions; a generated skeleton is the table for the
//! drawn posture plus independent uniform jitter per axis per joint.
//!
//! The generator is total: it never fails and has no side effects beyond
//! consuming randomness. The random source is injectable so tests can seed
//! it.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::joints::{Coordinate, JointsCoordinates, JOINT_COUNT};
use crate::results::{PoseType, PredictionResult};

/// Probability that a mock capture contains a human.
pub const PRESENCE_PROBABILITY: f64 = 0.9;

/// Per-axis jitter bound applied to every base joint position.
pub const JITTER: f64 = 0.05;

/// Base joint positions for an upright standing posture.
const STAND_BASE: [Coordinate; JOINT_COUNT] = [
    Coordinate::new(0.0, -0.7),    // nose
    Coordinate::new(0.0, -0.5),    // neck
    Coordinate::new(0.2, -0.5),    // right shoulder
    Coordinate::new(0.4, -0.3),    // right elbow
    Coordinate::new(0.6, -0.1),    // right wrist
    Coordinate::new(-0.2, -0.5),   // left shoulder
    Coordinate::new(-0.4, -0.3),   // left elbow
    Coordinate::new(-0.6, -0.1),   // left wrist
    Coordinate::new(0.0, 0.0),     // hip center
    Coordinate::new(0.1, 0.0),     // right hip
    Coordinate::new(0.15, 0.4),    // right knee
    Coordinate::new(0.2, 0.8),     // right ankle
    Coordinate::new(-0.1, 0.0),    // left hip
    Coordinate::new(-0.15, 0.4),   // left knee
    Coordinate::new(-0.2, 0.8),    // left ankle
    Coordinate::new(0.05, -0.75),  // right eye
    Coordinate::new(-0.05, -0.75), // left eye
];

/// Base joint positions for a seated posture (bent knees, lowered torso).
const SIT_BASE: [Coordinate; JOINT_COUNT] = [
    Coordinate::new(0.0, -0.4),    // nose
    Coordinate::new(0.0, -0.2),    // neck
    Coordinate::new(0.2, -0.2),    // right shoulder
    Coordinate::new(0.4, 0.0),     // right elbow
    Coordinate::new(0.5, 0.2),     // right wrist
    Coordinate::new(-0.2, -0.2),   // left shoulder
    Coordinate::new(-0.4, 0.0),    // left elbow
    Coordinate::new(-0.5, 0.2),    // left wrist
    Coordinate::new(0.0, 0.3),     // hip center
    Coordinate::new(0.15, 0.3),    // right hip
    Coordinate::new(0.2, 0.6),     // right knee
    Coordinate::new(0.1, 0.9),     // right ankle
    Coordinate::new(-0.15, 0.3),   // left hip
    Coordinate::new(-0.2, 0.6),    // left knee
    Coordinate::new(-0.1, 0.9),    // left ankle
    Coordinate::new(0.05, -0.45),  // right eye
    Coordinate::new(-0.05, -0.45), // left eye
];

/// Base joint positions for a kneeling posture (asymmetric knee bend).
const KNEEL_BASE: [Coordinate; JOINT_COUNT] = [
    Coordinate::new(0.0, -0.3),    // nose
    Coordinate::new(0.0, -0.1),    // neck
    Coordinate::new(0.2, -0.1),    // right shoulder
    Coordinate::new(0.4, 0.1),     // right elbow
    Coordinate::new(0.5, 0.3),     // right wrist
    Coordinate::new(-0.2, -0.1),   // left shoulder
    Coordinate::new(-0.4, 0.1),    // left elbow
    Coordinate::new(-0.5, 0.3),    // left wrist
    Coordinate::new(0.0, 0.3),     // hip center
    Coordinate::new(0.15, 0.3),    // right hip
    Coordinate::new(0.1, 0.7),     // right knee
    Coordinate::new(0.2, 0.9),     // right ankle
    Coordinate::new(-0.15, 0.3),   // left hip
    Coordinate::new(-0.05, 0.6),   // left knee
    Coordinate::new(-0.1, 0.4),    // left ankle
    Coordinate::new(0.05, -0.35),  // right eye
    Coordinate::new(-0.05, -0.35), // left eye
];

/// Base joint positions for a lying posture (horizontal torso).
const SLEEP_BASE: [Coordinate; JOINT_COUNT] = [
    Coordinate::new(-0.7, 0.0),    // nose
    Coordinate::new(-0.5, 0.0),    // neck
    Coordinate::new(-0.3, 0.2),    // right shoulder
    Coordinate::new(-0.1, 0.3),    // right elbow
    Coordinate::new(0.1, 0.4),     // right wrist
    Coordinate::new(-0.3, -0.2),   // left shoulder
    Coordinate::new(-0.1, -0.3),   // left elbow
    Coordinate::new(0.1, -0.4),    // left wrist
    Coordinate::new(0.0, 0.0),     // hip center
    Coordinate::new(0.2, 0.1),     // right hip
    Coordinate::new(0.4, 0.15),    // right knee
    Coordinate::new(0.7, 0.2),     // right ankle
    Coordinate::new(0.2, -0.1),    // left hip
    Coordinate::new(0.4, -0.15),   // left knee
    Coordinate::new(0.7, -0.2),    // left ankle
    Coordinate::new(-0.75, 0.05),  // right eye
    Coordinate::new(-0.75, -0.05), // left eye
];

/// Base joint positions for a posture.
///
/// `None` (and any future unrecognized label) keeps the all-zero skeleton,
/// matching the backend's fallback when no joint columns are available.
#[must_use]
pub const fn base_positions(pose: PoseType) -> [Coordinate; JOINT_COUNT] {
    match pose {
        PoseType::Stand => STAND_BASE,
        PoseType::Sit => SIT_BASE,
        PoseType::Kneel => KNEEL_BASE,
        PoseType::Sleep => SLEEP_BASE,
        PoseType::None => [Coordinate::ZERO; JOINT_COUNT],
    }
}

/// Mock prediction generator over an injectable random source.
///
/// Use [`MockGenerator::new`] for the thread RNG, or
/// [`MockGenerator::from_rng`] with a seeded RNG for reproducible output.
#[derive(Debug, Clone)]
pub struct MockGenerator<R: Rng> {
    rng: R,
}

impl MockGenerator<ThreadRng> {
    /// Create a generator over the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for MockGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MockGenerator<R> {
    /// Create a generator over an explicit random source.
    ///
    /// # Arguments
    ///
    /// * `rng` - The random source, e.g. `StdRng::seed_from_u64(seed)`.
    ///
    /// # Returns
    ///
    /// * A new `MockGenerator` instance.
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one mock prediction.
    ///
    /// With probability [`PRESENCE_PROBABILITY`] the capture contains a
    /// human: a uniformly chosen posture, confidence in `[0.7, 1.0)`, and
    /// the posture's base skeleton with independent jitter of at most
    /// [`JITTER`] per axis per joint (34 independent draws). Otherwise the
    /// result is a `None` pose with an all-zero skeleton and confidence in
    /// `[0.95, 1.0)`.
    pub fn generate(&mut self) -> PredictionResult {
        if !self.rng.random_bool(PRESENCE_PROBABILITY) {
            return PredictionResult::absent(self.rng.random_range(0.95..1.0));
        }

        let pose = PoseType::POSTURES[self.rng.random_range(0..PoseType::POSTURES.len())];
        let confidence = self.rng.random_range(0.7..1.0);

        let mut joints = base_positions(pose);
        for joint in &mut joints {
            joint.x += self.rng.random_range(-JITTER..=JITTER);
            joint.y += self.rng.random_range(-JITTER..=JITTER);
        }

        PredictionResult::new(true, pose, confidence, JointsCoordinates::new(joints))
    }
}

/// Generate one mock prediction over the thread-local RNG.
///
/// Convenience wrapper for callers that do not need a reproducible source.
#[must_use]
pub fn generate_mock_prediction() -> PredictionResult {
    MockGenerator::new().generate()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn seeded(seed: u64) -> MockGenerator<StdRng> {
        MockGenerator::from_rng(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_generated_results_are_valid() {
        let mut generator = seeded(7);
        for _ in 0..500 {
            let result = generator.generate();
            result.validate().unwrap();
            assert_eq!(result.joint_coordinates.len(), JOINT_COUNT);
            assert!((0.0..=1.0).contains(&result.confidence));
        }
    }

    #[test]
    fn test_absent_branch_invariants() {
        let mut generator = seeded(11);
        let mut saw_absent = false;
        for _ in 0..500 {
            let result = generator.generate();
            if result.human_presence {
                continue;
            }
            saw_absent = true;
            assert_eq!(result.pose, PoseType::None);
            assert!(result.joint_coordinates.is_all_zero());
            assert!((0.95..=1.0).contains(&result.confidence));
        }
        assert!(saw_absent);
    }

    #[test]
    fn test_present_branch_invariants() {
        let mut generator = seeded(13);
        let mut saw_present = false;
        for _ in 0..100 {
            let result = generator.generate();
            if !result.human_presence {
                continue;
            }
            saw_present = true;
            assert!(result.pose.is_posture());
            assert!((0.7..=1.0).contains(&result.confidence));
        }
        assert!(saw_present);
    }

    #[test]
    fn test_jitter_stays_within_bound() {
        let mut generator = seeded(17);
        for _ in 0..500 {
            let result = generator.generate();
            if !result.human_presence {
                continue;
            }
            let base = base_positions(result.pose);
            for (joint, base_joint) in result.joint_coordinates.iter().zip(&base) {
                assert!((joint.x - base_joint.x).abs() <= JITTER + 1e-12);
                assert!((joint.y - base_joint.y).abs() <= JITTER + 1e-12);
            }
        }
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..20 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_base_positions_none_is_zero() {
        let base = base_positions(PoseType::None);
        assert!(base.iter().all(Coordinate::is_zero));
    }

    #[test]
    fn test_base_tables_differ_per_posture() {
        // A renderer telling postures apart relies on distinct skeletons.
        assert_ne!(STAND_BASE, SIT_BASE);
        assert_ne!(SIT_BASE, KNEEL_BASE);
        assert_ne!(KNEEL_BASE, SLEEP_BASE);
        // Sleep is the only horizontal posture: the nose sits far left.
        assert!(SLEEP_BASE[0].x < -0.5);
        assert!(STAND_BASE[0].y < -0.5);
    }
}
