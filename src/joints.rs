// WiPose 📡 AGPL-3.0 License - https://github.com/wipose/wipose

//! Skeleton joint definitions and the fixed-length coordinate container.
//!
//! The skeleton model uses 17 anatomical landmarks with a fixed positional
//! index assignment. Consumers (renderers, the wire format) index joints
//! positionally, so the order defined here must never change.

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Number of joints in the skeleton model.
pub const JOINT_COUNT: usize = 17;

/// Skeleton bone structure (pairs of joint indices).
/// Defines which joints connect to form the rendered skeleton.
pub const SKELETON: [[usize; 2]; 16] = [
    [0, 1],   // nose to neck
    [1, 2],   // neck to right shoulder
    [1, 5],   // neck to left shoulder
    [2, 3],   // right shoulder to right elbow
    [3, 4],   // right elbow to right wrist
    [5, 6],   // left shoulder to left elbow
    [6, 7],   // left elbow to left wrist
    [1, 8],   // neck to hip center
    [8, 9],   // hip center to right hip
    [8, 12],  // hip center to left hip
    [9, 10],  // right hip to right knee
    [10, 11], // right knee to right ankle
    [12, 13], // left hip to left knee
    [13, 14], // left knee to left ankle
    [0, 15],  // nose to right eye
    [0, 16],  // nose to left eye
];

/// A 2D point, unitless, roughly normalized to [-1, 1] around a
/// body-centered origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Horizontal offset from the body center.
    pub x: f64,
    /// Vertical offset from the body center (positive is down).
    pub y: f64,
}

impl Coordinate {
    /// The origin point.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check whether this coordinate is exactly the origin.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// The 17 anatomical landmarks of the skeleton model.
///
/// Discriminants are the fixed positional indices used on the wire and by
/// the skeleton renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Joint {
    /// Nose (index 0).
    Nose = 0,
    /// Neck (index 1).
    Neck = 1,
    /// Right shoulder (index 2).
    RightShoulder = 2,
    /// Right elbow (index 3).
    RightElbow = 3,
    /// Right wrist (index 4).
    RightWrist = 4,
    /// Left shoulder (index 5).
    LeftShoulder = 5,
    /// Left elbow (index 6).
    LeftElbow = 6,
    /// Left wrist (index 7).
    LeftWrist = 7,
    /// Hip center (index 8).
    HipCenter = 8,
    /// Right hip (index 9).
    RightHip = 9,
    /// Right knee (index 10).
    RightKnee = 10,
    /// Right ankle (index 11).
    RightAnkle = 11,
    /// Left hip (index 12).
    LeftHip = 12,
    /// Left knee (index 13).
    LeftKnee = 13,
    /// Left ankle (index 14).
    LeftAnkle = 14,
    /// Right eye (index 15).
    RightEye = 15,
    /// Left eye (index 16).
    LeftEye = 16,
}

impl Joint {
    /// All joints in positional index order.
    pub const ALL: [Self; JOINT_COUNT] = [
        Self::Nose,
        Self::Neck,
        Self::RightShoulder,
        Self::RightElbow,
        Self::RightWrist,
        Self::LeftShoulder,
        Self::LeftElbow,
        Self::LeftWrist,
        Self::HipCenter,
        Self::RightHip,
        Self::RightKnee,
        Self::RightAnkle,
        Self::LeftHip,
        Self::LeftKnee,
        Self::LeftAnkle,
        Self::RightEye,
        Self::LeftEye,
    ];

    /// Positional index of this joint.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short landmark name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::Neck => "neck",
            Self::RightShoulder => "r_shoulder",
            Self::RightElbow => "r_elbow",
            Self::RightWrist => "r_wrist",
            Self::LeftShoulder => "l_shoulder",
            Self::LeftElbow => "l_elbow",
            Self::LeftWrist => "l_wrist",
            Self::HipCenter => "hip_center",
            Self::RightHip => "r_hip",
            Self::RightKnee => "r_knee",
            Self::RightAnkle => "r_ankle",
            Self::LeftHip => "l_hip",
            Self::LeftKnee => "l_knee",
            Self::LeftAnkle => "l_ankle",
            Self::RightEye => "r_eye",
            Self::LeftEye => "l_eye",
        }
    }
}

/// Fixed-length container of the 17 joint coordinates.
///
/// The length invariant lives in the type: a `JointsCoordinates` always holds
/// exactly [`JOINT_COUNT`] entries in the fixed index order. Deserializing a
/// JSON array of any other length fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JointsCoordinates([Coordinate; JOINT_COUNT]);

#[allow(clippy::len_without_is_empty)]
impl JointsCoordinates {
    /// Create a container from an array of joint coordinates.
    #[must_use]
    pub const fn new(coordinates: [Coordinate; JOINT_COUNT]) -> Self {
        Self(coordinates)
    }

    /// The all-zero skeleton used when no human is present.
    #[must_use]
    pub const fn zeros() -> Self {
        Self([Coordinate::ZERO; JOINT_COUNT])
    }

    /// Number of joints. Always [`JOINT_COUNT`].
    #[must_use]
    pub const fn len(&self) -> usize {
        JOINT_COUNT
    }

    /// Coordinate of a named joint.
    #[must_use]
    pub fn get(&self, joint: Joint) -> Coordinate {
        self.0[joint.index()]
    }

    /// Iterate over the coordinates in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.0.iter()
    }

    /// Check whether every joint is exactly at the origin.
    #[must_use]
    pub fn is_all_zero(&self) -> bool {
        self.0.iter().all(Coordinate::is_zero)
    }

    /// Borrow the underlying fixed-size array.
    #[must_use]
    pub const fn as_array(&self) -> &[Coordinate; JOINT_COUNT] {
        &self.0
    }
}

impl Default for JointsCoordinates {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<[Coordinate; JOINT_COUNT]> for JointsCoordinates {
    fn from(coordinates: [Coordinate; JOINT_COUNT]) -> Self {
        Self(coordinates)
    }
}

impl Index<usize> for JointsCoordinates {
    type Output = Coordinate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Index<Joint> for JointsCoordinates {
    type Output = Coordinate;

    fn index(&self, joint: Joint) -> &Self::Output {
        &self.0[joint.index()]
    }
}

impl<'a> IntoIterator for &'a JointsCoordinates {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_indices_are_positional() {
        for (i, joint) in Joint::ALL.iter().enumerate() {
            assert_eq!(joint.index(), i);
        }
        assert_eq!(Joint::ALL.len(), JOINT_COUNT);
    }

    #[test]
    fn test_skeleton_indices_in_range() {
        for [a, b] in SKELETON {
            assert!(a < JOINT_COUNT);
            assert!(b < JOINT_COUNT);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_zeros_is_all_zero() {
        let joints = JointsCoordinates::zeros();
        assert_eq!(joints.len(), JOINT_COUNT);
        assert!(joints.is_all_zero());
    }

    #[test]
    fn test_indexing_by_joint() {
        let mut coords = [Coordinate::ZERO; JOINT_COUNT];
        coords[Joint::Neck.index()] = Coordinate::new(0.0, -0.5);
        let joints = JointsCoordinates::new(coords);

        assert_eq!(joints[Joint::Neck], Coordinate::new(0.0, -0.5));
        assert_eq!(joints[1], joints[Joint::Neck]);
        assert!(!joints.is_all_zero());
    }

    #[test]
    fn test_deserialize_rejects_wrong_length() {
        let short = "[{\"x\":0.0,\"y\":0.0}]";
        assert!(serde_json::from_str::<JointsCoordinates>(short).is_err());

        let full = serde_json::to_string(&JointsCoordinates::zeros()).unwrap();
        let parsed: JointsCoordinates = serde_json::from_str(&full).unwrap();
        assert!(parsed.is_all_zero());
    }

    #[test]
    fn test_joint_names() {
        assert_eq!(Joint::Nose.as_str(), "nose");
        assert_eq!(Joint::HipCenter.as_str(), "hip_center");
        assert_eq!(Joint::LeftEye.as_str(), "l_eye");
    }
}
