// WiPose 📡 AGPL-3.0 License - https://github.com/wipose/wipose

//! Prediction result container and the JSON wire format.
//!
//! A [`PredictionResult`] is what every producer (the real inference backend
//! or the mock generator) hands to the UI: presence, posture label,
//! confidence, and the 17 joint coordinates. The JSON field names match the
//! HTTP API of the inference backend (`humanPresence`, `pose`, `confidence`,
//! `jointCoordinates`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PoseError, Result};
use crate::joints::JointsCoordinates;

/// Posture classification labels.
///
/// `None` is the no-human label; the other four are the postures the
/// classifier distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoseType {
    /// Upright standing posture.
    Stand,
    /// Seated posture.
    Sit,
    /// Kneeling posture.
    Kneel,
    /// Lying-down posture.
    Sleep,
    /// No human present.
    None,
}

impl PoseType {
    /// The four posture labels a present human can be classified as.
    pub const POSTURES: [Self; 4] = [Self::Stand, Self::Sit, Self::Kneel, Self::Sleep];

    /// Returns the string representation used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stand => "Stand",
            Self::Sit => "Sit",
            Self::Kneel => "Kneel",
            Self::Sleep => "Sleep",
            Self::None => "None",
        }
    }

    /// Returns whether this label is one of the four postures (not `None`).
    #[must_use]
    pub const fn is_posture(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for PoseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PoseType {
    type Err = PoseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Stand" => Ok(Self::Stand),
            "Sit" => Ok(Self::Sit),
            "Kneel" => Ok(Self::Kneel),
            "Sleep" => Ok(Self::Sleep),
            "None" => Ok(Self::None),
            _ => Err(PoseError::PoseParseError(s.to_string())),
        }
    }
}

/// A single pose prediction.
///
/// Constructed fresh per request (upload or mock trigger), held transiently
/// in UI state, discarded on reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Whether a human was detected in the capture.
    pub human_presence: bool,
    /// Posture label. `None` exactly when `human_presence` is false.
    pub pose: PoseType,
    /// Classification confidence in [0, 1].
    pub confidence: f64,
    /// The 17 joint coordinates in fixed index order.
    pub joint_coordinates: JointsCoordinates,
}

impl PredictionResult {
    /// Create a new prediction result.
    ///
    /// # Arguments
    ///
    /// * `human_presence` - Whether a human was detected.
    /// * `pose` - Posture label.
    /// * `confidence` - Classification confidence.
    /// * `joint_coordinates` - The 17 joint coordinates.
    ///
    /// # Returns
    ///
    /// * A new `PredictionResult` instance.
    #[must_use]
    pub const fn new(
        human_presence: bool,
        pose: PoseType,
        confidence: f64,
        joint_coordinates: JointsCoordinates,
    ) -> Self {
        Self {
            human_presence,
            pose,
            confidence,
            joint_coordinates,
        }
    }

    /// Create a no-human result: `None` pose and an all-zero skeleton.
    ///
    /// # Arguments
    ///
    /// * `confidence` - Confidence that nobody is in the capture.
    ///
    /// # Returns
    ///
    /// * A new `PredictionResult` with `human_presence` false.
    #[must_use]
    pub const fn absent(confidence: f64) -> Self {
        Self {
            human_presence: false,
            pose: PoseType::None,
            confidence,
            joint_coordinates: JointsCoordinates::zeros(),
        }
    }

    /// Check the data-model invariants.
    ///
    /// Producers must emit values that pass this check; consumers may call
    /// it to reject a malformed document before it reaches a renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if the confidence is outside [0, 1] or the pose
    /// label contradicts the presence flag.
    pub fn validate(&self) -> Result<()> {
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(PoseError::InvalidResult(format!(
                "confidence {} outside [0, 1]",
                self.confidence
            )));
        }

        match (self.human_presence, self.pose) {
            (false, PoseType::None) => Ok(()),
            (false, pose) => Err(PoseError::InvalidResult(format!(
                "pose {pose} reported without human presence"
            ))),
            (true, PoseType::None) => Err(PoseError::InvalidResult(
                "human presence reported with pose None".to_string(),
            )),
            (true, _) => Ok(()),
        }
    }

    /// Serialize to the compact JSON wire format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a prediction from its JSON wire format and check the
    /// data-model invariants.
    ///
    /// Malformed bodies are rejected here rather than rendered.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON, a joint array whose length is not
    /// 17, or an invariant violation.
    pub fn from_json(json: &str) -> Result<Self> {
        let result: Self = serde_json::from_str(json)?;
        result.validate()?;
        Ok(result)
    }
}
