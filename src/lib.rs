// WiPose 📡 AGPL-3.0 License - https://github.com/wipose/wipose

//! # WiPose Core Library
//!
//! Pose-result data model and mock prediction generator for a WiFi-CSI
//! human pose sensing demo.
//!
//! The real sensing pipeline classifies human presence and posture from
//! WiFi Channel State Information and serves results over HTTP. This crate
//! owns everything both sides of that wire agree on:
//!
//! - **Data model** - [`PredictionResult`], the [`PoseType`] labels, and the
//!   fixed 17-joint skeleton ([`JointsCoordinates`], [`Joint`], [`SKELETON`])
//! - **Wire format** - camelCase JSON matching the backend's `/api/predict`
//!   response, with invariant validation on parse
//! - **Mock generator** - plausible synthetic predictions for demos and
//!   tests when no backend is available, with an injectable random source
//!
//! ## Quick Start (Library)
//!
//! ```
//! use wipose::{generate_mock_prediction, JOINT_COUNT};
//!
//! let prediction = generate_mock_prediction();
//! prediction.validate().unwrap();
//! assert_eq!(prediction.joint_coordinates.len(), JOINT_COUNT);
//!
//! let json = prediction.to_json().unwrap();
//! let parsed = wipose::PredictionResult::from_json(&json).unwrap();
//! assert_eq!(parsed, prediction);
//! ```
//!
//! Reproducible generation with a seeded source:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wipose::MockGenerator;
//!
//! let mut generator = MockGenerator::from_rng(StdRng::seed_from_u64(42));
//! let a = generator.generate();
//!
//! let mut replay = MockGenerator::from_rng(StdRng::seed_from_u64(42));
//! assert_eq!(replay.generate(), a);
//! ```
//!
//! ## Quick Start (CLI)
//!
//! ```bash
//! # One mock prediction as compact JSON
//! wipose mock
//!
//! # A reproducible batch, one document per line
//! wipose mock --seed 42 --count 100 --output predictions.jsonl
//! ```

// Modules
/// Error types.
pub mod error;

/// Joint definitions, the coordinate container, and the skeleton table.
pub mod joints;

/// Mock prediction generator.
pub mod mock;

/// Prediction results and the JSON wire format.
pub mod results;

/// CLI module.
pub mod cli;

// Re-export main types for convenient library usage
pub use error::{PoseError, Result};
pub use joints::{Coordinate, Joint, JointsCoordinates, JOINT_COUNT, SKELETON};
pub use mock::{base_positions, generate_mock_prediction, MockGenerator, JITTER, PRESENCE_PROBABILITY};
pub use results::{PoseType, PredictionResult};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
