// WiPose 📡 AGPL-3.0 License - https://github.com/wipose/wipose

//! Integration tests for the pose data model and mock generator

use rand::rngs::StdRng;
use rand::SeedableRng;

use wipose::{
    base_positions, JointsCoordinates, MockGenerator, PoseType, PredictionResult, JITTER,
    JOINT_COUNT, SKELETON,
};

fn seeded(seed: u64) -> MockGenerator<StdRng> {
    MockGenerator::from_rng(StdRng::seed_from_u64(seed))
}

#[test]
fn test_every_generated_result_satisfies_the_contract() {
    let mut generator = seeded(1);
    for _ in 0..1_000 {
        let result = generator.generate();
        result.validate().unwrap();
        assert_eq!(result.joint_coordinates.len(), JOINT_COUNT);
        assert!((0.0..=1.0).contains(&result.confidence));

        if result.human_presence {
            assert!(PoseType::POSTURES.contains(&result.pose));
            assert!((0.7..=1.0).contains(&result.confidence));
        } else {
            assert_eq!(result.pose, PoseType::None);
            assert!(result.joint_coordinates.is_all_zero());
            assert!((0.95..=1.0).contains(&result.confidence));
        }
    }
}

#[test]
fn test_presence_rate_and_posture_distribution() {
    const CALLS: usize = 10_000;

    let mut generator = seeded(2);
    let mut present = 0usize;
    let mut posture_counts = [0usize; 4];

    for _ in 0..CALLS {
        let result = generator.generate();
        if result.human_presence {
            present += 1;
            let slot = PoseType::POSTURES
                .iter()
                .position(|p| *p == result.pose)
                .unwrap();
            posture_counts[slot] += 1;
        }
    }

    // Bernoulli(0.9) over 10k draws: allow a generous tolerance.
    let presence_rate = present as f64 / CALLS as f64;
    assert!(
        (presence_rate - 0.9).abs() < 0.02,
        "presence rate {presence_rate} too far from 0.9"
    );

    // Each posture should land near a quarter of the presence cases.
    let expected = present as f64 / 4.0;
    for (slot, count) in posture_counts.iter().enumerate() {
        let deviation = (*count as f64 - expected).abs() / expected;
        assert!(
            deviation < 0.15,
            "posture {:?} count {count} deviates {deviation:.3} from uniform",
            PoseType::POSTURES[slot]
        );
    }
}

#[test]
fn test_jitter_never_exceeds_bound() {
    let mut generator = seeded(3);
    for _ in 0..1_000 {
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
fn test_wire_round_trip_for_generated_results() {
    let mut generator = seeded(4);
    for _ in 0..100 {
        let result = generator.generate();
        let json = result.to_json().unwrap();
        let parsed = PredictionResult::from_json(&json).unwrap();
        assert_eq!(parsed, result);
    }
}

#[test]
fn test_backend_shaped_document_parses() {
    // A document shaped like the backend's /api/predict response.
    let joints: Vec<String> = (0..JOINT_COUNT).map(|_| r#"{"x":0,"y":0}"#.to_string()).collect();
    let body = format!(
        r#"{{"humanPresence":false,"pose":"None","confidence":0.97,"jointCoordinates":[{}]}}"#,
        joints.join(",")
    );

    let result = PredictionResult::from_json(&body).unwrap();
    assert!(!result.human_presence);
    assert_eq!(result.pose, PoseType::None);
    assert_eq!(result.joint_coordinates, JointsCoordinates::zeros());
}

#[test]
fn test_malformed_documents_are_rejected_before_rendering() {
    // 16 joints instead of 17.
    let joints: Vec<String> = (0..16).map(|_| r#"{"x":0,"y":0}"#.to_string()).collect();
    let short = format!(
        r#"{{"humanPresence":false,"pose":"None","confidence":0.97,"jointCoordinates":[{}]}}"#,
        joints.join(",")
    );
    assert!(PredictionResult::from_json(&short).is_err());

    // Posture label without presence.
    let joints: Vec<String> = (0..JOINT_COUNT).map(|_| r#"{"x":0,"y":0}"#.to_string()).collect();
    let mismatched = format!(
        r#"{{"humanPresence":false,"pose":"Sit","confidence":0.8,"jointCoordinates":[{}]}}"#,
        joints.join(",")
    );
    assert!(PredictionResult::from_json(&mismatched).is_err());

    // Confidence outside [0, 1].
    let overconfident = format!(
        r#"{{"humanPresence":false,"pose":"None","confidence":1.5,"jointCoordinates":[{}]}}"#,
        joints.join(",")
    );
    assert!(PredictionResult::from_json(&overconfident).is_err());
}

#[test]
fn test_skeleton_connects_every_limb_joint() {
    // Boundary joints (wrists, ankles, eyes) appear in exactly one bone;
    // the renderer draws each of them once.
    for leaf in [4usize, 7, 11, 14, 15, 16] {
        let degree = SKELETON
            .iter()
            .filter(|[a, b]| *a == leaf || *b == leaf)
            .count();
        assert_eq!(degree, 1, "joint {leaf} should be a skeleton leaf");
    }
}
