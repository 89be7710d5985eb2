// Unit tests for Cham Cham Cham

use chamcham::core::{
    pose::{nose_offset_percent, tilt_degrees, PoseClassifier},
    ranking::{locate, rank, RankEngine, RankError},
};
use chamcham::models::{
    Classification, LandmarkSet, Orientation, Point, RankEntry, Rejection, Trophy,
};
use chamcham::services::ScoreBoard;

fn upright_face(nose_x: f64, jaw_left_x: f64, jaw_right_x: f64) -> LandmarkSet {
    LandmarkSet::new(
        vec![Point::new(nose_x, 50.0), Point::new(nose_x, 70.0), Point::new(nose_x, 90.0)],
        vec![
            Point::new(jaw_left_x, 60.0),
            Point::new((jaw_left_x + nose_x) / 2.0, 120.0),
            Point::new(nose_x, 160.0),
            Point::new((jaw_right_x + nose_x) / 2.0, 120.0),
            Point::new(jaw_right_x, 60.0),
        ],
    )
}

fn scores(values: &[(&str, f64)]) -> Vec<RankEntry> {
    values.iter().map(|(id, score)| RankEntry::new(*id, *score)).collect()
}

#[test]
fn test_classify_centered_face() {
    let classifier = PoseClassifier::default();
    let result = classifier.classify(&upright_face(200.0, 100.0, 300.0));
    assert_eq!(result, Classification::Facing(Orientation::Center));
}

#[test]
fn test_classify_uses_array_order_not_anatomy() {
    let classifier = PoseClassifier::default();

    // Nose close to the last jaw point reads as "left"
    let near_last = classifier.classify(&upright_face(280.0, 100.0, 300.0));
    assert_eq!(near_last.orientation(), Some(Orientation::Left));

    // Mirroring the jaw array flips the label
    let mirrored = classifier.classify(&upright_face(280.0, 300.0, 100.0));
    assert_eq!(mirrored.orientation(), Some(Orientation::Right));
}

#[test]
fn test_classify_is_deterministic() {
    let classifier = PoseClassifier::default();
    let landmarks = upright_face(140.0, 100.0, 300.0);

    let first = classifier.classify(&landmarks);
    for _ in 0..10 {
        assert_eq!(classifier.classify(&landmarks), first);
    }
}

#[test]
fn test_classify_upside_down_face_rejected() {
    let classifier = PoseClassifier::default();
    let landmarks = LandmarkSet::new(
        vec![Point::new(200.0, 200.0)],
        vec![Point::new(100.0, 150.0), Point::new(200.0, 50.0), Point::new(300.0, 150.0)],
    );

    assert!(matches!(
        classifier.classify(&landmarks),
        Classification::Rejected(Rejection::Tilted { .. })
    ));
}

#[test]
fn test_classify_from_ibug68_layout() {
    let mut points = vec![Point::new(0.0, 0.0); 68];
    for (i, point) in points.iter_mut().enumerate().take(17) {
        *point = Point::new(100.0 + i as f64 * 12.5, 150.0);
    }
    points[8] = Point::new(200.0, 250.0);
    points[27] = Point::new(200.0, 100.0);

    let landmarks = LandmarkSet::from_ibug68(&points).unwrap();
    let result = PoseClassifier::default().classify(&landmarks);
    assert_eq!(result, Classification::Facing(Orientation::Center));
}

#[test]
fn test_tilt_and_offset_helpers() {
    assert_eq!(tilt_degrees(Point::new(5.0, 5.0), Point::new(5.0, 50.0)), 0.0);
    assert_eq!(
        nose_offset_percent(Point::new(150.0, 0.0), Point::new(100.0, 0.0), Point::new(200.0, 0.0)),
        Some(50.0)
    );
    assert_eq!(
        nose_offset_percent(Point::new(150.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, 9.0)),
        None
    );
}

#[test]
fn test_rank_idempotent() {
    let input = scores(&[("a", 3.0), ("b", 7.0), ("c", 3.0), ("d", 1.0)]);

    let first = rank(input.clone()).unwrap();
    let second = rank(input).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_rank_output_reranks_identically() {
    let ranked = rank(scores(&[("a", 3.0), ("b", 7.0), ("c", 3.0)])).unwrap();
    let again: Vec<RankEntry> = ranked
        .iter()
        .map(|entry| RankEntry::new(entry.id.clone(), entry.score))
        .collect();

    assert_eq!(rank(again).unwrap(), ranked);
}

#[test]
fn test_rank_duplicate_ids_rejected() {
    let result = rank(scores(&[("me", 1.0), ("me", 2.0)]));
    assert_eq!(result, Err(RankError::DuplicateId("me".to_string())));
}

#[test]
fn test_trophies_follow_joint_groups() {
    let ranked = rank(scores(&[
        ("a", 500.0),
        ("b", 500.0),
        ("c", 400.0),
        ("d", 300.0),
        ("e", 200.0),
    ]))
    .unwrap();

    let trophies: Vec<Option<Trophy>> = ranked.iter().map(|entry| entry.trophy(3)).collect();
    assert_eq!(
        trophies,
        vec![
            Some(Trophy::Gold),
            Some(Trophy::Gold),
            Some(Trophy::Silver),
            Some(Trophy::Bronze),
            None,
        ]
    );
}

#[test]
fn test_locate_mine() {
    let ranked = RankEngine::default()
        .rank(scores(&[("x", 2.0), ("mine", 2.0), ("y", 5.0)]))
        .unwrap();

    let mine = locate(&ranked, "mine").unwrap();
    assert_eq!(mine.rank_position, 1);
    assert_eq!(mine.joint_group, 1);
}

#[test]
fn test_scoreboard_blocking() {
    let board = ScoreBoard::default();

    let id = tokio_test::block_on(board.submit(None, 42.0)).unwrap();
    let standings = tokio_test::block_on(board.standings()).unwrap();

    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].id, id);
}
