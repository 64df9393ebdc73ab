use datagen::{segment_trajectory, DatagenError, MimicTaskConfig, SegmentBounds, SignalTrace, SubtaskSegment, SubtaskSequence};
use std::fs;

fn recorded() -> SignalTrace {
    let json = fs::read_to_string("tests/data/pick_pen_trace.json").unwrap();
    SignalTrace::from_json(&json).unwrap()
}

fn fixed(signal: &str, offset: i32) -> SubtaskSegment {
    SubtaskSegment::builder()
        .term_signal(signal)
        .term_offset_range(offset, offset)
        .build()
        .unwrap()
}

#[test]
fn pick_pen_episode_splits_into_three() {
    let trace = recorded();
    assert_eq!(trace.len(), 60);

    let config = MimicTaskConfig::pick_pen().unwrap();
    let sequence = &config.subtask_configs["so101_follower"];
    let mut rng = fastrand::Rng::with_seed(config.datagen_config.seed);
    let bounds = segment_trajectory(sequence, &trace, &mut rng).unwrap();

    assert_eq!(bounds.len(), 3);
    assert_eq!(bounds[0].start, 0);
    // pick_pen rises at 5 and put_pen_to_plate at 30, both pushed by 10..=20.
    assert!((15..=25).contains(&bounds[0].end), "{bounds:?}");
    assert!((40..=50).contains(&bounds[1].end), "{bounds:?}");
    assert_eq!(bounds[1].start, bounds[0].end);
    assert_eq!(bounds[2], SegmentBounds { start: bounds[1].end, end: 60 });
}

#[test]
fn same_seed_gives_same_bounds() {
    let trace = recorded();
    let config = MimicTaskConfig::pick_pen().unwrap();
    let sequence = &config.subtask_configs["so101_follower"];
    let run = |seed| segment_trajectory(sequence, &trace, &mut fastrand::Rng::with_seed(seed)).unwrap();
    assert_eq!(run(11), run(11));
}

#[test]
fn zero_offsets_cut_on_the_edge() {
    let sequence = SubtaskSequence::new(vec![
        fixed("pick_pen", 0),
        fixed("put_pen_to_plate", 0),
        SubtaskSegment::builder().build().unwrap(),
    ])
    .unwrap();
    let bounds = segment_trajectory(&sequence, &recorded(), &mut fastrand::Rng::with_seed(0)).unwrap();
    assert_eq!(
        bounds,
        [
            SegmentBounds { start: 0, end: 5 },
            SegmentBounds { start: 5, end: 30 },
            SegmentBounds { start: 30, end: 60 },
        ]
    );
}

#[test]
fn offset_past_the_end_collides_with_last_stage() {
    let sequence = SubtaskSequence::new(vec![
        fixed("put_pen_to_plate", 45),
        SubtaskSegment::builder().build().unwrap(),
    ])
    .unwrap();
    let err = segment_trajectory(&sequence, &recorded(), &mut fastrand::Rng::with_seed(0)).unwrap_err();
    assert!(matches!(err, DatagenError::OverlappingSegments { index: 1, start: 60, end: 60 }));
}

#[test]
fn negative_offsets_cut_before_the_edge() {
    let sequence = SubtaskSequence::new(vec![
        fixed("pick_pen", 0),
        fixed("put_pen_to_plate", -10),
        SubtaskSegment::builder().build().unwrap(),
    ])
    .unwrap();
    let bounds = segment_trajectory(&sequence, &recorded(), &mut fastrand::Rng::with_seed(0)).unwrap();
    assert_eq!(
        bounds,
        [
            SegmentBounds { start: 0, end: 5 },
            SegmentBounds { start: 5, end: 20 },
            SegmentBounds { start: 20, end: 60 },
        ]
    );
}

#[test]
fn signed_range_lands_around_the_edge() {
    let put = SubtaskSegment::builder()
        .term_signal("put_pen_to_plate")
        .term_offset_range(-5, 5)
        .build()
        .unwrap();
    let sequence = SubtaskSequence::new(vec![fixed("pick_pen", 0), put, SubtaskSegment::builder().build().unwrap()]).unwrap();
    let trace = recorded();
    for seed in 0..32 {
        let bounds = segment_trajectory(&sequence, &trace, &mut fastrand::Rng::with_seed(seed)).unwrap();
        assert!((25..=35).contains(&bounds[1].end), "{bounds:?}");
        assert_eq!(bounds[2].start, bounds[1].end);
    }
}

#[test]
fn offset_before_the_start_collapses_the_stage() {
    let sequence = SubtaskSequence::new(vec![
        fixed("pick_pen", -5),
        SubtaskSegment::builder().build().unwrap(),
    ])
    .unwrap();
    let err = segment_trajectory(&sequence, &recorded(), &mut fastrand::Rng::with_seed(0)).unwrap_err();
    assert!(matches!(err, DatagenError::OverlappingSegments { index: 0, start: 0, end: 0 }));
}

#[test]
fn signals_must_rise_in_stage_order() {
    let sequence = SubtaskSequence::new(vec![
        fixed("put_pen_to_plate", 0),
        fixed("pick_pen", 0),
        SubtaskSegment::builder().build().unwrap(),
    ])
    .unwrap();
    let err = segment_trajectory(&sequence, &recorded(), &mut fastrand::Rng::with_seed(0)).unwrap_err();
    assert!(matches!(err, DatagenError::OverlappingSegments { index: 1, start: 30, end: 5 }));
}

#[test]
fn missing_and_flat_signals_fail() {
    let trace = recorded();
    let tail = || SubtaskSegment::builder().build().unwrap();

    let missing = SubtaskSequence::new(vec![fixed("rest", 0), tail()]).unwrap();
    let err = segment_trajectory(&missing, &trace, &mut fastrand::Rng::with_seed(0)).unwrap_err();
    assert!(matches!(err, DatagenError::MissingTrace(name) if name == "rest"));

    let flat = SignalTrace::from_json(r#"{ "pick_pen": [false, false, false] }"#).unwrap();
    let sequence = SubtaskSequence::new(vec![fixed("pick_pen", 0), tail()]).unwrap();
    let err = segment_trajectory(&sequence, &flat, &mut fastrand::Rng::with_seed(0)).unwrap_err();
    assert!(matches!(err, DatagenError::NoTransition(name) if name == "pick_pen"));
}

#[test]
fn ragged_trace_json_is_rejected() {
    let err = SignalTrace::from_json(r#"{ "a": [false, true], "b": [true] }"#).unwrap_err();
    assert!(err.to_string().contains("expected 2"));
}
