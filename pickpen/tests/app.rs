use pickpen::app;
use std::fs;

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/data/{name}")).unwrap()
}

#[test]
fn evaluate_default_task_on_three_envs() {
    let outcome = app::evaluate(&fixture("three_envs.json"), None).unwrap();
    assert_eq!(outcome.done, vec![true, false, false]);
    let names: Vec<&str> = outcome.signals.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["pick_pen", "put_pen_to_plate"]);
}

#[test]
fn evaluate_with_custom_task() {
    let task = r#"{ "signals": [
        { "kind": "placement", "name": "placed", "object": "MechanicalPencil", "container": "Plate" }
    ] }"#;
    let outcome = app::evaluate(&fixture("three_envs.json"), Some(task)).unwrap();
    assert_eq!(outcome.signal("placed"), Some(&vec![false, false, true]));
    assert_eq!(outcome.signal("pick_pen"), None);
}

#[test]
fn evaluate_reports_bad_snapshot() {
    let err = app::evaluate("{ not json", None).unwrap_err();
    assert!(format!("{err:#}").contains("parsing scene snapshot"));
}

#[test]
fn segment_with_builtin_config() {
    let bounds = app::segment(&fixture("pick_pen_trace.json"), None, "so101_follower", Some(5)).unwrap();
    assert_eq!(bounds.len(), 3);
    assert_eq!(bounds[0].start, 0);
    assert_eq!(bounds[2].end, 60);
    let again = app::segment(&fixture("pick_pen_trace.json"), None, "so101_follower", Some(5)).unwrap();
    assert_eq!(bounds, again);
}

#[test]
fn segment_unknown_actor() {
    let err = app::segment(&fixture("pick_pen_trace.json"), None, "left_arm", None).unwrap_err();
    assert!(err.to_string().contains("left_arm"));
}

#[test]
fn builtin_mimic_config_serialises() {
    let json = serde_json::to_value(datagen::MimicTaskConfig::pick_pen().unwrap()).unwrap();
    let stages = &json["subtask_configs"]["so101_follower"];
    assert_eq!(stages[0]["subtask_term_signal"], "pick_pen");
    assert_eq!(stages[0]["subtask_term_offset_range"], serde_json::json!([10, 20]));
    assert_eq!(stages[2]["selection_strategy"], "random");
}
