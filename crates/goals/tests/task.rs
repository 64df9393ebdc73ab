use goals::{BatchOps, GoalError, JointRangeRest, Mask, RestPoseCheck, SignalConfig, TaskConfig};
use scene::{JointState, SceneError, SceneSnapshot};
use std::fs;
use std::sync::Arc;

fn three_envs() -> scene::SceneBatch {
    let json = fs::read_to_string("tests/data/three_envs.json").unwrap();
    SceneSnapshot::from_json(&json).unwrap().into_batch().unwrap()
}

fn so101() -> Arc<dyn RestPoseCheck> {
    Arc::new(JointRangeRest::so101_follower())
}

#[test]
fn three_env_scenario() {
    let scene = three_envs();
    let task = TaskConfig::default().build(&scene, so101()).unwrap();
    let outcome = task.step(&scene, &BatchOps::default()).unwrap();

    // env 0 placed with the ee still over the pen and the arm resting,
    // env 1 pen just past the x bound, env 2 not at rest.
    assert_eq!(outcome.done, vec![true, false, false]);
    assert_eq!(outcome.signal("pick_pen"), Some(&vec![false, false, false]));
    assert_eq!(outcome.signal("put_pen_to_plate"), Some(&vec![false, false, true]));
}

#[test]
fn signals_keep_config_order() {
    let scene = three_envs();
    let task = TaskConfig::default().build(&scene, so101()).unwrap();
    let names: Vec<&str> = task.signals().names().collect();
    assert_eq!(names, ["pick_pen", "put_pen_to_plate"]);
}

#[test]
fn unknown_container_fails_at_build() {
    let scene = three_envs();
    let config = TaskConfig { container: "Bowl".to_string(), ..TaskConfig::default() };
    let err = config.build(&scene, so101()).err().unwrap();
    assert!(matches!(err, GoalError::Scene(SceneError::UnknownEntity(name)) if name == "Bowl"));
}

#[test]
fn duplicate_signal_names_are_rejected() {
    let scene = three_envs();
    let mut config = TaskConfig::default();
    config.signals.push(SignalConfig::Grasp {
        name: "pick_pen".to_string(),
        object: "MechanicalPencil".to_string(),
        config: goals::GraspConfig::default(),
    });
    let err = config.build(&scene, so101()).err().unwrap();
    assert!(matches!(err, GoalError::DuplicateSignal(name) if name == "pick_pen"));
}

#[test]
fn task_config_from_json() {
    let json = r#"{
        "objects": ["MechanicalPencil"],
        "container": "Plate",
        "completion": { "x_range": [-0.05, 0.05] },
        "signals": [
            { "kind": "grasp", "name": "pick_pen", "object": "MechanicalPencil",
              "config": { "diff_threshold": 0.02 } }
        ]
    }"#;
    let config = TaskConfig::from_json(json).unwrap();
    assert_eq!(config.robot, "robot");
    assert_eq!(config.completion.x_range.high(), 0.05);
    assert_eq!(config.completion.height_range.high(), 0.07);
    match &config.signals[0] {
        SignalConfig::Grasp { config, .. } => {
            assert_eq!(config.diff_threshold, 0.02);
            assert_eq!(config.grasp_threshold, 0.40);
        }
        other @ SignalConfig::Placement { .. } => panic!("unexpected signal {other:?}"),
    }
}

#[test]
fn degenerate_range_in_json_is_rejected() {
    let json = r#"{ "completion": { "height_range": [0.07, -0.07] } }"#;
    assert!(matches!(TaskConfig::from_json(json), Err(GoalError::Json(_))));
}

#[test]
fn default_config_round_trips() {
    let config = TaskConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(TaskConfig::from_json(&json).unwrap(), config);
}

struct Never;

impl RestPoseCheck for Never {
    fn is_at_rest(&self, joints: &JointState) -> Result<Mask, GoalError> {
        Ok(vec![false; joints.num_envs()])
    }
}

#[test]
fn rest_check_is_pluggable() {
    let scene = three_envs();
    let task = TaskConfig::default().build(&scene, Arc::new(Never)).unwrap();
    let outcome = task.step(&scene, &BatchOps::default()).unwrap();
    assert_eq!(outcome.done, vec![false, false, false]);
}
