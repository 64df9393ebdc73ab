use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use goals::{BatchOps, JointRangeRest, Predicate, TaskConfig};
use scene::{JointState, PoseBatch, SceneBatch, Vec3};
use std::sync::Arc;

fn tiled_scene(num_envs: usize) -> SceneBatch {
    let origins: Vec<Vec3> = (0..num_envs)
        .map(|i| Vec3::new((i % 64) as f32 * 2.5, (i / 64) as f32 * 2.5, 0.0))
        .collect();
    let at = |local: Vec3| -> PoseBatch {
        PoseBatch::from_positions(origins.iter().map(|&o| o + local).collect())
    };

    let mut scene = SceneBatch::new(origins.clone());
    scene.add_entity("Plate", at(Vec3::new(0.3, 0.1, 0.8))).unwrap();
    scene.add_entity("MechanicalPencil", at(Vec3::new(0.32, 0.12, 0.82))).unwrap();
    scene.add_entity("ee_frame", at(Vec3::new(0.32, 0.12, 0.84))).unwrap();

    let names = ["shoulder_pan", "shoulder_lift", "elbow_flex", "wrist_flex", "wrist_roll", "gripper"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let home: Vec<f32> = vec![0.0, -1.745_329_3, 1.570_796_4, 0.872_664_6, 0.0, -0.174_532_9];
    let rows = vec![home; num_envs];
    scene.add_articulation("robot", JointState::new(names, &rows).unwrap()).unwrap();
    scene
}

fn bench_completion(c: &mut Criterion) {
    let ops = BatchOps::default();
    let mut group = c.benchmark_group("task_step");
    for num_envs in [64usize, 1024, 8192] {
        let scene = tiled_scene(num_envs);
        let task = TaskConfig::default()
            .build(&scene, Arc::new(JointRangeRest::so101_follower()))
            .unwrap();
        group.bench_with_input(BenchmarkId::new("done", num_envs), &scene, |b, scene| {
            b.iter(|| task.completion().evaluate(scene, &ops).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("step", num_envs), &scene, |b, scene| {
            b.iter(|| task.step(scene, &ops).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_completion);
criterion_main!(benches);
