use aabb_physics::{
    collision::{test_aabb_overlap, test_aabb_overlap_with, NormalPolicy},
    world::{move_and_collide, Entity, Scene},
    Body, MovementIntent, Vec2, Visual,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// --- Helper for building a grid of walls around the player ---
fn walled_scene(num_walls: usize) -> Scene {
    let player = Body::with_size(Vec2::ZERO, 100.0, 100.0);
    let mut scene = Scene::new(Entity::new(player, Visual::PLAYER));
    let per_row = (num_walls as f64).sqrt().ceil().max(1.0) as usize;
    for i in 0..num_walls {
        let col = (i % per_row) as f64;
        let row = (i / per_row) as f64;
        // Leave a 2 unit gap so the player is blocked on its first step right.
        let position = Vec2::new(102.0 + col * 110.0, row * 110.0);
        scene.add_wall(Entity::new(
            Body::with_size(position, 100.0, 100.0),
            Visual::WALL,
        ));
    }
    scene
}

fn bench_overlap_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("aabb_overlap");
    let a = Body::with_size(Vec2::ZERO, 100.0, 100.0);
    let hit = Body::with_size(Vec2::new(90.0, 0.0), 100.0, 100.0);
    let miss_x = Body::with_size(Vec2::new(200.0, 0.0), 100.0, 100.0);
    let miss_y = Body::with_size(Vec2::new(0.0, 200.0), 100.0, 100.0);

    group.bench_function("hit", |b| {
        b.iter(|| test_aabb_overlap(black_box(&a), black_box(&hit)).is_some())
    });
    group.bench_function("miss_x", |b| {
        b.iter(|| test_aabb_overlap(black_box(&a), black_box(&miss_x)).is_some())
    });
    group.bench_function("miss_y", |b| {
        b.iter(|| test_aabb_overlap(black_box(&a), black_box(&miss_y)).is_some())
    });
    group.bench_function("hit_legacy", |b| {
        b.iter(|| {
            test_aabb_overlap_with(black_box(&a), black_box(&hit), NormalPolicy::LegacyParity)
                .is_some()
        })
    });
    group.finish();
}

// Worst case for the rollback scan: the blocking wall is last in the list.
fn bench_move_and_collide(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_and_collide");

    for num_walls in [10, 100, 1000].iter() {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(num_walls),
            num_walls,
            |b, &n| {
                let mut walls: Vec<Body> = (0..n)
                    .map(|i| {
                        Body::with_size(Vec2::new(1000.0 + i as f64 * 200.0, 0.0), 100.0, 100.0)
                    })
                    .collect();
                walls.push(Body::with_size(Vec2::new(102.0, 0.0), 100.0, 100.0));
                b.iter(|| {
                    let mut player = Body::with_size(Vec2::ZERO, 100.0, 100.0);
                    move_and_collide(&mut player, black_box(Vec2::new(5.0, 5.0)), &walls)
                });
            },
        );
    }
    group.finish();
}

fn bench_scene_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_update");
    let intent = MovementIntent {
        right: true,
        down: true,
        ..Default::default()
    };

    for num_walls in [10, 100, 500].iter() {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(num_walls),
            num_walls,
            |b, &n| {
                b.iter(|| {
                    let mut scene = walled_scene(black_box(n));
                    for _ in 0..60 {
                        scene.update(intent);
                    }
                    scene
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_overlap_test,
    bench_move_and_collide,
    bench_scene_update
);
criterion_main!(benches);
