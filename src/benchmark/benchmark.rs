//! Wall-clock micro benchmarks for the per-frame hot paths.
//! Output is CSV-ish so it can be pasted straight into a spreadsheet.

use std::hint::black_box;
use std::time::Instant;

use crate::simulation::engine::{Engine, FrameInput, Simulation};
use crate::simulation::external::StaticEnvironment;
use crate::simulation::forces::acceleration_at;
use crate::simulation::motion::{JumpRequest, MotionStateMachine};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, GravitySource, NVec2};
use crate::simulation::trail::TrailPool;
use crate::simulation::tuner::AdaptivePhysicsProfile;

/// Deterministic ring of `n` sources, no rand needed
fn make_sources(n: usize) -> Vec<GravitySource> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec2::new((i_f * 0.37).sin() * 2_000.0, (i_f * 0.13).cos() * 2_000.0);
            GravitySource::new(i as u32, x, 30.0 + (i % 7) as f64 * 10.0)
        })
        .collect()
}

/// Gravity evaluation cost against source count
pub fn bench_gravity() {
    let ns = [8, 32, 128, 512, 1024];
    let evals = 10_000;
    let k = Parameters::default().gravity_k;

    println!("sources,ns_per_eval");
    for n in ns {
        let sources = make_sources(n);
        let probe = NVec2::new(13.0, -7.0);

        // Warm up
        black_box(acceleration_at(probe, &sources, k));

        let t0 = Instant::now();
        for i in 0..evals {
            let p = probe + NVec2::new(i as f64 * 0.01, 0.0);
            black_box(acceleration_at(p, &sources, k));
        }
        let ns_per = t0.elapsed().as_secs_f64() * 1e9 / evals as f64;
        println!("{},{:.1}", n, ns_per);
    }
}

/// Trail write + decay at the active ceiling (the eviction path)
pub fn bench_trail() {
    let frames = 100_000;
    let mut pool = TrailPool::default();
    let dt = 1.0 / 60.0;

    // Fill to the ceiling first so every write evicts
    for i in 0..pool.max_active() {
        pool.write_sample(NVec2::new(i as f64, 0.0), 1.0, false);
    }

    let t0 = Instant::now();
    for i in 0..frames {
        pool.decay(dt * 0.01);
        pool.write(NVec2::new(i as f64, 1.0), i % 5 == 0);
    }
    let ns_per = t0.elapsed().as_secs_f64() * 1e9 / frames as f64;
    println!("trail frames = {}, ns/frame = {:.1}, live = {}", frames, ns_per, pool.len());
}

/// Full frame cost for one body flying through `n` sources
pub fn bench_frame() {
    let ns = [8, 64, 256];
    let frames = 20_000;
    let engine = Engine::default();
    let env = StaticEnvironment::default();

    println!("sources,us_per_frame");
    for n in ns {
        let sources = make_sources(n);
        let params = Parameters::default();
        let tuning = AdaptivePhysicsProfile::default();
        let mut motion = MotionStateMachine::new(Body::on_surface(sources[0].id, 10.0), params, tuning.drag_coefficient);
        motion.respawn(&sources[0]);
        let mut sim = Simulation::new(motion, &engine, tuning);

        let jump = FrameInput {
            jump: Some(JumpRequest { power: 80.0, angle: 0.3 }),
            dash: false,
        };
        sim.step(engine.frame_dt, &jump, &sources, &env);

        let idle = FrameInput::default();
        let t0 = Instant::now();
        for _ in 0..frames {
            let r = sim.step(engine.frame_dt, &idle, &sources, &env);
            if r.landed.is_some() {
                sim.step(engine.frame_dt, &jump, &sources, &env);
            }
        }
        let us_per = t0.elapsed().as_secs_f64() * 1e6 / frames as f64;
        println!("{},{:.3}", n, us_per);
    }
}
