#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use rand::RngCore;
use rand::SeedableRng;
use std::time::Instant;
use trail_life::{
    Neighborhood, PreviewLife, RuleDescriptor, Topology, TrailLife, TrailLifeConfig,
    VitalityMode, VitalitySettings,
};

const DEFAULT_SIDE: u32 = 1024;
const LIVE_DENSITY: f64 = 0.42;
const TOTAL_ITERATIONS: u64 = 500;
const CHECK_INTERVAL: u64 = 100;

struct MainArgs {
    config: TrailLifeConfig,
    width: u32,
    height: u32,
    neighborhood: Neighborhood,
    topology: Topology,
    vitality: VitalityMode,
    num_states: u32,
}

fn parse_args() -> MainArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = MainArgs {
        config: TrailLifeConfig::default(),
        width: DEFAULT_SIDE,
        height: DEFAULT_SIDE,
        neighborhood: Neighborhood::Moore8,
        topology: Topology::Torus,
        vitality: VitalityMode::None,
        num_states: 2,
    };
    let next_arg = |i: usize, flag: &str| -> &str {
        args.get(i)
            .map(String::as_str)
            .unwrap_or_else(|| panic!("{flag} requires a value"))
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--threads" => {
                i += 1;
                let n: usize = next_arg(i, "--threads")
                    .parse()
                    .expect("--threads requires a positive integer");
                parsed.config = parsed.config.thread_count(n);
            }
            "--max-threads" => {
                i += 1;
                let n: usize = next_arg(i, "--max-threads")
                    .parse()
                    .expect("--max-threads requires a positive integer");
                parsed.config = parsed.config.max_threads(n);
            }
            "--width" => {
                i += 1;
                parsed.width = next_arg(i, "--width")
                    .parse()
                    .expect("--width requires a positive integer");
            }
            "--height" => {
                i += 1;
                parsed.height = next_arg(i, "--height")
                    .parse()
                    .expect("--height requires a positive integer");
            }
            "--states" => {
                i += 1;
                parsed.num_states = next_arg(i, "--states")
                    .parse()
                    .expect("--states requires an integer in 2..=256");
            }
            "--neighborhood" => {
                i += 1;
                let name = next_arg(i, "--neighborhood");
                parsed.neighborhood = Neighborhood::parse(name)
                    .unwrap_or_else(|| panic!("unknown neighborhood: {name}"));
            }
            "--topology" => {
                i += 1;
                let name = next_arg(i, "--topology");
                parsed.topology = Topology::parse(name)
                    .unwrap_or_else(|| panic!("unknown topology: {name}"));
            }
            "--vitality" => {
                i += 1;
                let name = next_arg(i, "--vitality");
                parsed.vitality = VitalityMode::parse(name)
                    .unwrap_or_else(|| panic!("unknown vitality mode: {name}"));
            }
            other => panic!(
                "unknown argument: {other}\nusage: trail-life [--width N] [--height N] \
                 [--states N] [--neighborhood NAME] [--topology NAME] [--vitality NAME] \
                 [--threads N] [--max-threads N]"
            ),
        }
        i += 1;
    }
    parsed
}

fn seed_random_world(trail: &mut TrailLife, preview: &mut PreviewLife) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EED_1234_ABCD_EF01);
    let threshold = (u64::MAX as f64 * LIVE_DENSITY) as u64;

    for y in 0..trail.height() {
        for x in 0..trail.width() {
            if rng.next_u64() <= threshold {
                trail.set_cell(x, y, 1);
                preview.set_cell(x, y, 1);
            }
        }
    }
}

fn run_checked(args: MainArgs) {
    let rule = RuleDescriptor::new(
        1 << 3,
        (1 << 2) | (1 << 3),
        args.num_states,
        args.neighborhood,
    )
    .expect("invalid rule");
    let vitality = VitalitySettings::new(args.vitality);

    let mut trail =
        TrailLife::with_config(args.width, args.height, args.config).expect("invalid grid");
    let mut preview = PreviewLife::new(args.width, args.height).expect("invalid grid");
    let trail_summary = trail
        .configure(rule, args.topology, &vitality)
        .expect("invalid configuration");
    let preview_summary = preview
        .configure(rule, args.topology, &vitality)
        .expect("invalid configuration");
    assert_eq!(trail_summary, preview_summary);
    if trail_summary.height_rounded {
        println!(
            "note: height rounded up to {} for the hex wrap seam",
            trail_summary.height
        );
    }

    seed_random_world(&mut trail, &mut preview);

    let mut trail_total = std::time::Duration::ZERO;
    let mut preview_total = std::time::Duration::ZERO;

    for checkpoint in 1..=(TOTAL_ITERATIONS / CHECK_INTERVAL) {
        let iteration = checkpoint * CHECK_INTERVAL;

        let start = Instant::now();
        trail.step_n(CHECK_INTERVAL);
        let trail_phase = start.elapsed();
        trail_total += trail_phase;

        let start = Instant::now();
        preview.step_n(CHECK_INTERVAL);
        let preview_phase = start.elapsed();
        preview_total += preview_phase;

        let match_status = if trail.snapshot() == preview.snapshot() {
            "MATCH"
        } else {
            "MISMATCH"
        };
        let trail_ms = trail_phase.as_secs_f64() * 1000.0;
        let preview_ms = preview_phase.as_secs_f64() * 1000.0;
        println!(
            "Iteration {iteration}: population = {} [{match_status}]",
            trail.population()
        );
        println!(
            "  TrailLife: {:.6} ms/iter | PreviewLife: {:.6} ms/iter",
            trail_ms / CHECK_INTERVAL as f64,
            preview_ms / CHECK_INTERVAL as f64
        );
    }

    let trail_ms = trail_total.as_secs_f64() * 1000.0;
    let preview_ms = preview_total.as_secs_f64() * 1000.0;
    println!("\n--- Summary ({TOTAL_ITERATIONS} iterations) ---");
    println!(
        "TrailLife: {trail_ms:.3} ms total | PreviewLife: {preview_ms:.3} ms total | speedup {:.2}x",
        preview_ms / trail_ms
    );
}

fn main() {
    run_checked(parse_args());
}
