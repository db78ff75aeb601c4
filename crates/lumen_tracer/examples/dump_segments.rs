//! Trace the default scene without a window and print every segment.
//!
//! Run with: cargo run -p lumen_tracer --example dump_segments -- [rays] [bounces]

use lumen_core::{Scene, SessionConfig};
use lumen_tracer::{trace_light, Segment};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let rays = args.next().and_then(|a| a.parse().ok()).unwrap_or(8);
    let bounces = args.next().and_then(|a| a.parse().ok()).unwrap_or(3);

    let scene = Scene::default();
    let config = SessionConfig::new(rays, bounces);

    log::info!(
        "Tracing {} rays x {} bounces from {:?}",
        config.ray_count(),
        config.bounce_count(),
        scene.light.position
    );

    let mut segments: Vec<Segment> = Vec::new();
    trace_light(&scene, &config, &mut segments);

    for (i, chunk) in segments
        .chunks(config.bounce_count() as usize)
        .enumerate()
    {
        println!("ray {}", i);
        for s in chunk {
            println!(
                "  ({:7.2}, {:7.2}) -> ({:7.2}, {:7.2})",
                s.start.x, s.start.y, s.end.x, s.end.y
            );
        }
    }

    log::info!("{} segments", segments.len());
}
