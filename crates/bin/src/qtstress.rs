//! qtstress - headless quadtree stress driver.
//!
//! Moves a crowd of random shapes, rebuilds the tree every frame and asks it
//! for collision candidates of every shape, then reports how many pairwise
//! checks the tree saved compared to testing every pair.

mod stress_config;

use quadtree::{Circle, Line, NodeGeometry, Quadtree, Rectangle, Shape, TreeStats};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};
use stress_config::{StressConfig, WorkloadConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Per-frame displacement carried as shape payload.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Velocity {
    vx: f64,
    vy: f64,
}

type Body = Shape<Velocity>;

#[derive(Debug, Default)]
struct Report {
    frames: u32,
    queries: u64,
    /// Candidates returned, not counting the querying shape itself.
    candidates: u64,
    max_candidates: usize,
    insert_time: Duration,
    query_time: Duration,
    last_stats: TreeStats,
}

impl Report {
    fn avg_candidates(&self) -> f64 {
        if self.queries == 0 {
            return 0.0;
        }
        self.candidates as f64 / self.queries as f64
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("qtstress v{}", env!("CARGO_PKG_VERSION"));

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("qtstress.toml"));
    let config = StressConfig::load(&path)?;
    validate(&config)?;

    let seed = config.workload.seed.unwrap_or_else(rand::random);
    info!("Loaded configuration from {}", path.display());
    info!(
        "  Tree: {}x{} at ({}, {})",
        config.tree.width, config.tree.height, config.tree.x, config.tree.y
    );
    info!(
        "  Capacity: {} objects per leaf, {} levels",
        config.tree.max_objects, config.tree.max_levels
    );
    info!(
        "  Workload: {} shapes, {} frames",
        config.workload.shapes, config.workload.frames
    );
    info!("  Seed: {}", seed);

    let report = run(&config, seed);

    let n = config.workload.shapes as u64;
    let brute_force = n * n.saturating_sub(1) * report.frames as u64;
    info!("Simulated {} frames, {} queries", report.frames, report.queries);
    info!(
        "  Candidates: {:.2} avg, {} max per query",
        report.avg_candidates(),
        report.max_candidates
    );
    info!(
        "  Pair checks: {} with tree vs {} brute force",
        report.candidates, brute_force
    );
    info!(
        "  Time: {:?} inserting, {:?} querying",
        report.insert_time, report.query_time
    );
    info!(
        "  Final tree: {} nodes, {} leaves, depth {}, {} stored refs",
        report.last_stats.node_count,
        report.last_stats.leaf_count,
        report.last_stats.depth,
        report.last_stats.stored_refs
    );

    Ok(())
}

fn validate(config: &StressConfig) -> anyhow::Result<()> {
    let workload = &config.workload;
    anyhow::ensure!(
        config.tree.width > 0.0 && config.tree.height > 0.0,
        "tree width and height must be positive"
    );
    anyhow::ensure!(
        workload.min_size >= 0.0 && workload.min_size <= workload.max_size,
        "min_size must be between 0 and max_size"
    );
    anyhow::ensure!(workload.max_speed >= 0.0, "max_speed must not be negative");
    Ok(())
}

fn run(config: &StressConfig, seed: u64) -> Report {
    let mut rng = StdRng::seed_from_u64(seed);
    let bounds = config.tree.bounds();
    let mut bodies: Vec<Body> = (0..config.workload.shapes)
        .map(|_| spawn(&mut rng, &bounds, &config.workload))
        .collect();

    let mut tree = Quadtree::new(config.tree);
    let mut report = Report::default();

    for frame in 0..config.workload.frames {
        tree.clear();
        let handles: Vec<Rc<Body>> = bodies.iter().map(|b| Rc::new(*b)).collect();

        let start = Instant::now();
        for handle in &handles {
            tree.insert(Rc::clone(handle));
        }
        report.insert_time += start.elapsed();

        let start = Instant::now();
        for handle in &handles {
            let others = tree
                .retrieve(handle)
                .iter()
                .filter(|c| !Rc::ptr_eq(*c, handle))
                .count();
            report.queries += 1;
            report.candidates += others as u64;
            report.max_candidates = report.max_candidates.max(others);
        }
        report.query_time += start.elapsed();

        report.last_stats = tree.stats();
        debug!(
            frame,
            nodes = report.last_stats.node_count,
            depth = report.last_stats.depth,
            "Frame done"
        );

        for body in &mut bodies {
            advance(body, &bounds);
        }
        report.frames += 1;
    }

    report
}

fn spawn(rng: &mut StdRng, bounds: &NodeGeometry, workload: &WorkloadConfig) -> Body {
    let x = bounds.x + rng.random_range(0.0..bounds.width);
    let y = bounds.y + rng.random_range(0.0..bounds.height);
    let size = rng.random_range(workload.min_size..=workload.max_size);
    let velocity = Velocity {
        vx: rng.random_range(-workload.max_speed..=workload.max_speed),
        vy: rng.random_range(-workload.max_speed..=workload.max_speed),
    };

    match rng.random_range(0..3) {
        0 => Rectangle::with_data(x, y, size, size, velocity).into(),
        1 => Circle::with_data(x, y, size / 2.0, velocity).into(),
        _ => {
            let angle = rng.random_range(0.0..std::f64::consts::TAU);
            Line::with_data(x, y, x + size * angle.cos(), y + size * angle.sin(), velocity).into()
        }
    }
}

/// Wrap a coordinate that left `[min, min + extent]` around to the other side.
fn wrap(value: f64, min: f64, extent: f64) -> f64 {
    if value > min + extent {
        min
    } else if value < min {
        min + extent
    } else {
        value
    }
}

fn advance(body: &mut Body, bounds: &NodeGeometry) {
    let Velocity { vx, vy } = *body.data();
    match body {
        Shape::Rectangle(r) => {
            r.x = wrap(r.x + vx, bounds.x, bounds.width);
            r.y = wrap(r.y + vy, bounds.y, bounds.height);
        }
        Shape::Circle(c) => {
            c.x = wrap(c.x + vx, bounds.x, bounds.width);
            c.y = wrap(c.y + vy, bounds.y, bounds.height);
        }
        Shape::Line(l) => {
            // Wrap on the first endpoint, keep the segment rigid.
            let dx = wrap(l.x1 + vx, bounds.x, bounds.width) - l.x1;
            let dy = wrap(l.y1 + vy, bounds.y, bounds.height) - l.y1;
            l.x1 += dx;
            l.x2 += dx;
            l.y1 += dy;
            l.y2 += dy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadtree::QuadtreeProps;

    fn small_config() -> StressConfig {
        StressConfig {
            tree: QuadtreeProps::new(200.0, 200.0).with_max_objects(4),
            workload: WorkloadConfig {
                shapes: 40,
                frames: 3,
                seed: Some(1),
                ..WorkloadConfig::default()
            },
        }
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(50.0, 0.0, 100.0), 50.0);
        assert_eq!(wrap(101.0, 0.0, 100.0), 0.0);
        assert_eq!(wrap(-1.0, 0.0, 100.0), 100.0);
        assert_eq!(wrap(5.0, 10.0, 100.0), 110.0);
    }

    #[test]
    fn test_advance_moves_line_rigidly() {
        let bounds = NodeGeometry::new(0.0, 0.0, 100.0, 100.0);
        let velocity = Velocity { vx: 2.0, vy: 1.0 };
        let mut body: Body = Line::with_data(99.0, 10.0, 109.0, 20.0, velocity).into();
        advance(&mut body, &bounds);

        let Shape::Line(line) = body else {
            panic!("expected a line");
        };
        assert_eq!((line.x1, line.y1), (0.0, 11.0));
        assert_eq!((line.x2, line.y2), (10.0, 21.0));
    }

    #[test]
    fn test_advance_circle() {
        let bounds = NodeGeometry::new(0.0, 0.0, 100.0, 100.0);
        let velocity = Velocity { vx: -1.0, vy: 2.0 };
        let mut body: Body = Circle::with_data(10.0, 10.0, 3.0, velocity).into();
        advance(&mut body, &bounds);
        let expected: Body = Circle::with_data(9.0, 12.0, 3.0, velocity).into();
        assert_eq!(body, expected);
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        let mut config = small_config();
        assert!(validate(&config).is_ok());

        config.workload.min_size = 50.0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_run_counts_queries() {
        let config = small_config();
        let report = run(&config, 1);

        assert_eq!(report.frames, 3);
        assert_eq!(report.queries, 120);
        assert!(report.candidates <= 40 * 39 * 3);
        assert!(report.last_stats.node_count >= 1);
    }

    #[test]
    fn test_run_is_deterministic_for_seed() {
        let config = small_config();
        let a = run(&config, 9);
        let b = run(&config, 9);

        assert_eq!(a.candidates, b.candidates);
        assert_eq!(a.last_stats, b.last_stats);
    }
}
