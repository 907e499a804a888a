//! Builds an affine transform and pushes sample points through it.
//!
//! Points are row vectors multiplied from the left (`p * m`), so the
//! translation sits in the matrix's last row. Each point is also pushed back
//! through the inverse to show the round trip.
//!
//! ```text
//! transform_demo --angle 1.57 --axis 0,0,1 --scale 2,2,2 --translate 1,0,0 --point 1,0,0
//! RUST_LOG=transform_demo=debug transform_demo --format json
//! ```

mod config;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use config::{DemoConfig, OutputFormat, parse_vector3};
use engine_math::{Aabb, Matrix3x3, Matrix4x4, Transform3D, Vector3, Vector4};

#[derive(Parser)]
#[command(name = "transform_demo", about = "Row-vector affine transform demo")]
struct Args {
    /// Rotation angle in radians
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    angle: f32,

    /// Rotation axis as x,y,z
    #[arg(long, value_parser = parse_vector3, default_value = "0,0,1", allow_hyphen_values = true)]
    axis: Vector3,

    /// Per-axis scale as x,y,z
    #[arg(long, value_parser = parse_vector3, default_value = "1,1,1", allow_hyphen_values = true)]
    scale: Vector3,

    /// Translation as x,y,z
    #[arg(long, value_parser = parse_vector3, default_value = "0,0,0", allow_hyphen_values = true)]
    translate: Vector3,

    /// Local point as x,y,z (repeatable; defaults to the unit cube corners)
    #[arg(long = "point", value_parser = parse_vector3, allow_hyphen_values = true)]
    points: Vec<Vector3>,

    /// Output format
    #[arg(long, value_enum, env = "TRANSFORM_DEMO_FORMAT", default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl From<Args> for DemoConfig {
    fn from(args: Args) -> Self {
        DemoConfig::default()
            .with_rotation(args.angle, args.axis)
            .with_scale(args.scale)
            .with_translation(args.translate)
            .with_points(args.points)
            .with_format(args.format)
    }
}

#[derive(Debug, Serialize)]
struct PointReport {
    local: Vector3,
    world: Vector4,
    restored: Vector3,
}

#[derive(Debug, Serialize)]
struct Report {
    transform: Transform3D,
    matrix: Matrix4x4,
    determinant: f32,
    points: Vec<PointReport>,
}

fn build_report(config: &DemoConfig) -> Report {
    let rotation = if config.axis.length_squared() == 0.0 {
        warn!("rotation axis has zero length; skipping rotation");
        Matrix3x3::identity()
    } else {
        engine_math::transform::rotation(config.angle, config.axis)
    };

    let transform = Transform3D {
        rotation,
        scale: config.scale,
        translation: config.translate,
    };
    let matrix = transform.to_matrix();
    let determinant = matrix.determinant();
    info!(%determinant, translation = %matrix.row(3), "built transform");
    if determinant == 0.0 {
        warn!("transform is singular; restored points will not be finite");
    }
    let inverse = matrix.inversed();

    let locals = if config.points.is_empty() {
        Aabb::new(Vector3::zero(), Vector3::uniform(1.0)).corners().to_vec()
    } else {
        config.points.clone()
    };

    let points = locals
        .into_iter()
        .map(|local| {
            let world = local * matrix;
            let restored = (world * inverse).truncate();
            debug!(%local, %world, %restored, "transformed point");
            PointReport { local, world, restored }
        })
        .collect();

    Report {
        transform,
        matrix,
        determinant,
        points,
    }
}

fn write_report(report: &Report, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "matrix rows:")?;
            for r in 0..4 {
                writeln!(out, "  {}", report.matrix.row(r))?;
            }
            writeln!(out, "determinant: {}", report.determinant)?;
            for p in &report.points {
                writeln!(out, "{} -> {}", p.local, p.world)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Msgpack => {
            out.write_all(&rmp_serde::to_vec_named(report)?)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("transform_demo=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::from(Args::parse());
    info!(
        angle = config.angle,
        axis = %config.axis,
        scale = %config.scale,
        translate = %config.translate,
        "transform demo starting"
    );

    let report = build_report(&config);
    info!(points = report.points.len(), "transformed points");

    let stdout = std::io::stdout();
    write_report(&report, config.format, &mut stdout.lock())?;
    Ok(())
}
