//! Demo configuration.

use anyhow::Context;
use clap::ValueEnum;
use engine_math::Vector3;

/// How the final report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Msgpack,
}

/// Everything needed to build the transform and pick the sample points.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Rotation angle in radians.
    pub angle: f32,
    /// Rotation axis; normalized when the rotation is built.
    pub axis: Vector3,
    pub scale: Vector3,
    pub translate: Vector3,
    /// Local-space points to transform. Empty means the unit cube corners.
    pub points: Vec<Vector3>,
    pub format: OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            angle: 0.0,
            axis: Vector3::axis_z(),
            scale: Vector3::uniform(1.0),
            translate: Vector3::zero(),
            points: Vec::new(),
            format: OutputFormat::Text,
        }
    }
}

impl DemoConfig {
    /// Rotate by `angle` radians about `axis`.
    #[must_use]
    pub fn with_rotation(mut self, angle: f32, axis: Vector3) -> Self {
        self.angle = angle;
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vector3) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_translation(mut self, translate: Vector3) -> Self {
        self.translate = translate;
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: Vec<Vector3>) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Parses `"x,y,z"` into a [`Vector3`].
///
/// # Errors
///
/// Fails if a component is not a float or the count is not exactly three.
pub fn parse_vector3(text: &str) -> anyhow::Result<Vector3> {
    let floats = text
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .with_context(|| format!("invalid component {part:?} in {text:?}"))
        })
        .collect::<anyhow::Result<Vec<f32>>>()?;
    Vector3::try_from(floats.as_slice()).with_context(|| format!("invalid vector {text:?}"))
}
