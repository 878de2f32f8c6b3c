//! Scene descriptions loaded from RON, with built-in defaults for the
//! three demo variants.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collision::{bodies_overlap, BoundingBox, NormalPolicy};
use crate::common::Visual;
use crate::math::vec2::Vec2;
use crate::objects::Body;
use crate::world::{Entity, Scene, DEFAULT_SPEED};

/// Upper bound on any coordinate in a scene file.
pub const MAX_COORD: f64 = 1_000_000.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scene file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scene: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize scene: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid scene: {0}")]
    Validation(String),
}

/// The three box demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemoVariant {
    /// Player among solid walls.
    Walls,
    /// Solid walls plus collectible pickups.
    Pickups,
    /// Player and one non-blocking box that highlights on overlap.
    Visualizer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Collision Viewer".to_string(),
            width: 800.0,
            height: 600.0,
            target_fps: 60,
        }
    }
}

fn default_speed() -> f64 {
    DEFAULT_SPEED
}

fn default_solid_walls() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub player: Body,
    #[serde(default)]
    pub walls: Vec<Body>,
    #[serde(default)]
    pub pickups: Vec<Body>,
    #[serde(default = "default_speed")]
    pub speed: f64,
    #[serde(default = "default_solid_walls")]
    pub solid_walls: bool,
    /// Report a zero normal for X-axis hits towards +X (legacy behaviour).
    #[serde(default)]
    pub legacy_normals: bool,
    #[serde(default)]
    pub window: WindowConfig,
}

fn demo_box(x: f64, y: f64) -> Body {
    Body::new(
        Vec2::new(x, y),
        BoundingBox::new(Vec2::new(-50.0, -50.0), Vec2::new(50.0, 50.0)),
    )
}

impl SceneConfig {
    /// Built-in scene for a demo variant.
    pub fn builtin(variant: DemoVariant) -> Self {
        let mut config = SceneConfig {
            player: demo_box(300.0, 250.0),
            walls: vec![demo_box(420.0, 270.0), demo_box(220.0, 120.0)],
            pickups: Vec::new(),
            speed: DEFAULT_SPEED,
            solid_walls: true,
            legacy_normals: false,
            window: WindowConfig::default(),
        };
        match variant {
            DemoVariant::Walls => {}
            DemoVariant::Pickups => {
                config.pickups = [150.0, 300.0, 450.0, 600.0]
                    .iter()
                    .map(|&x| Body::with_size(Vec2::new(x, 480.0), 20.0, 20.0))
                    .collect();
                config.window.title = "Pickups".to_string();
            }
            DemoVariant::Visualizer => {
                config.walls.truncate(1);
                config.solid_walls = false;
            }
        }
        config
    }

    /// Parses and validates a scene from RON text.
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a scene file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&contents)?;
        debug!(
            "loaded scene {}: {} walls, {} pickups",
            path.display(),
            config.walls.len(),
            config.pickups.len()
        );
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Rejects scenes the collision test would treat as nonsense: inverted
    /// or non-finite boxes, out-of-range coordinates, non-positive speed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "speed must be positive, got {}",
                self.speed
            )));
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigError::Validation(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.window.target_fps == 0 {
            return Err(ConfigError::Validation("target_fps must be non-zero".to_string()));
        }

        validate_body("player", &self.player)?;
        for (i, wall) in self.walls.iter().enumerate() {
            validate_body(&format!("wall {}", i), wall)?;
        }
        for (i, pickup) in self.pickups.iter().enumerate() {
            validate_body(&format!("pickup {}", i), pickup)?;
        }
        if self.solid_walls && self.walls.iter().any(|w| bodies_overlap(&self.player, w)) {
            warn!("player starts inside a solid wall and will be stuck on the blocked axes");
        }
        Ok(())
    }

    pub fn normal_policy(&self) -> NormalPolicy {
        if self.legacy_normals {
            NormalPolicy::LegacyParity
        } else {
            NormalPolicy::Corrected
        }
    }

    /// Builds the runtime scene, attaching default visuals to each body.
    pub fn build_scene(&self) -> Scene {
        let mut scene = Scene::new(Entity::new(self.player, Visual::PLAYER));
        scene.speed = self.speed;
        scene.solid_walls = self.solid_walls;
        scene.normal_policy = self.normal_policy();
        for wall in &self.walls {
            scene.add_wall(Entity::new(*wall, Visual::WALL));
        }
        for pickup in &self.pickups {
            let half = pickup.bounds.half_extents();
            scene.add_pickup(Entity::new(*pickup, Visual::pickup(half.x.min(half.y) as f32)));
        }
        scene
    }
}

fn validate_body(name: &str, body: &Body) -> Result<(), ConfigError> {
    let corners = [body.position, body.bounds.min, body.bounds.max];
    if corners.iter().any(|v| !v.is_finite()) {
        return Err(ConfigError::Validation(format!("{} has non-finite coordinates", name)));
    }
    if corners
        .iter()
        .any(|v| v.x.abs() > MAX_COORD || v.y.abs() > MAX_COORD)
    {
        return Err(ConfigError::Validation(format!(
            "{} has coordinates beyond {}",
            name, MAX_COORD
        )));
    }
    if !body.bounds.is_well_formed() {
        return Err(ConfigError::Validation(format!(
            "{} has min greater than max: {:?}",
            name, body.bounds
        )));
    }
    Ok(())
}
