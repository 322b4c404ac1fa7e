/// Stateful cube rotator driven by key presses
use crate::config::RotatorConfig;
use crate::controls::Key;
use crate::geometry::Cube;
use crate::projection::{self, LineSink, Projection};
use crate::transform::{self, Axis};

/// Owns the current cube and applies rotations to it
#[derive(Debug, Clone)]
pub struct CubeRotator {
    cube: Cube,
    projection: Projection,
    config: RotatorConfig,
}

impl CubeRotator {
    pub fn new(config: RotatorConfig) -> Self {
        Self {
            cube: Cube::new(config.min, config.max),
            projection: Projection::new(config.scale),
            config,
        }
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn config(&self) -> &RotatorConfig {
        &self.config
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Rotate the cube about its centroid by `angle` radians
    pub fn rotate(&mut self, axis: Axis, angle: f64) {
        transform::rotate_about_centroid(self.cube.vertices_mut(), angle, axis);
    }

    /// Apply the rotations bound to `key`
    pub fn apply_key(&mut self, key: Key) {
        log::debug!("key {key:?}");
        for &(axis, sign) in key.rotations() {
            self.rotate(axis, sign * self.config.step);
        }
    }

    /// Draw the current cube
    pub fn render<S: LineSink + ?Sized>(&self, sink: &mut S) {
        projection::render(&self.cube, &self.projection, sink);
    }

    /// Handle one key press: rotate if the key is bound, then clear and
    /// redraw. Unbound keys still trigger the redraw.
    pub fn key_pressed<S: LineSink + ?Sized>(&mut self, key: Option<Key>, sink: &mut S) {
        match key {
            Some(key) => self.apply_key(key),
            None => log::debug!("ignoring unbound key"),
        }
        sink.clear();
        self.render(sink);
    }

    /// Restore the cube to its initial corners
    pub fn reset(&mut self) {
        self.cube = Cube::new(self.config.min, self.config.max);
    }
}

impl Default for CubeRotator {
    fn default() -> Self {
        Self::new(RotatorConfig::default())
    }
}
