/*
 * Point Module
 *
 * A single animated dot of the background field. Points live in surface
 * coordinates: origin at the top-left corner, x to the right, y downwards.
 * They bounce elastically off the surface edges.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::FieldParams;

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Point {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self { position, velocity, radius }
    }

    // Random point somewhere on a width x height surface
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, params: &FieldParams) -> Self {
        let x = rng.gen::<f32>() * width;
        let y = rng.gen::<f32>() * height;

        // Symmetric range of total width `speed` around zero
        let vx = (rng.gen::<f32>() - 0.5) * params.speed;
        let vy = (rng.gen::<f32>() - 0.5) * params.speed;

        let radius = rng.gen::<f32>() * params.radius_spread + params.min_radius;

        Self::new(vec2(x, y), vec2(vx, vy), radius)
    }

    // Advance one frame, reflect off the edges, then clamp into bounds.
    // Reflection is decided on the unclamped position.
    pub fn step(&mut self, width: f32, height: f32) {
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > height {
            self.velocity.y = -self.velocity.y;
        }

        self.position.x = self.position.x.max(0.0).min(width);
        self.position.y = self.position.y.max(0.0).min(height);
    }

    pub fn distance(&self, other: &Point) -> f32 {
        self.position.distance(other.position)
    }
}
