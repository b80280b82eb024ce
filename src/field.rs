/*
 * Particle Field Module
 *
 * Owns the set of points drawn behind the page. Every frame the points are
 * advanced and bounced off the surface edges, and every pair closer than the
 * maximum connection distance is joined by an edge whose opacity falls off
 * linearly with distance.
 *
 * The pairwise pass is O(n²); the point count is small and fixed.
 */

use rand::Rng;
use tracing::debug;

use crate::params::FieldParams;
use crate::point::Point;

// Scales edge opacity so that even touching points give a faint line
pub const EDGE_DAMPENING: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub opacity: f32,
}

/// Opacity of an edge of length `distance`, or `None` when no edge is drawn.
pub fn edge_opacity(distance: f32, max_distance: f32) -> Option<f32> {
    if distance < max_distance {
        Some((max_distance - distance) / max_distance * EDGE_DAMPENING)
    } else {
        None
    }
}

pub struct ParticleField {
    points: Vec<Point>,
    params: FieldParams,
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn new(params: &FieldParams, width: f32, height: f32) -> Self {
        Self::with_rng(params, width, height, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(params: &FieldParams, width: f32, height: f32, rng: &mut R) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let points = (0..params.node_count)
            .map(|_| Point::random(rng, width, height, params))
            .collect();

        Self { points, params: params.clone(), width, height }
    }

    pub fn from_points(points: Vec<Point>, params: &FieldParams, width: f32, height: f32) -> Self {
        Self { points, params: params.clone(), width: width.max(0.0), height: height.max(0.0) }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn max_distance(&self) -> f32 {
        self.params.max_distance
    }

    // Only the bounds change; points are clamped on the next update
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn update(&mut self) {
        let (width, height) = (self.width, self.height);
        for point in &mut self.points {
            point.step(width, height);
        }
    }

    // Pick up parameter edits from the control panel
    pub fn apply_params(&mut self, params: &FieldParams) {
        if params.node_count != self.points.len() {
            self.set_node_count(params.node_count, params);
        }
        self.params = params.clone();
    }

    // Grow with fresh random points or drop from the end; survivors keep their state
    pub fn set_node_count(&mut self, count: usize, params: &FieldParams) {
        let mut rng = rand::thread_rng();
        let (width, height) = (self.width, self.height);
        self.points.resize_with(count, || Point::random(&mut rng, width, height, params));
        debug!(count, "node count changed");
    }

    pub fn for_each_edge(&self, mut f: impl FnMut(Edge)) {
        let max_distance = self.params.max_distance;
        for i in 0..self.points.len() {
            for j in (i + 1)..self.points.len() {
                let distance = self.points[i].distance(&self.points[j]);
                if let Some(opacity) = edge_opacity(distance, max_distance) {
                    f(Edge { a: i, b: j, distance, opacity });
                }
            }
        }
    }

    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        self.for_each_edge(|edge| edges.push(edge));
        edges
    }
}
