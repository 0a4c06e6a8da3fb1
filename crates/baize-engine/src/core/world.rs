use glam::Vec2;

use crate::api::types::BodyId;
use crate::core::body::{BodyDesc, RigidBody};

/// Velocity components below this are snapped to zero so bodies come to an
/// exact rest instead of micro-drifting forever.
pub const REST_EPSILON: f32 = 0.01;

/// Largest dt a single step will integrate. A host that pauses and resumes
/// hands us a huge frame delta; integrating it whole would tunnel balls
/// through the rails.
pub const MAX_STEP_DT: f32 = 0.1;

/// Owning container of every rigid body in the simulation.
///
/// Flat `Vec` storage with linear id lookup — the table holds a few dozen
/// bodies, not millions. Other components refer to bodies by `BodyId` only.
pub struct World {
    bodies: Vec<RigidBody>,
    next_id: u32,
    gravity: Vec2,
}

impl World {
    /// An empty world. Gravity is zero: the table is a top-down plane.
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(32),
            next_id: 1,
            gravity: Vec2::ZERO,
        }
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    /// Add a body, assigning it the next id.
    pub fn add_body(&mut self, desc: &BodyDesc) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(RigidBody::new(id, desc));
        id
    }

    /// Remove a body by id. Returns the removed body if it was present.
    /// The id is invalid afterwards: every later lookup returns `None`.
    pub fn remove_body(&mut self, id: BodyId) -> Option<RigidBody> {
        if let Some(idx) = self.bodies.iter().position(|b| b.id == id) {
            Some(self.bodies.swap_remove(idx))
        } else {
            None
        }
    }

    pub fn body(&self, id: BodyId) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn bodies(&self) -> impl Iterator<Item = &RigidBody> {
        self.bodies.iter()
    }

    pub fn bodies_mut(&mut self) -> impl Iterator<Item = &mut RigidBody> {
        self.bodies.iter_mut()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Apply a continuous force over `dt` to a body. No-op on unknown ids
    /// and on statics (infinite mass).
    pub fn apply_force(&mut self, id: BodyId, force: Vec2, dt: f32) {
        if let Some(body) = self.body_mut(id) {
            let inv_mass = body.inv_mass();
            body.velocity += force * inv_mass * dt;
        }
    }

    /// Apply an instantaneous impulse to a body. No-op on unknown ids and
    /// on statics.
    pub fn apply_impulse(&mut self, id: BodyId, impulse: Vec2) {
        if let Some(body) = self.body_mut(id) {
            let inv_mass = body.inv_mass();
            body.velocity += impulse * inv_mass;
        }
    }

    /// Set the velocity of a body directly. Statics are skipped: their
    /// velocity must stay exactly zero.
    pub fn set_velocity(&mut self, id: BodyId, vel: Vec2) {
        if let Some(body) = self.body_mut(id) {
            if !body.is_static {
                body.velocity = vel;
            }
        }
    }

    pub fn velocity(&self, id: BodyId) -> Vec2 {
        self.body(id).map(|b| b.velocity).unwrap_or(Vec2::ZERO)
    }

    /// Advance every non-static body by one step.
    ///
    /// Order of operations: integrate position, apply per-step friction
    /// damping, snap sub-epsilon velocity components to zero. The damping
    /// factor is clamped to [0, 1] so friction can slow a body but never
    /// reverse it.
    pub fn step(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_STEP_DT);
        let gravity = self.gravity;

        for body in &mut self.bodies {
            if body.is_static {
                assert!(
                    body.velocity == Vec2::ZERO,
                    "static body {:?} has non-zero velocity",
                    body.id
                );
                continue;
            }

            body.velocity += gravity * dt;
            body.position += body.velocity * dt;

            let damping = (1.0 - body.material.friction).clamp(0.0, 1.0);
            body.velocity *= damping;

            if body.velocity.x.abs() < REST_EPSILON {
                body.velocity.x = 0.0;
            }
            if body.velocity.y.abs() < REST_EPSILON {
                body.velocity.y = 0.0;
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
