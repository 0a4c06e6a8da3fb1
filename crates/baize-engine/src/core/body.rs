use glam::Vec2;

use crate::api::types::BodyId;

/// Collision shape of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    Rect { half_width: f32, half_height: f32 },
}

impl Shape {
    /// Whether all extents are strictly positive.
    pub fn is_valid(&self) -> bool {
        match *self {
            Shape::Circle { radius } => radius > 0.0,
            Shape::Rect {
                half_width,
                half_height,
            } => half_width > 0.0 && half_height > 0.0,
        }
    }
}

/// What role a body plays on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyCategory {
    CueBall,
    ObjectBall,
    Rail,
    /// Capture region. Sensors never receive impulse response; the pocket
    /// rule checks them by center distance instead.
    PocketSensor,
}

impl BodyCategory {
    /// Balls are the only bodies that move.
    pub fn is_ball(self) -> bool {
        matches!(self, BodyCategory::CueBall | BodyCategory::ObjectBall)
    }
}

/// Physical material properties of a body.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    /// Elasticity of collision response, in [0, 1]. 1.0 = perfectly elastic.
    pub restitution: f32,
    /// Per-step velocity damping coefficient, >= 0. Applied as
    /// `velocity *= 1 - friction` each step; dt scales integration only.
    pub friction: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            restitution: 0.9,
            friction: 0.005,
        }
    }
}

/// Builder for describing a body before it is added to the world.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub shape: Shape,
    pub category: BodyCategory,
    pub position: Vec2,
    pub velocity: Vec2,
    pub is_static: bool,
    pub material: Material,
}

impl BodyDesc {
    /// A dynamic body with the given shape and category.
    pub fn dynamic(shape: Shape, category: BodyCategory) -> Self {
        Self {
            shape,
            category,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            is_static: false,
            material: Material::default(),
        }
    }

    /// A static body: never moves, infinite effective mass.
    pub fn fixed(shape: Shape, category: BodyCategory) -> Self {
        Self {
            shape,
            category,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            is_static: true,
            material: Material::default(),
        }
    }

    pub fn with_position(mut self, pos: Vec2) -> Self {
        self.position = pos;
        self
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.velocity = vel;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }
}

/// A rigid body owned by the `World`.
#[derive(Debug, Clone)]
pub struct RigidBody {
    pub id: BodyId,
    pub shape: Shape,
    pub category: BodyCategory,
    pub position: Vec2,
    pub velocity: Vec2,
    pub is_static: bool,
    pub material: Material,
}

impl RigidBody {
    /// Build a body from a descriptor. Panics on non-positive extents or a
    /// static body with non-zero velocity; both are programming defects,
    /// not recoverable states.
    pub fn new(id: BodyId, desc: &BodyDesc) -> Self {
        assert!(desc.shape.is_valid(), "body {:?} has non-positive extents", id);
        assert!(
            !desc.is_static || desc.velocity == Vec2::ZERO,
            "static body {:?} created with non-zero velocity",
            id
        );
        Self {
            id,
            shape: desc.shape,
            category: desc.category,
            position: desc.position,
            velocity: desc.velocity,
            is_static: desc.is_static,
            material: desc.material,
        }
    }

    /// Inverse mass used by the impulse solver. Statics report 0 so they
    /// absorb impulses without moving. Dynamic balls all share unit mass:
    /// the table has no mixed-mass pairs, only ball-ball and ball-static.
    pub fn inv_mass(&self) -> f32 {
        if self.is_static {
            0.0
        } else {
            1.0
        }
    }

    /// Radius for circular bodies.
    pub fn radius(&self) -> Option<f32> {
        match self.shape {
            Shape::Circle { radius } => Some(radius),
            Shape::Rect { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamic_desc_defaults() {
        let desc = BodyDesc::dynamic(Shape::Circle { radius: 10.0 }, BodyCategory::ObjectBall);
        assert!(!desc.is_static);
        assert_eq!(desc.position, Vec2::ZERO);
        assert!((desc.material.restitution - 0.9).abs() < 1e-6);
    }

    #[test]
    fn static_body_has_zero_inv_mass() {
        let desc = BodyDesc::fixed(
            Shape::Rect {
                half_width: 100.0,
                half_height: 10.0,
            },
            BodyCategory::Rail,
        );
        let body = RigidBody::new(BodyId(1), &desc);
        assert_eq!(body.inv_mass(), 0.0);
    }

    #[test]
    fn dynamic_body_has_unit_inv_mass() {
        let desc = BodyDesc::dynamic(Shape::Circle { radius: 5.0 }, BodyCategory::CueBall);
        let body = RigidBody::new(BodyId(2), &desc);
        assert_eq!(body.inv_mass(), 1.0);
    }

    #[test]
    #[should_panic(expected = "non-positive extents")]
    fn zero_radius_panics() {
        let desc = BodyDesc::dynamic(Shape::Circle { radius: 0.0 }, BodyCategory::ObjectBall);
        let _ = RigidBody::new(BodyId(3), &desc);
    }

    #[test]
    #[should_panic(expected = "non-zero velocity")]
    fn static_with_velocity_panics() {
        let mut desc = BodyDesc::fixed(Shape::Circle { radius: 5.0 }, BodyCategory::PocketSensor);
        desc.velocity = Vec2::new(1.0, 0.0);
        let _ = RigidBody::new(BodyId(4), &desc);
    }

    #[test]
    fn category_ball_check() {
        assert!(BodyCategory::CueBall.is_ball());
        assert!(BodyCategory::ObjectBall.is_ball());
        assert!(!BodyCategory::Rail.is_ball());
        assert!(!BodyCategory::PocketSensor.is_ball());
    }
}
