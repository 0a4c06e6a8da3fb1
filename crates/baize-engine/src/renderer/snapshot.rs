use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::api::types::BodyId;
use crate::core::body::{BodyCategory, Shape};
use crate::core::world::World;

/// Typed render view of one live body.
#[derive(Debug, Clone, Copy)]
pub struct BodyView {
    pub id: BodyId,
    pub category: BodyCategory,
    pub shape: Shape,
    pub position: Vec2,
}

/// Flat per-body instance for hosts that read raw float buffers.
/// 6 floats = 24 bytes stride.
///
/// `extent_x`/`extent_y` are (radius, 0) for circles and the half-extents
/// for rectangles; `kind` is the `BodyCategory` encoded as a small float.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub extent_x: f32,
    pub extent_y: f32,
    pub kind: f32,
    pub id: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

fn encode_kind(category: BodyCategory) -> f32 {
    match category {
        BodyCategory::CueBall => 0.0,
        BodyCategory::ObjectBall => 1.0,
        BodyCategory::Rail => 2.0,
        BodyCategory::PocketSensor => 3.0,
    }
}

/// Pull-based render snapshot, rebuilt from the world on demand.
///
/// The renderer owns nothing but this copy; bodies pocketed between frames
/// simply stop appearing, so stale ids never dangle on the render side.
pub struct Snapshot {
    views: Vec<BodyView>,
    instances: Vec<BodyInstance>,
}

impl Snapshot {
    /// Capture the current world state.
    pub fn capture(world: &World) -> Self {
        let mut views = Vec::with_capacity(world.body_count());
        let mut instances = Vec::with_capacity(world.body_count());

        for body in world.bodies() {
            views.push(BodyView {
                id: body.id,
                category: body.category,
                shape: body.shape,
                position: body.position,
            });
            let (extent_x, extent_y) = match body.shape {
                Shape::Circle { radius } => (radius, 0.0),
                Shape::Rect {
                    half_width,
                    half_height,
                } => (half_width, half_height),
            };
            instances.push(BodyInstance {
                x: body.position.x,
                y: body.position.y,
                extent_x,
                extent_y,
                kind: encode_kind(body.category),
                id: body.id.0 as f32,
            });
        }

        Self { views, instances }
    }

    pub fn views(&self) -> &[BodyView] {
        &self.views
    }

    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Raw pointer to instance floats for shared-buffer hosts.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}
