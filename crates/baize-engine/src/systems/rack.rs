use glam::Vec2;

use crate::api::types::BodyId;
use crate::core::body::{BodyCategory, BodyDesc, Material, Shape};
use crate::core::world::World;
use crate::systems::rng::Rng;
use crate::table::layout::TableLayout;

/// Object balls racked at the start of a session.
pub const OBJECT_BALL_COUNT: usize = 15;

/// Scatter the object balls over the right half of the playing surface,
/// one ball diameter clear of every rail.
///
/// The scatter is seeded: the same seed always produces the same table,
/// which keeps whole-session replays reproducible.
pub fn spawn_rack(
    world: &mut World,
    layout: &TableLayout,
    material: Material,
    seed: u64,
) -> Vec<BodyId> {
    let mut rng = Rng::new(seed);
    let (min, max) = layout.surface_bounds();
    let diameter = layout.ball_radius * 2.0;

    let mut ids = Vec::with_capacity(OBJECT_BALL_COUNT);
    for _ in 0..OBJECT_BALL_COUNT {
        let x = rng.next_range(layout.center.x, max.x - diameter);
        let y = rng.next_range(min.y + diameter, max.y - diameter);
        let desc = BodyDesc::dynamic(
            Shape::Circle {
                radius: layout.ball_radius,
            },
            BodyCategory::ObjectBall,
        )
        .with_position(Vec2::new(x, y))
        .with_material(material);
        ids.push(world.add_body(&desc));
    }
    ids
}
