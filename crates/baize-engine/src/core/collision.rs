use glam::Vec2;

use crate::api::types::BodyId;
use crate::core::body::{BodyCategory, RigidBody, Shape};
use crate::core::world::World;

/// A contact between two overlapping bodies. Ephemeral: recomputed every
/// step, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Lower body id of the pair.
    pub a: BodyId,
    /// Higher body id of the pair.
    pub b: BodyId,
    /// Unit normal pointing from `a` toward `b`.
    pub normal: Vec2,
    /// Interpenetration depth along the normal.
    pub depth: f32,
}

/// Penetration below this is left alone; avoids twitching on touching pairs.
const CORRECTION_SLOP: f32 = 0.01;

/// Fraction of the remaining penetration corrected per resolve. Full
/// correction is safe here: with zero gravity there are no resting stacks
/// to jitter, and the rails must never be tunneled through.
const CORRECTION_PERCENT: f32 = 1.0;

/// Separation axis used when two centers are exactly coincident and no
/// normal can be derived.
const FALLBACK_NORMAL: Vec2 = Vec2::X;

/// Find every overlapping pair in the world.
///
/// Pairs are visited unordered (`i < j`), so no (A,B)/(B,A) duplicates.
/// Static-static pairs have no physical effect and are skipped, as is any
/// pair involving a pocket sensor — sensors are capture regions, not
/// obstacles. The result is sorted by id pair so resolution order is
/// deterministic for replay.
pub fn find_contacts(world: &World) -> Vec<Contact> {
    let bodies: Vec<&RigidBody> = world.bodies().collect();
    let mut contacts = Vec::new();

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (a, b) = (bodies[i], bodies[j]);
            if a.is_static && b.is_static {
                continue;
            }
            if a.category == BodyCategory::PocketSensor
                || b.category == BodyCategory::PocketSensor
            {
                continue;
            }
            if let Some(contact) = test_pair(a, b) {
                contacts.push(contact);
            }
        }
    }

    contacts.sort_by_key(|c| (c.a, c.b));
    contacts
}

/// Narrow-phase test for one pair. Returns a contact with `a < b` by id
/// and the normal pointing from the lower-id body toward the higher-id one.
fn test_pair(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    let (lo, hi) = if a.id < b.id { (a, b) } else { (b, a) };

    let hit = match (lo.shape, hi.shape) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circle_vs_circle(lo.position, ra, hi.position, rb)
        }
        (Shape::Circle { radius }, Shape::Rect { half_width, half_height }) => {
            circle_vs_rect(lo.position, radius, hi.position, half_width, half_height)
        }
        (Shape::Rect { half_width, half_height }, Shape::Circle { radius }) => {
            circle_vs_rect(hi.position, radius, lo.position, half_width, half_height)
                .map(|(n, d)| (-n, d))
        }
        // Rails never overlap each other and nothing else is rectangular;
        // rect-rect pairs are always static-static and filtered above.
        (Shape::Rect { .. }, Shape::Rect { .. }) => None,
    };

    hit.map(|(normal, depth)| Contact {
        a: lo.id,
        b: hi.id,
        normal,
        depth,
    })
}

/// Circle-circle overlap. Normal points from `a` toward `b`.
fn circle_vs_circle(pa: Vec2, ra: f32, pb: Vec2, rb: f32) -> Option<(Vec2, f32)> {
    let delta = pb - pa;
    let radius_sum = ra + rb;
    let dist_sq = delta.length_squared();
    if dist_sq >= radius_sum * radius_sum {
        return None;
    }
    let dist = dist_sq.sqrt();
    if dist <= f32::EPSILON {
        // Coincident centers: no derivable normal, use the fallback axis.
        return Some((FALLBACK_NORMAL, radius_sum));
    }
    Some((delta / dist, radius_sum - dist))
}

/// Circle-rect overlap via closest point on the rect. Normal points from
/// the circle toward the rect.
fn circle_vs_rect(
    circle_pos: Vec2,
    radius: f32,
    rect_pos: Vec2,
    half_width: f32,
    half_height: f32,
) -> Option<(Vec2, f32)> {
    let rel = circle_pos - rect_pos;
    let half = Vec2::new(half_width, half_height);
    let closest = rel.clamp(-half, half);

    if closest == rel {
        // Center inside the rect: push out along the shallower axis.
        let dx = half_width - rel.x.abs();
        let dy = half_height - rel.y.abs();
        let out = if dx < dy {
            Vec2::new(if rel.x >= 0.0 { 1.0 } else { -1.0 }, 0.0)
        } else {
            Vec2::new(0.0, if rel.y >= 0.0 { 1.0 } else { -1.0 })
        };
        let depth = radius + dx.min(dy);
        return Some((-out, depth));
    }

    let delta = rel - closest;
    let dist_sq = delta.length_squared();
    if dist_sq >= radius * radius {
        return None;
    }
    let dist = dist_sq.sqrt();
    // dist > 0 here: the zero case is the center-inside branch above.
    Some((-delta / dist, radius - dist))
}

/// Resolve one contact: exchange an impulse along the normal if the bodies
/// are approaching, then separate any remaining interpenetration
/// proportionally to inverse masses.
///
/// Gracefully ignores contacts whose bodies have since been removed.
pub fn resolve(world: &mut World, contact: &Contact) {
    let (inv_a, vel_a, rest_a) = match world.body(contact.a) {
        Some(b) => (b.inv_mass(), b.velocity, b.material.restitution),
        None => return,
    };
    let (inv_b, vel_b, rest_b) = match world.body(contact.b) {
        Some(b) => (b.inv_mass(), b.velocity, b.material.restitution),
        None => return,
    };

    let inv_sum = inv_a + inv_b;
    if inv_sum == 0.0 {
        return;
    }

    let normal = contact.normal;
    let closing = (vel_b - vel_a).dot(normal);

    // Impulse only when approaching; separating pairs keep their velocity.
    if closing < 0.0 {
        let restitution = rest_a.min(rest_b);
        let j = -(1.0 + restitution) * closing / inv_sum;
        let impulse = normal * j;
        if let Some(body) = world.body_mut(contact.a) {
            body.velocity -= impulse * inv_a;
        }
        if let Some(body) = world.body_mut(contact.b) {
            body.velocity += impulse * inv_b;
        }
    }

    // Positional correction, independent of approach: a resting overlap
    // must still be separated so nothing sinks into a rail.
    let penetration = (contact.depth - CORRECTION_SLOP).max(0.0);
    if penetration > 0.0 {
        let correction = normal * (penetration / inv_sum * CORRECTION_PERCENT);
        if let Some(body) = world.body_mut(contact.a) {
            body.position -= correction * inv_a;
        }
        if let Some(body) = world.body_mut(contact.b) {
            body.position += correction * inv_b;
        }
    }
}

/// Resolve a batch of contacts in their (already deterministic) order.
pub fn resolve_all(world: &mut World, contacts: &[Contact]) {
    for contact in contacts {
        resolve(world, contact);
    }
}
