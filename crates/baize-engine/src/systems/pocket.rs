use glam::Vec2;
use log::debug;

use crate::api::types::BodyId;
use crate::core::body::BodyCategory;
use crate::core::world::World;

/// A pocket outcome, emitted synchronously once per detection for the
/// external scoring collaborator.
///
/// The cue ball gets its own variant: it is respotted, not removed, so the
/// consumer must not treat it like a lost object ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    BallPocketed { ball: BodyId, pocket: BodyId },
    CueBallPocketed { pocket: BodyId },
}

/// Capture rule: a ball drops once its center is inside a pocket's capture
/// radius — the pocket radius minus a margin, so a grazing ball stays up.
///
/// Object balls leave the world (InPlay -> Pocketed, terminal). The cue
/// ball is respotted at the D-zone spot with velocity zeroed
/// (InPlay -> Pocketed -> Respotted -> InPlay).
pub struct PocketCaptureRule {
    pockets: Vec<BodyId>,
    capture_margin: f32,
    cue_respot: Vec2,
}

impl PocketCaptureRule {
    pub fn new(pockets: Vec<BodyId>, capture_margin: f32, cue_respot: Vec2) -> Self {
        Self {
            pockets,
            capture_margin,
            cue_respot,
        }
    }

    /// Run the capture check, mutating the world and appending one event
    /// per captured ball. Called after collision resolution each step.
    pub fn apply(&self, world: &mut World, events: &mut Vec<TableEvent>) {
        // Collect first: captures mutate the body set.
        let mut captured: Vec<(BodyId, BodyId, BodyCategory)> = Vec::new();
        for &pocket_id in &self.pockets {
            let (center, capture_radius) = match world.body(pocket_id) {
                Some(pocket) => {
                    let radius = pocket
                        .radius()
                        .expect("pocket sensors are always circular");
                    (pocket.position, radius - self.capture_margin)
                }
                None => continue,
            };
            for body in world.bodies() {
                if !body.category.is_ball() {
                    continue;
                }
                if captured.iter().any(|(ball, _, _)| *ball == body.id) {
                    continue;
                }
                if (body.position - center).length() < capture_radius {
                    captured.push((body.id, pocket_id, body.category));
                }
            }
        }

        for (ball, pocket, category) in captured {
            match category {
                BodyCategory::CueBall => {
                    if let Some(body) = world.body_mut(ball) {
                        body.position = self.cue_respot;
                        body.velocity = Vec2::ZERO;
                    }
                    debug!("cue ball pocketed by {:?}, respotted", pocket);
                    events.push(TableEvent::CueBallPocketed { pocket });
                }
                BodyCategory::ObjectBall => {
                    world.remove_body(ball);
                    debug!("ball {:?} pocketed by {:?}", ball, pocket);
                    events.push(TableEvent::BallPocketed { ball, pocket });
                }
                _ => unreachable!("only balls pass the category filter"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::body::{BodyDesc, Shape};

    const POCKET_RADIUS: f32 = 16.0;
    const BALL_RADIUS: f32 = 11.0;
    const MARGIN: f32 = 3.0;

    struct Fixture {
        world: World,
        rule: PocketCaptureRule,
        pocket: BodyId,
    }

    fn fixture() -> Fixture {
        let mut world = World::new();
        let pocket = world.add_body(
            &BodyDesc::fixed(
                Shape::Circle {
                    radius: POCKET_RADIUS,
                },
                BodyCategory::PocketSensor,
            )
            .with_position(Vec2::new(100.0, 100.0)),
        );
        let rule = PocketCaptureRule::new(vec![pocket], MARGIN, Vec2::new(300.0, 300.0));
        Fixture {
            world,
            rule,
            pocket,
        }
    }

    fn ball_at(world: &mut World, category: BodyCategory, pos: Vec2) -> BodyId {
        world.add_body(
            &BodyDesc::dynamic(
                Shape::Circle {
                    radius: BALL_RADIUS,
                },
                category,
            )
            .with_position(pos)
            .with_velocity(Vec2::new(5.0, 0.0)),
        )
    }

    #[test]
    fn ball_at_pocket_center_is_removed() {
        let mut f = fixture();
        let ball = ball_at(&mut f.world, BodyCategory::ObjectBall, Vec2::new(100.0, 100.0));
        let mut events = Vec::new();
        f.rule.apply(&mut f.world, &mut events);
        assert!(f.world.body(ball).is_none(), "pocketed ball must leave the world");
        assert_eq!(
            events,
            vec![TableEvent::BallPocketed {
                ball,
                pocket: f.pocket
            }]
        );
    }

    #[test]
    fn grazing_ball_stays_in_play() {
        let mut f = fixture();
        // Just outside the capture radius: pocket edge, not pocket heart.
        let dist = POCKET_RADIUS - MARGIN + 0.5;
        let ball = ball_at(
            &mut f.world,
            BodyCategory::ObjectBall,
            Vec2::new(100.0 + dist, 100.0),
        );
        let mut events = Vec::new();
        f.rule.apply(&mut f.world, &mut events);
        assert!(f.world.body(ball).is_some());
        assert!(events.is_empty());
    }

    #[test]
    fn cue_ball_is_respotted_not_removed() {
        let mut f = fixture();
        let cue = ball_at(&mut f.world, BodyCategory::CueBall, Vec2::new(101.0, 99.0));
        let count_before = f.world.body_count();
        let mut events = Vec::new();
        f.rule.apply(&mut f.world, &mut events);

        assert_eq!(events, vec![TableEvent::CueBallPocketed { pocket: f.pocket }]);
        assert_eq!(f.world.body_count(), count_before);
        let body = f.world.body(cue).unwrap();
        assert_eq!(body.position, Vec2::new(300.0, 300.0));
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn non_ball_bodies_are_never_captured() {
        let mut f = fixture();
        let rail = f.world.add_body(
            &BodyDesc::fixed(
                Shape::Rect {
                    half_width: 5.0,
                    half_height: 5.0,
                },
                BodyCategory::Rail,
            )
            .with_position(Vec2::new(100.0, 100.0)),
        );
        let mut events = Vec::new();
        f.rule.apply(&mut f.world, &mut events);
        assert!(f.world.body(rail).is_some());
        assert!(events.is_empty());
    }

    #[test]
    fn one_ball_is_captured_once_even_near_two_pockets() {
        let mut world = World::new();
        let pocket_desc = BodyDesc::fixed(
            Shape::Circle {
                radius: POCKET_RADIUS,
            },
            BodyCategory::PocketSensor,
        );
        let p1 = world.add_body(&pocket_desc.clone().with_position(Vec2::new(100.0, 100.0)));
        let p2 = world.add_body(&pocket_desc.with_position(Vec2::new(102.0, 100.0)));
        let rule = PocketCaptureRule::new(vec![p1, p2], MARGIN, Vec2::ZERO);
        let ball = ball_at(&mut world, BodyCategory::ObjectBall, Vec2::new(101.0, 100.0));

        let mut events = Vec::new();
        rule.apply(&mut world, &mut events);
        assert!(world.body(ball).is_none());
        assert_eq!(events.len(), 1, "a ball drops into exactly one pocket");
    }
}
