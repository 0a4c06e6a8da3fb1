use glam::Vec2;

use crate::api::types::BodyId;
use crate::core::world::World;
use crate::input::queue::InputEvent;

/// Drag-to-strike adapter for the cue ball.
///
/// A press that lands on the cue ball arms a drag; releasing converts the
/// drag vector (press point minus release point, slingshot style) into an
/// impulse scaled by `strike_strength`. The impulse is applied
/// unconditionally — validating input is the host's job, not the core's.
pub struct CueController {
    strike_strength: f32,
    drag_origin: Option<Vec2>,
}

impl CueController {
    pub fn new(strike_strength: f32) -> Self {
        Self {
            strike_strength,
            drag_origin: None,
        }
    }

    /// Whether a drag is currently armed.
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Feed one tick's worth of pointer events, striking the cue ball on a
    /// completed drag. Unknown or pocket-respotted cue ids are tolerated:
    /// the impulse just lands on whatever body currently owns the id.
    pub fn update(&mut self, world: &mut World, cue_ball: BodyId, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    let press = Vec2::new(x, y);
                    let on_ball = world
                        .body(cue_ball)
                        .and_then(|b| b.radius().map(|r| (b.position - press).length() <= r))
                        .unwrap_or(false);
                    if on_ball {
                        self.drag_origin = Some(press);
                    }
                }
                InputEvent::PointerMove { .. } => {
                    // Only the press and release points matter for the strike.
                }
                InputEvent::PointerUp { x, y } => {
                    if let Some(origin) = self.drag_origin.take() {
                        let impulse = (origin - Vec2::new(x, y)) * self.strike_strength;
                        world.apply_impulse(cue_ball, impulse);
                    }
                }
            }
        }
    }
}
