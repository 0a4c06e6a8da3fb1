use log::info;

use crate::api::types::BodyId;
use crate::core::body::{BodyCategory, BodyDesc, Material, Shape};
use crate::core::collision;
use crate::core::time::FixedTimestep;
use crate::core::world::World;
use crate::input::cue::CueController;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::snapshot::Snapshot;
use crate::systems::pocket::{PocketCaptureRule, TableEvent};
use crate::systems::rack;
use crate::table::config::{ConfigError, TableConfig};
use crate::table::layout::TableLayout;

/// The assembled table: world, static geometry, capture rule, cue input and
/// the fixed-timestep driver, behind one handle the host ticks each frame.
pub struct Table {
    layout: TableLayout,
    world: World,
    capture: PocketCaptureRule,
    cue: CueController,
    input: InputQueue,
    events: Vec<TableEvent>,
    timestep: FixedTimestep,
    cue_ball: BodyId,
}

impl Table {
    /// Validate the configuration and set up the full table: four rails,
    /// six pockets, the racked object balls and the cue ball on its spot.
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let layout = TableLayout::generate(
            config.table_width,
            config.world_width,
            config.world_height,
        );
        let mut world = World::new();

        for rail in &layout.rails {
            world.add_body(
                &BodyDesc::fixed(
                    Shape::Rect {
                        half_width: rail.half_width,
                        half_height: rail.half_height,
                    },
                    BodyCategory::Rail,
                )
                .with_position(rail.position),
            );
        }

        let mut pockets = Vec::with_capacity(layout.pockets.len());
        for pocket in &layout.pockets {
            pockets.push(world.add_body(
                &BodyDesc::fixed(
                    Shape::Circle {
                        radius: pocket.radius,
                    },
                    BodyCategory::PocketSensor,
                )
                .with_position(pocket.position),
            ));
        }

        let material = Material {
            restitution: config.ball_restitution,
            friction: config.ball_friction,
        };
        rack::spawn_rack(&mut world, &layout, material, config.rack_seed);

        let cue_ball = world.add_body(
            &BodyDesc::dynamic(
                Shape::Circle {
                    radius: layout.ball_radius,
                },
                BodyCategory::CueBall,
            )
            .with_position(layout.cue_start)
            .with_material(material),
        );

        let capture = PocketCaptureRule::new(
            pockets,
            config.capture_margin_ratio * layout.ball_radius,
            layout.cue_start,
        );

        info!(
            "table up: {}x{}, {} bodies",
            layout.table_width,
            layout.table_height,
            world.body_count()
        );

        Ok(Self {
            layout,
            world,
            capture,
            cue: CueController::new(config.strike_strength),
            input: InputQueue::new(),
            events: Vec::new(),
            timestep: FixedTimestep::new(config.fixed_dt),
            cue_ball,
        })
    }

    /// Queue a pointer event from the host.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Advance the simulation by one frame of wall-clock time. Runs as many
    /// fixed steps as the accumulated frame time covers; events from those
    /// steps replace the previous frame's batch.
    pub fn tick(&mut self, frame_dt: f32) {
        self.events.clear();

        let drained = self.input.drain();
        self.cue.update(&mut self.world, self.cue_ball, &drained);

        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.step_once();
        }
    }

    /// One fixed step: integrate, collide, resolve in deterministic order,
    /// then run pocket capture. Exposed for replays and tests.
    pub fn step_once(&mut self) {
        self.world.step(self.timestep.dt());
        let contacts = collision::find_contacts(&self.world);
        collision::resolve_all(&mut self.world, &contacts);
        self.capture.apply(&mut self.world, &mut self.events);
    }

    /// Events emitted during the most recent `tick`.
    pub fn events(&self) -> &[TableEvent] {
        &self.events
    }

    /// Capture the current render state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.world)
    }

    pub fn cue_ball(&self) -> BodyId {
        self.cue_ball
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
