pub mod api;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;
pub mod table;

// Re-export key types at crate root for convenience
pub use crate::api::table::Table;
pub use crate::api::types::BodyId;
pub use crate::core::body::{BodyCategory, BodyDesc, Material, RigidBody, Shape};
pub use crate::core::collision::{find_contacts, resolve, resolve_all, Contact};
pub use crate::core::time::{FixedTimestep, MAX_STEPS_PER_FRAME};
pub use crate::core::world::{World, MAX_STEP_DT, REST_EPSILON};
pub use crate::input::cue::CueController;
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::renderer::snapshot::{BodyInstance, BodyView, Snapshot};
pub use crate::systems::pocket::{PocketCaptureRule, TableEvent};
pub use crate::systems::rack::{spawn_rack, OBJECT_BALL_COUNT};
pub use crate::systems::rng::Rng;
pub use crate::table::config::{ConfigError, TableConfig};
pub use crate::table::layout::{
    PocketGeometry, RailGeometry, TableLayout, RAIL_HALF_THICKNESS,
};
