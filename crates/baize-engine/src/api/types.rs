/// Unique identifier for a body in the world.
///
/// Stable for the body's lifetime; never reused within one `Table` session.
/// Components other than `World` hold ids, never body references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);
