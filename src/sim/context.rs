use rand::RngCore;

use crate::model::Republic;

/// Context passed to each system on every tick.
///
/// Bundled so fields can be added later without changing the `SimSystem`
/// trait signature.
pub struct TickContext<'a> {
    pub republic: &'a mut Republic,
    pub rng: &'a mut dyn RngCore,
}
