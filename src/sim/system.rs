use super::context::TickContext;

/// A pluggable simulation system that runs once per simulated year.
///
/// Object-safe so systems can be stored as `Box<dyn SimSystem>`.
pub trait SimSystem {
    fn name(&self) -> &str;
    fn tick(&mut self, ctx: &mut TickContext);
}
