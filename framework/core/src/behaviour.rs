/// Opaque reference to a scenario's interaction steps.
///
/// The step sequences themselves are owned by the scenario executor; the
/// configuration layer only selects a handle and carries it through to the
/// executor unopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviourHandle(&'static str);

impl BehaviourHandle {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Key into the executor's step library.
    pub fn id(&self) -> &'static str {
        self.0
    }
}
