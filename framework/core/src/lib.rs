mod behaviour;
mod measure;
mod scenario;

pub mod prelude {
    pub use crate::behaviour::BehaviourHandle;
    pub use crate::measure::{default_catalog, MeasureSetCatalog, MeasureSetDescriptor};
    pub use crate::scenario::{
        default_registry, DuplicateScenarioError, ScenarioDescriptor, ScenarioRegistry,
        UnknownScenarioError,
    };
}
