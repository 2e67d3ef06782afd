use std::collections::HashMap;

use crate::behaviour::BehaviourHandle;

/// A named browser interaction sequence with a default duration.
///
/// Descriptors are created once when the registry is built and never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct ScenarioDescriptor {
    name: &'static str,
    default_duration_s: u64,
    behaviour: BehaviourHandle,
}

impl ScenarioDescriptor {
    /// Create a new descriptor. The duration must be positive; it is the
    /// duration used when no workload override applies.
    pub const fn new(
        name: &'static str,
        default_duration_s: u64,
        behaviour: BehaviourHandle,
    ) -> Self {
        Self {
            name,
            default_duration_s,
            behaviour,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_duration_s(&self) -> u64 {
        self.default_duration_s
    }

    pub fn behaviour(&self) -> BehaviourHandle {
        self.behaviour
    }
}

#[derive(Debug, thiserror::Error)]
#[error("scenario [{name}] is already registered")]
pub struct DuplicateScenarioError {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown scenario: {name}")]
pub struct UnknownScenarioError {
    pub name: String,
}

/// The catalog of scenarios known to the harness.
///
/// Built synchronously before any argument parsing starts and read-only from
/// then on. Pass it by reference to whatever needs to resolve scenario names,
/// rather than keeping it in shared state.
#[derive(Debug, Default)]
pub struct ScenarioRegistry {
    scenarios: HashMap<&'static str, ScenarioDescriptor>,
}

impl ScenarioRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, keyed by its name.
    pub fn register(&mut self, descriptor: ScenarioDescriptor) -> Result<(), DuplicateScenarioError> {
        if self.scenarios.contains_key(descriptor.name()) {
            return Err(DuplicateScenarioError {
                name: descriptor.name().to_string(),
            });
        }

        self.scenarios.insert(descriptor.name(), descriptor);
        Ok(())
    }

    /// Look up a descriptor by scenario name.
    pub fn lookup(&self, name: &str) -> Result<&ScenarioDescriptor, UnknownScenarioError> {
        self.scenarios.get(name).ok_or_else(|| UnknownScenarioError {
            name: name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

/// Build the registry of scenarios shipped with the harness.
pub fn default_registry() -> Result<ScenarioRegistry, DuplicateScenarioError> {
    let mut registry = ScenarioRegistry::new();

    registry.register(ScenarioDescriptor::new(
        "blank",
        30,
        BehaviourHandle::new("idle"),
    ))?;
    registry.register(ScenarioDescriptor::new(
        "youtube",
        60,
        BehaviourHandle::new("watch_video"),
    ))?;
    registry.register(ScenarioDescriptor::new(
        "wikipedia",
        45,
        BehaviourHandle::new("article_read"),
    ))?;
    registry.register(ScenarioDescriptor::new(
        "news",
        45,
        BehaviourHandle::new("headline_scroll"),
    ))?;
    registry.register(ScenarioDescriptor::new(
        "webmail",
        60,
        BehaviourHandle::new("inbox_triage"),
    ))?;
    registry.register(ScenarioDescriptor::new(
        "maps",
        45,
        BehaviourHandle::new("route_search"),
    ))?;
    registry.register(ScenarioDescriptor::new(
        "shopping",
        45,
        BehaviourHandle::new("product_browse"),
    ))?;
    registry.register(ScenarioDescriptor::new(
        "social",
        45,
        BehaviourHandle::new("feed_scroll"),
    ))?;

    log::debug!("Registered {} scenarios", registry.len());

    Ok(registry)
}
