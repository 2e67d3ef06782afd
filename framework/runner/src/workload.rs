use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use slipstream_core::prelude::ScenarioRegistry;

use crate::config::{RunScenario, NEW_TAB_SLOT};
use crate::error::{ParseError, WorkloadSourceError};

/// One scenario reference inside a workload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkloadEntry {
    /// Name of the scenario, which must exist in the scenario registry.
    pub scenario: String,
    /// Tab slot to run the scenario in.
    #[serde(default = "default_tab")]
    pub tab: String,
    /// Duration override in seconds. Zero means "use the registry default".
    #[serde(default)]
    pub duration_s: u64,
}

fn default_tab() -> String {
    NEW_TAB_SLOT.to_string()
}

/// A named, ordered bundle of scenario references.
///
/// Entry order is execution order.
#[derive(Debug, Clone, Deserialize)]
pub struct Workload {
    pub name: String,
    pub entries: Vec<WorkloadEntry>,
}

#[derive(Debug, Deserialize)]
struct WorkloadFile {
    workloads: Vec<Workload>,
}

/// Workload definitions loaded from an external source, keyed by name.
///
/// The source is treated as pre-validated once it deserializes; if a name
/// appears twice the later definition wins.
#[derive(Debug, Default)]
pub struct WorkloadCatalog {
    workloads: HashMap<String, Workload>,
}

impl WorkloadCatalog {
    /// Load workload definitions from a YAML file.
    ///
    /// Should be a YAML file with a `workloads` field containing a list of
    /// named workloads, each with an `entries` list of scenario references.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WorkloadSourceError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| WorkloadSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: WorkloadFile =
            serde_yaml::from_str(&raw).map_err(|source| WorkloadSourceError::Definition {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!(
            "Loaded {} workload definitions from {}",
            file.workloads.len(),
            path.display()
        );

        Ok(Self::from_workloads(file.workloads))
    }

    /// Build a catalog directly from already-loaded definitions.
    pub fn from_workloads(workloads: impl IntoIterator<Item = Workload>) -> Self {
        Self {
            workloads: workloads
                .into_iter()
                .map(|workload| (workload.name.clone(), workload))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Workload> {
        self.workloads.get(name)
    }

    /// Resolve a workload into execution-ready run entries, in the workload's
    /// own entry order.
    ///
    /// Each entry takes its override duration when one is set, otherwise the
    /// registry default for that scenario.
    pub fn resolve(
        &self,
        name: &str,
        registry: &ScenarioRegistry,
    ) -> Result<Vec<RunScenario>, ParseError> {
        let workload = self.get(name).ok_or_else(|| ParseError::UnknownWorkload {
            name: name.to_string(),
        })?;

        let mut entries = Vec::with_capacity(workload.entries.len());
        for entry in &workload.entries {
            let descriptor = registry.lookup(&entry.scenario)?;
            let duration_s = if entry.duration_s > 0 {
                entry.duration_s
            } else {
                descriptor.default_duration_s()
            };

            entries.push(RunScenario {
                scenario_name: descriptor.name().to_string(),
                tab: entry.tab.clone(),
                duration_s,
                behaviour: descriptor.behaviour(),
            });
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use slipstream_core::prelude::{BehaviourHandle, ScenarioDescriptor};
    use tempfile::NamedTempFile;

    use super::*;

    const DEFINITIONS: &str = r#"
workloads:
  - name: reading
    entries:
      - scenario: news
      - scenario: wikipedia
        tab: "1"
        duration_s: 90
"#;

    fn test_registry() -> ScenarioRegistry {
        let mut registry = ScenarioRegistry::new();
        registry
            .register(ScenarioDescriptor::new(
                "news",
                45,
                BehaviourHandle::new("headline_scroll"),
            ))
            .expect("failed to register scenario");
        registry
            .register(ScenarioDescriptor::new(
                "wikipedia",
                30,
                BehaviourHandle::new("article_read"),
            ))
            .expect("failed to register scenario");
        registry
    }

    fn write_definitions(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("failed to write definitions");
        file
    }

    #[test]
    fn test_should_load_and_resolve_workload() {
        let file = write_definitions(DEFINITIONS);
        let catalog = WorkloadCatalog::load(file.path()).expect("failed to load definitions");
        let registry = test_registry();

        let entries = catalog
            .resolve("reading", &registry)
            .expect("failed to resolve workload");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].scenario_name, "news");
        assert_eq!(entries[0].tab, "new");
        assert_eq!(entries[1].scenario_name, "wikipedia");
        assert_eq!(entries[1].tab, "1");
    }

    #[test]
    fn test_zero_override_uses_registry_default() {
        let file = write_definitions(DEFINITIONS);
        let catalog = WorkloadCatalog::load(file.path()).expect("failed to load definitions");
        let registry = test_registry();

        let entries = catalog
            .resolve("reading", &registry)
            .expect("failed to resolve workload");

        // `news` has no override, `wikipedia` overrides its 30s default.
        assert_eq!(entries[0].duration_s, 45);
        assert_eq!(entries[1].duration_s, 90);
    }

    #[test]
    fn test_should_fail_on_missing_source() {
        let result = WorkloadCatalog::load("/non/existent/workloads.yaml");
        assert!(matches!(result, Err(WorkloadSourceError::Io { .. })));
    }

    #[test]
    fn test_should_fail_on_malformed_source() {
        let file = write_definitions("workloads: [not, a, workload]");
        let result = WorkloadCatalog::load(file.path());
        assert!(matches!(result, Err(WorkloadSourceError::Definition { .. })));
    }

    #[test]
    fn test_should_fail_on_unknown_workload() {
        let catalog = WorkloadCatalog::default();
        let registry = test_registry();

        let result = catalog.resolve("doesnotexist", &registry);
        assert!(
            matches!(result, Err(ParseError::UnknownWorkload { name }) if name == "doesnotexist")
        );
    }

    #[test]
    fn test_should_fail_on_unknown_scenario_in_workload() {
        let catalog = WorkloadCatalog::from_workloads([Workload {
            name: "broken".to_string(),
            entries: vec![WorkloadEntry {
                scenario: "doesnotexist".to_string(),
                tab: NEW_TAB_SLOT.to_string(),
                duration_s: 0,
            }],
        }]);
        let registry = test_registry();

        let result = catalog.resolve("broken", &registry);
        assert!(matches!(result, Err(ParseError::UnknownScenario(_))));
    }
}
