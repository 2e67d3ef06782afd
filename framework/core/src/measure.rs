use std::collections::HashMap;

/// A named collection of performance metrics to capture during a
/// trace-controlled run.
///
/// The trace profile is the recorder's own identifier for what to record.
/// Nothing in the configuration layer interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasureSetDescriptor {
    name: &'static str,
    trace_profile: &'static str,
}

impl MeasureSetDescriptor {
    pub const fn new(name: &'static str, trace_profile: &'static str) -> Self {
        Self {
            name,
            trace_profile,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn trace_profile(&self) -> &'static str {
        self.trace_profile
    }
}

/// The measure sets the measurement collaborator makes available.
///
/// Supplied pre-built and treated as read-only; the parser only resolves
/// names against it.
#[derive(Debug, Default)]
pub struct MeasureSetCatalog {
    sets: HashMap<&'static str, MeasureSetDescriptor>,
}

impl MeasureSetCatalog {
    pub fn new(sets: impl IntoIterator<Item = MeasureSetDescriptor>) -> Self {
        Self {
            sets: sets.into_iter().map(|set| (set.name(), set)).collect(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&MeasureSetDescriptor> {
        self.sets.get(name)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// The measure sets shipped with the harness.
pub fn default_catalog() -> MeasureSetCatalog {
    MeasureSetCatalog::new([
        MeasureSetDescriptor::new("cpu_usage", "cpu-sampled-profile"),
        MeasureSetDescriptor::new("disk_usage", "disk-io-profile"),
        MeasureSetDescriptor::new("memory_usage", "memory-commit-profile"),
        MeasureSetDescriptor::new("network_usage", "network-packet-profile"),
        MeasureSetDescriptor::new("energy", "energy-estimation-profile"),
    ])
}
