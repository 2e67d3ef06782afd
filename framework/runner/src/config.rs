use std::path::PathBuf;

use slipstream_core::prelude::{BehaviourHandle, MeasureSetDescriptor};

/// Credential file used when `-credentialpath` is not given.
pub const DEFAULT_CREDENTIAL_PATH: &str = "credentials.json";

/// Tab slot for scenarios that open in a fresh tab.
pub(crate) const NEW_TAB_SLOT: &str = "new";

/// Browsers the harness can drive.
///
/// The declaration order is the canonical order, which is also the order the
/// special `all` value expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Edge,
    Firefox,
    Opera,
}

impl Browser {
    /// The full supported set, in canonical order.
    pub const ALL: [Browser; 4] = [
        Browser::Chrome,
        Browser::Edge,
        Browser::Firefox,
        Browser::Opera,
    ];

    /// Match a browser name case-insensitively against the supported set.
    pub fn from_name(name: &str) -> Option<Browser> {
        match name.to_ascii_lowercase().as_str() {
            "chrome" => Some(Browser::Chrome),
            "edge" => Some(Browser::Edge),
            "firefox" => Some(Browser::Firefox),
            "opera" => Some(Browser::Opera),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Edge => "edge",
            Browser::Firefox => "firefox",
            Browser::Opera => "opera",
        }
    }
}

impl std::fmt::Display for Browser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved, execution-ready entry in the run list.
#[derive(Debug, Clone, PartialEq)]
pub struct RunScenario {
    /// Name of the scenario being run.
    pub scenario_name: String,
    /// Tab slot the scenario runs in, "new" or a numbered tab.
    pub tab: String,
    /// Effective duration in seconds, after any workload override.
    pub duration_s: u64,
    /// Step sequence handle for the scenario executor.
    pub behaviour: BehaviourHandle,
}

/// The fully validated output of argument parsing.
///
/// The run list preserves the order in which `-scenario` and `-workload`
/// invocations appeared, including duplicates. Everything else is scalar
/// configuration handed to the execution collaborators.
#[derive(Debug, Clone)]
pub struct RunConfiguration {
    /// Scenarios to execute, in order.
    pub run_list: Vec<RunScenario>,
    /// Browsers to exercise, in first-seen order.
    pub browsers: Vec<Browser>,
    /// Measure sets to capture, first-seen by name.
    pub measure_sets: Vec<MeasureSetDescriptor>,
    /// Number of run iterations.
    pub iterations: u32,
    /// Maximum attempts per iteration before giving up.
    pub max_attempts: u32,
    /// Trace capture output directory. Present exactly when trace capture is
    /// enabled.
    pub trace_output: Option<PathBuf>,
    /// Browser profile directory to launch with.
    pub profile_dir: Option<PathBuf>,
    /// Run a warmup pass before measuring.
    pub warmup: bool,
    /// Disable the execution timeout.
    pub no_timeout: bool,
    /// Run post-processing after the scenarios complete.
    pub post_processing: bool,
    /// Path to the credential file for scenarios that log in.
    pub credential_path: PathBuf,
    /// Selected scenario names joined for reporting.
    pub display_name: String,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            run_list: Vec::new(),
            browsers: Vec::new(),
            measure_sets: Vec::new(),
            iterations: 1,
            max_attempts: 3,
            trace_output: None,
            profile_dir: None,
            warmup: false,
            no_timeout: false,
            post_processing: true,
            credential_path: PathBuf::from(DEFAULT_CREDENTIAL_PATH),
            display_name: String::new(),
        }
    }
}

impl RunConfiguration {
    pub fn trace_capture_enabled(&self) -> bool {
        self.trace_output.is_some()
    }
}
