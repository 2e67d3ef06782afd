use std::path::PathBuf;

use itertools::Itertools;
use slipstream_core::prelude::{MeasureSetCatalog, ScenarioRegistry};

use crate::config::{Browser, RunConfiguration, RunScenario, NEW_TAB_SLOT};
use crate::error::ParseError;
use crate::validate::validate;
use crate::workload::WorkloadCatalog;

/// Every flag keyword starts with this character; list-valued flags stop
/// consuming values at the next token that does.
const FLAG_PREFIX: char = '-';

/// Browser value that expands to the full supported set.
const ALL_BROWSERS: &str = "all";

/// Separator for the display name built from selected scenario names.
const DISPLAY_NAME_SEPARATOR: &str = "-";

/// Cursor over the raw argument tokens with the single token of lookahead the
/// flag grammar needs.
struct Tokens {
    tokens: Vec<String>,
    pos: usize,
}

impl Tokens {
    fn new(tokens: Vec<String>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn next_token(&mut self) -> Option<String> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn peek(&self) -> Option<&str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    /// Consume values up to the next flag token or the end of the input.
    fn take_values(&mut self) -> Vec<String> {
        let mut values = Vec::new();
        while let Some(token) = self.peek() {
            if token.starts_with(FLAG_PREFIX) {
                break;
            }
            values.push(token.to_string());
            self.pos += 1;
        }
        values
    }
}

/// Interprets the harness command line against the frozen catalogs.
///
/// Parsing is a single left-to-right scan. Each flag mutates the in-progress
/// configuration before the scan advances, and the first invalid token aborts
/// the whole parse: callers receive either a complete, validated
/// [RunConfiguration] or a single [ParseError].
pub struct ArgumentParser<'a> {
    scenarios: &'a ScenarioRegistry,
    workloads: &'a WorkloadCatalog,
    measure_sets: &'a MeasureSetCatalog,
}

impl<'a> ArgumentParser<'a> {
    pub fn new(
        scenarios: &'a ScenarioRegistry,
        workloads: &'a WorkloadCatalog,
        measure_sets: &'a MeasureSetCatalog,
    ) -> Self {
        Self {
            scenarios,
            workloads,
            measure_sets,
        }
    }

    /// Parse raw argument tokens into a validated [RunConfiguration].
    ///
    /// Flag keywords are matched case-insensitively and every flag has a long
    /// form and a short alias. Values are consumed according to each flag's
    /// arity; a list-valued flag with no following value is rejected.
    pub fn parse<I, S>(&self, args: I) -> Result<RunConfiguration, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = Tokens::new(args.into_iter().map(Into::into).collect());
        let mut config = RunConfiguration::default();
        let mut display_segments: Vec<String> = Vec::new();

        while let Some(token) = tokens.next_token() {
            match token.to_ascii_lowercase().as_str() {
                "-browser" | "-b" => {
                    self.select_browsers(&mut tokens, &mut config, &token)?;
                }
                "-scenario" | "-s" => {
                    self.select_scenarios(&mut tokens, &mut config, &mut display_segments, &token)?;
                }
                "-workload" | "-w" => {
                    let name = require_value(&mut tokens, &token)?;
                    let entries = self.workloads.resolve(&name, self.scenarios)?;
                    log::debug!("Expanded workload [{}] into {} scenarios", name, entries.len());
                    config.run_list.extend(entries);
                }
                "-iterations" | "-i" => {
                    config.iterations = parse_count(&mut tokens, &token)?;
                }
                "-attempts" | "-a" => {
                    config.max_attempts = parse_count(&mut tokens, &token)?;
                }
                "-tracecontrolled" | "-tc" => {
                    let raw = require_value(&mut tokens, &token)?;
                    config.trace_output = Some(prepare_trace_dir(raw)?);
                }
                "-measureset" | "-ms" => {
                    self.select_measure_sets(&mut tokens, &mut config, &token)?;
                }
                "-warmup" => {
                    config.warmup = true;
                }
                "-notimeout" => {
                    config.no_timeout = true;
                }
                "-noprocessing" | "-np" => {
                    config.post_processing = false;
                }
                "-profile" | "-p" => {
                    let raw = require_value(&mut tokens, &token)?;
                    config.profile_dir = Some(existing_dir(raw)?);
                }
                "-credentialpath" | "-cp" => {
                    config.credential_path = PathBuf::from(require_value(&mut tokens, &token)?);
                }
                _ => {
                    return Err(ParseError::UnrecognizedArgument { token });
                }
            }
        }

        config.display_name = display_segments.iter().join(DISPLAY_NAME_SEPARATOR);

        validate(&config)?;

        Ok(config)
    }

    /// Consume browser values for one `-browser` invocation.
    ///
    /// The special value `all` selects the full supported set in canonical
    /// order and ends processing of this invocation's remaining values.
    /// Repeated browsers keep their first-seen position.
    fn select_browsers(
        &self,
        tokens: &mut Tokens,
        config: &mut RunConfiguration,
        flag: &str,
    ) -> Result<(), ParseError> {
        let values = require_values(tokens, flag)?;

        for value in &values {
            if value.eq_ignore_ascii_case(ALL_BROWSERS) {
                config.browsers = Browser::ALL.to_vec();
                break;
            }

            let browser =
                Browser::from_name(value).ok_or_else(|| ParseError::UnsupportedBrowser {
                    name: value.clone(),
                })?;
            if !config.browsers.contains(&browser) {
                config.browsers.push(browser);
            }
        }

        Ok(())
    }

    /// Consume scenario names for one `-scenario` invocation, appending each
    /// resolved scenario to the run list and its name to the display name.
    fn select_scenarios(
        &self,
        tokens: &mut Tokens,
        config: &mut RunConfiguration,
        display_segments: &mut Vec<String>,
        flag: &str,
    ) -> Result<(), ParseError> {
        let values = require_values(tokens, flag)?;

        for name in values {
            let descriptor = self.scenarios.lookup(&name)?;
            config.run_list.push(RunScenario {
                scenario_name: descriptor.name().to_string(),
                tab: NEW_TAB_SLOT.to_string(),
                duration_s: descriptor.default_duration_s(),
                behaviour: descriptor.behaviour(),
            });
            display_segments.push(name);
        }

        Ok(())
    }

    /// Consume measure-set names for one `-measureset` invocation. Repeats
    /// keep their first-seen position.
    fn select_measure_sets(
        &self,
        tokens: &mut Tokens,
        config: &mut RunConfiguration,
        flag: &str,
    ) -> Result<(), ParseError> {
        let values = require_values(tokens, flag)?;

        for name in values {
            let set = self
                .measure_sets
                .lookup(&name)
                .ok_or_else(|| ParseError::UnknownMeasureSet { name })?;
            if !config.measure_sets.iter().any(|s| s.name() == set.name()) {
                config.measure_sets.push(set.clone());
            }
        }

        Ok(())
    }
}

/// Consume exactly one value for a single-value flag.
fn require_value(tokens: &mut Tokens, flag: &str) -> Result<String, ParseError> {
    tokens.next_token().ok_or_else(|| ParseError::MissingValue {
        flag: flag.to_string(),
    })
}

/// Consume one or more values for a list-valued flag.
fn require_values(tokens: &mut Tokens, flag: &str) -> Result<Vec<String>, ParseError> {
    let values = tokens.take_values();
    if values.is_empty() {
        return Err(ParseError::MissingValue {
            flag: flag.to_string(),
        });
    }
    Ok(values)
}

/// Parse a single-value flag's value as a count of at least one.
fn parse_count(tokens: &mut Tokens, flag: &str) -> Result<u32, ParseError> {
    let value = require_value(tokens, flag)?;
    match value.parse::<u32>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(ParseError::InvalidNumber {
            flag: flag.to_string(),
            value,
        }),
    }
}

/// Create the trace output directory if it does not exist and return its
/// absolute path.
fn prepare_trace_dir(raw: String) -> Result<PathBuf, ParseError> {
    let path = PathBuf::from(raw);
    if !path.exists() {
        std::fs::create_dir_all(&path).map_err(|source| ParseError::Io {
            path: path.clone(),
            source,
        })?;
    }

    path.canonicalize().map_err(|source| ParseError::Io {
        path: path.clone(),
        source,
    })
}

/// Require an already-existing directory, as for `-profile`.
fn existing_dir(raw: String) -> Result<PathBuf, ParseError> {
    let path = PathBuf::from(raw);
    if !path.is_dir() {
        return Err(ParseError::InvalidPath { path });
    }
    Ok(path)
}
