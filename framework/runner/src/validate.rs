use crate::config::RunConfiguration;
use crate::error::ParseError;

/// Cross-flag consistency rules, applied once the full token stream has been
/// consumed.
///
/// Trace capture and a non-empty measure-set selection must be present
/// together or not at all.
pub(crate) fn validate(config: &RunConfiguration) -> Result<(), ParseError> {
    match (config.trace_capture_enabled(), config.measure_sets.is_empty()) {
        (true, true) => Err(ParseError::ValidationConflict {
            reason: "trace capture is enabled but no measure sets are selected".to_string(),
        }),
        (false, false) => Err(ParseError::ValidationConflict {
            reason: "measure sets are selected but trace capture is not enabled".to_string(),
        }),
        _ => Ok(()),
    }
}
