use negcycle_core::error::NegCycleError;
use negcycle_core::format::OutputFormat;
use negcycle_core::graph::StrategyKind;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse strategy name (aliases included) from string
pub fn parse_strategy(s: &str) -> std::result::Result<StrategyKind, String> {
    s.parse::<StrategyKind>().map_err(|e| e.to_string())
}

/// Parse a non-negative, finite tolerance
pub fn parse_tolerance(s: &str) -> std::result::Result<f64, String> {
    match s.parse::<f64>() {
        Ok(t) if t.is_finite() && t >= 0.0 => Ok(t),
        _ => Err(NegCycleError::invalid_value("tolerance", s).to_string()),
    }
}
