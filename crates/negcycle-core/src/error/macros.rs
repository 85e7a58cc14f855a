//! Error macros for negcycle

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::NegCycleError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a graph whose shape does not match its node list
#[macro_export]
macro_rules! bail_malformed {
    ($($arg:tt)*) => {
        return Err($crate::error::NegCycleError::MalformedGraph {
            reason: format!($($arg)*),
        })
    };
}
