//! Tracing setup for the command-line binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a filter directive that overrides `-v`
pub const LOG_ENV: &str = "EXPENSE_CLI_LOG";

static TRACING_INIT: Once = Once::new();

/// Filter directive for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "expense_cli=warn",
        1 => "expense_cli=info",
        _ => "expense_cli=debug",
    }
}

/// Install the global subscriber, writing to stderr
///
/// Only the first call has any effect.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "expense_cli=warn");
        assert_eq!(default_directive(1), "expense_cli=info");
        assert_eq!(default_directive(5), "expense_cli=debug");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_tracing(0);
        init_tracing(2);
    }
}
