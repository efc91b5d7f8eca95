use anyhow::Result;
use std::env::var;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Environment variable that switches console logs to JSON lines.
pub const LOG_JSON_ENV: &str = "SERVICIUDAD_LOG_JSON";

fn json_enabled(value: Option<&str>) -> bool {
    value.is_some_and(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

/// Initialize console logging.
/// Logs go to stderr so rendered results on stdout stay clean.
///
/// # Errors
///
/// Returns an error if the filter directives or the subscriber cannot be installed
pub fn init(verbosity_level: Option<Level>) -> Result<()> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);

    let filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("reqwest=warn".parse()?);

    if json_enabled(var(LOG_JSON_ENV).ok().as_deref()) {
        let fmt_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(false)
            .with_writer(std::io::stderr);

        let subscriber = Registry::default().with(fmt_layer).with(filter);
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let fmt_layer = fmt::layer()
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_target(false)
            .with_writer(std::io::stderr);

        let subscriber = Registry::default().with(fmt_layer).with(filter);
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_enabled() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(json_enabled(Some(value)), "{value}");
        }
        for value in ["", "0", "false", "no", "json"] {
            assert!(!json_enabled(Some(value)), "{value}");
        }
        assert!(!json_enabled(None));
    }
}
