use crate::cli::actions::{health, inquiry, session, Action};
use crate::serviciudad::{config::Overrides, render::Format, ApiConfig};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

/// Defaults with whatever the command line (or its env fallbacks) overrides.
fn config(matches: &clap::ArgMatches) -> Result<ApiConfig> {
    let mut config = ApiConfig::default();

    config.apply(Overrides {
        base_url: matches.get_one::<String>("url").cloned(),
        username: matches.get_one::<String>("username").cloned(),
        password: matches
            .get_one::<String>("password")
            .map(|password| SecretString::from(password.clone())),
        inquiry_timeout: matches
            .get_one::<u64>("timeout")
            .map(|secs| Duration::from_secs(*secs)),
    });

    let url = Url::parse(&config.base_url).context("invalid SERVICIUDAD_URL")?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!("unsupported URL scheme: {}", url.scheme()));
    }

    Ok(config)
}

fn format(matches: &clap::ArgMatches) -> Result<Format> {
    let value = matches
        .get_one::<String>("format")
        .map_or("text", String::as_str);

    Format::parse(value).ok_or_else(|| anyhow!("unsupported format: {value}"))
}

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("health", sub_m)) => Ok(Action::Health(health::Args {
            config: config(sub_m)?,
        })),
        Some(("consultar", sub_m)) => Ok(Action::Inquiry(inquiry::Args {
            config: config(sub_m)?,
            client_id: sub_m
                .get_one::<String>("client-id")
                .cloned()
                .context("missing required argument: CLIENT_ID")?,
            format: format(sub_m)?,
        })),
        Some(("session", sub_m)) => Ok(Action::Session(session::Args {
            config: config(sub_m)?,
            format: format(sub_m)?,
        })),
        _ => Err(anyhow!("unknown subcommand")),
    }
}
