use crate::serviciudad::{
    navigator::PageHost,
    render::{render, render_error, Format},
    route::Page,
    ApiConfig, InquiryClient, MemoryStorage, SessionGate,
};
use anyhow::{bail, Context, Result};
use secrecy::ExposeSecret;
use std::io::Write;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub config: ApiConfig,
    pub client_id: String,
    pub format: Format,
}

/// Handle the `consultar` action
/// # Errors
/// Returns an error if login fails or the inquiry does not produce a result.
pub async fn execute(args: Args) -> Result<()> {
    let mut out = std::io::stdout();
    consult(&args, &mut out).await
}

/// Walks the portal once: login page, login, main page, one inquiry.
pub(crate) async fn consult<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let config = args.config.clone();

    let mut gate = SessionGate::new(config.clone(), MemoryStorage::new(), PageHost::new(Page::Login))
        .context("failed to build HTTP client")?;

    gate.check_session(Page::Login);
    info!("{}", gate.probe().await.message(&config.base_url));

    gate.login(&config.username, config.password.expose_secret())
        .await
        .context("login failed")?;

    let page = gate.navigator().current();
    if !gate.check_session(page) {
        bail!("session was not established");
    }
    info!("{}", gate.probe().await.message(&config.base_url));

    let mut client = InquiryClient::new(config).context("failed to build HTTP client")?;

    match client.consult(gate.session_context(), &args.client_id).await {
        Ok(summary) => {
            writeln!(out, "{}", render(summary, args.format))?;
            Ok(())
        }
        Err(err) => {
            writeln!(out, "{}", render_error(&err, args.format))?;
            bail!("inquiry for {} failed", args.client_id)
        }
    }
}
