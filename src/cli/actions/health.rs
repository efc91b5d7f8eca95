use crate::{serviciudad::api::ApiClient, serviciudad::ApiConfig, GIT_COMMIT_HASH};
use anyhow::{bail, Context, Result};
use std::io::Write;

#[derive(Debug)]
pub struct Args {
    pub config: ApiConfig,
}

/// Probe the backend and print build metadata with the connectivity status.
/// # Errors
/// Returns an error when the backend is unreachable.
pub async fn execute(args: Args) -> Result<()> {
    let mut out = std::io::stdout();
    report(&args.config, &mut out).await
}

pub(crate) async fn report<W: Write>(config: &ApiConfig, out: &mut W) -> Result<()> {
    let api = ApiClient::new(&config.base_url).context("failed to build HTTP client")?;
    let connectivity = api.probe(config.probe_timeout).await;

    writeln!(
        out,
        "{} {} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        GIT_COMMIT_HASH
    )?;
    writeln!(out, "{}", connectivity.message(api.base_url()))?;

    if !connectivity.is_connected() {
        bail!("backend unreachable at {}", api.base_url());
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[tokio::test]
    async fn reports_connected_backend() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/actuator/health"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        report(&ApiConfig::with_base_url(&server.uri()), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("serviciudad "));
        assert!(text.contains("Servidor conectado"));
    }

    #[tokio::test]
    async fn unreachable_backend_fails() {
        let mut out = Vec::new();
        let result = report(&ApiConfig::with_base_url("http://127.0.0.1:1"), &mut out).await;

        assert!(result.is_err());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Servidor desconectado"));
    }
}
