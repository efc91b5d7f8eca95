//! Interactive portal on a line-oriented terminal. Every input line counts as a
//! keystroke for the inactivity countdown.

use crate::serviciudad::{
    navigator::PageHost,
    render::{render, render_error, Format},
    route::Page,
    ApiConfig, InquiryClient, MemoryStorage, SessionGate,
};
use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

const HELP: &str =
    "Ingrese un número de identificación de 10 dígitos, 'nueva' para limpiar o 'salir' para cerrar sesión.";

#[derive(Debug)]
pub struct Args {
    pub config: ApiConfig,
    pub format: Format,
}

/// Handle the `session` action
/// # Errors
/// Returns an error if stdin or stdout fail.
pub async fn execute(args: Args) -> Result<()> {
    let input = BufReader::new(io::stdin());
    let mut out = std::io::stdout();
    run(args, input, &mut out).await
}

pub(crate) async fn run<R, W>(args: Args, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Args { config, format } = args;
    let mut lines = input.lines();

    let mut gate = SessionGate::new(config.clone(), MemoryStorage::new(), PageHost::new(Page::Login))
        .context("failed to build HTTP client")?;

    gate.check_session(Page::Login);
    writeln!(out, "{}", gate.probe().await.message(&config.base_url))?;

    loop {
        write!(out, "Usuario: ")?;
        out.flush()?;
        let Some(username) = lines.next_line().await? else {
            return Ok(());
        };

        write!(out, "Contraseña: ")?;
        out.flush()?;
        let Some(password) = lines.next_line().await? else {
            return Ok(());
        };

        match gate.login(&username, &password).await {
            Ok(_) => break,
            Err(err) => writeln!(out, "{err}")?,
        }
    }

    let page = gate.navigator().current();
    if !gate.check_session(page) {
        return Ok(());
    }
    writeln!(out, "{}", gate.probe().await.message(&config.base_url))?;
    let Some(mut timer) = gate.arm_inactivity() else {
        return Ok(());
    };

    let mut client = InquiryClient::new(config).context("failed to build HTTP client")?;
    writeln!(out, "{HELP}")?;

    loop {
        tokio::select! {
            () = timer.expired() => {
                gate.expire();
                for notice in gate.navigator_mut().notices.drain(..) {
                    writeln!(out, "{notice}")?;
                }
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    gate.logout();
                    break;
                };
                timer.record("keydown");

                match line.trim() {
                    "" => {}
                    "salir" => {
                        gate.logout();
                        writeln!(out, "Sesión cerrada.")?;
                        break;
                    }
                    "nueva" => {
                        client.new_inquiry();
                        writeln!(out, "{HELP}")?;
                    }
                    raw => {
                        let value = client.input(raw).to_string();
                        debug!("inquiry for {}", value);
                        match client.submit(gate.session_context()).await {
                            Ok(summary) => writeln!(out, "{}", render(summary, format))?,
                            Err(err) => writeln!(out, "{}", render_error(&err, format))?,
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
