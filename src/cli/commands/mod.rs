use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

fn format_arg() -> Arg {
    Arg::new("format")
        .short('f')
        .long("format")
        .help("Output format for results")
        .env("SERVICIUDAD_FORMAT")
        .default_value("text")
        .value_parser(["text", "html"])
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    Command::new("serviciudad")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("url")
                .long("url")
                .help("Backend base URL, example: http://localhost:8080")
                .env("SERVICIUDAD_URL")
                .global(true),
        )
        .arg(
            Arg::new("username")
                .long("username")
                .help("API username")
                .env("SERVICIUDAD_USERNAME")
                .global(true),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .help("API password")
                .env("SERVICIUDAD_PASSWORD")
                .hide_env_values(true)
                .global(true),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .help("Inquiry timeout in seconds (default: 10)")
                .env("SERVICIUDAD_TIMEOUT")
                .global(true)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("SERVICIUDAD_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(Command::new("health").about("Check connectivity with the backend"))
        .subcommand(
            Command::new("consultar")
                .about("Log in and query the consolidated debt of one client")
                .arg(
                    Arg::new("client-id")
                        .help("10-digit client identifier, example: 0001234567")
                        .value_name("CLIENT_ID")
                        .required(true),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("session")
                .about("Interactive session: log in, then one client id per line (nueva, salir)")
                .arg(format_arg()),
        )
}
