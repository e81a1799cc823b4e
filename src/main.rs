//! Thin command-line wrapper over the client facade.
//!
//! Parses credentials and one subcommand, forwards to [`Tado`] and prints the
//! response as pretty JSON. Exit codes: 0 success, 2 usage error, 1 API
//! failure.

use log::{error, info};
use serde::Serialize;

use tado_client::Tado;
use tado_client::config::Config;
use tado_client::error::TadoApiError;
use tado_client::models::ZoneId;

#[derive(Debug, PartialEq)]
enum CliCommand {
    GetMe,
    GetState { zone: ZoneId },
    GetStates,
    GetCapabilities { zone: ZoneId },
}

#[derive(Debug, PartialEq)]
struct CliOptions {
    email: String,
    password: String,
    command: CliCommand,
}

const USAGE: &str = "usage: tado [--email EMAIL] [--password PASSWORD] COMMAND
Credentials fall back to TADO_EMAIL / TADO_PASSWORD.

commands:
  get_me                      authenticated user profile
  get_state --zone ID         normalized state of one zone/room
  get_states                  raw state of all zones/rooms
  get_capabilities --zone ID  capabilities of one zone (pre-X homes only)";

fn parse_args(args: &[String], env: &Config) -> Result<CliOptions, String> {
    let mut email = env.email.clone();
    let mut password = env.password.clone();
    let mut command: Option<String> = None;
    let mut zone: Option<i64> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--email" => {
                let value = iter.next().ok_or("`--email` requires a value")?;
                email = Some(value.clone());
            }
            "--password" => {
                let value = iter.next().ok_or("`--password` requires a value")?;
                password = Some(value.clone());
            }
            "--zone" => {
                let value = iter.next().ok_or("`--zone` requires a value")?;
                let parsed = value
                    .parse::<i64>()
                    .map_err(|_| format!("`--zone` must be an integer, got: {}", value))?;
                zone = Some(parsed);
            }
            other if other.starts_with("--") => return Err(format!("unrecognised argument: {}", other)),
            other => {
                if command.is_some() {
                    return Err(format!("more than one command given: {}", other));
                }
                command = Some(other.to_string());
            }
        }
    }

    let email = email.ok_or("missing email: pass --email or set TADO_EMAIL")?;
    let password = password.ok_or("missing password: pass --password or set TADO_PASSWORD")?;

    let zone_arg = |zone: Option<i64>, name: &str| -> Result<ZoneId, String> {
        zone.map(ZoneId).ok_or_else(|| format!("`{}` requires --zone", name))
    };

    let command = match command.as_deref() {
        Some("get_me") => CliCommand::GetMe,
        Some("get_state") => CliCommand::GetState {
            zone: zone_arg(zone, "get_state")?,
        },
        Some("get_states") => CliCommand::GetStates,
        Some("get_capabilities") => CliCommand::GetCapabilities {
            zone: zone_arg(zone, "get_capabilities")?,
        },
        Some(other) => return Err(format!("unknown command: {}", other)),
        None => return Err("no command given".to_string()),
    };

    Ok(CliOptions { email, password, command })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), TadoApiError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(options: &CliOptions) -> Result<(), TadoApiError> {
    let tado = Tado::new(&options.email, &options.password)?;

    match &options.command {
        CliCommand::GetMe => print_json(&tado.get_me()?),
        CliCommand::GetState { zone } => print_json(&tado.get_zone_state(*zone)?),
        CliCommand::GetStates => print_json(&tado.get_zone_states()?),
        CliCommand::GetCapabilities { zone } => print_json(&tado.get_capabilities(*zone)?),
    }
}

fn main() {
    let default_filter = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(default_filter)
        .format_timestamp_secs()
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let options = match parse_args(&args, &Config::from_env()) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, USAGE);
            std::process::exit(2);
        }
    };

    info!(
        "tado-client {} (git {})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_TIME_GIT_HASH")
    );
    if let Err(e) = run(&options) {
        error!("fatal: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_credentials_and_command() {
        let options = parse_args(
            &args(&["--email", "test@example.com", "--password", "password", "get_me"]),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(options.email, "test@example.com");
        assert_eq!(options.password, "password");
        assert_eq!(options.command, CliCommand::GetMe);
    }

    #[test]
    fn zone_commands_require_a_zone() {
        let err = parse_args(
            &args(&["--email", "a@b.c", "--password", "pw", "get_state"]),
            &Config::default(),
        )
        .unwrap_err();
        assert!(err.contains("--zone"));

        let options = parse_args(
            &args(&["--email", "a@b.c", "--password", "pw", "get_state", "--zone", "1"]),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(options.command, CliCommand::GetState { zone: ZoneId(1) });
    }

    #[test]
    fn no_arguments_is_a_usage_error() {
        assert!(parse_args(&[], &Config::default()).is_err());
    }

    #[test]
    fn env_config_supplies_missing_credentials() {
        let env = Config {
            email: Some("env@example.com".to_string()),
            password: Some("secret".to_string()),
        };
        let options = parse_args(&args(&["get_states"]), &env).unwrap();
        assert_eq!(options.email, "env@example.com");
        assert_eq!(options.command, CliCommand::GetStates);
    }

    #[test]
    fn cli_flags_override_the_environment() {
        let env = Config {
            email: Some("env@example.com".to_string()),
            password: Some("secret".to_string()),
        };
        let options = parse_args(&args(&["--email", "cli@example.com", "get_me"]), &env).unwrap();
        assert_eq!(options.email, "cli@example.com");
        assert_eq!(options.password, "secret");
    }

    #[test]
    fn rejects_unknown_flags_and_commands() {
        let env = Config {
            email: Some("a@b.c".to_string()),
            password: Some("pw".to_string()),
        };
        assert!(parse_args(&args(&["--frobnicate"]), &env).is_err());
        assert!(parse_args(&args(&["frobnicate"]), &env).is_err());
        assert!(
            parse_args(&args(&["get_state", "--zone", "one"]), &env)
                .unwrap_err()
                .contains("integer")
        );
    }
}
