//! Minimal runtime configuration helpers for the CLI.

/// Credentials resolved from the environment; CLI flags take precedence.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            email: non_empty_var("TADO_EMAIL"),
            password: non_empty_var("TADO_PASSWORD"),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => None,
    }
}
