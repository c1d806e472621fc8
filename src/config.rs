//! Portal configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Every knob has a default, so a bare `cargo run` serves the portal on
//! port 3000 with the same artificial latencies the browser build used.
//! Unparseable values fall back to the default instead of failing startup.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CHAT_REPLY_DELAY_MS: u64 = 800;
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;
pub const DEFAULT_LEARNER_SIGNUP_DELAY_MS: u64 = 1500;
pub const DEFAULT_TEACHER_SIGNUP_DELAY_MS: u64 = 1000;
pub const DEFAULT_CONVERSATION_IDLE_SECS: u64 = 30 * 60;
pub const DEFAULT_CONVERSATION_SWEEP_SECS: u64 = 60;

/// Artificial latencies applied before a result becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub chat_reply: Duration,
    pub login: Duration,
    pub learner_signup: Duration,
    pub teacher_signup: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub port: u16,
    pub delays: Delays,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: bool,
    /// Conversations untouched for this long are evicted by the sweeper.
    pub conversation_idle: Duration,
    /// How often the sweeper runs.
    pub sweep_interval: Duration,
}

impl PortalConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CHAT_REPLY_DELAY_MS`: default 800
    /// - `LOGIN_DELAY_MS`: default 1000
    /// - `LEARNER_SIGNUP_DELAY_MS`: default 1500
    /// - `TEACHER_SIGNUP_DELAY_MS`: default 1000
    /// - `COOKIE_SECURE`: default false
    /// - `CONVERSATION_IDLE_SECS`: default 1800
    /// - `CONVERSATION_SWEEP_SECS`: default 60
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            delays: Delays {
                chat_reply: env_millis("CHAT_REPLY_DELAY_MS", DEFAULT_CHAT_REPLY_DELAY_MS),
                login: env_millis("LOGIN_DELAY_MS", DEFAULT_LOGIN_DELAY_MS),
                learner_signup: env_millis("LEARNER_SIGNUP_DELAY_MS", DEFAULT_LEARNER_SIGNUP_DELAY_MS),
                teacher_signup: env_millis("TEACHER_SIGNUP_DELAY_MS", DEFAULT_TEACHER_SIGNUP_DELAY_MS),
            },
            cookie_secure: env_bool("COOKIE_SECURE").unwrap_or(false),
            conversation_idle: Duration::from_secs(env_parse("CONVERSATION_IDLE_SECS", DEFAULT_CONVERSATION_IDLE_SECS)),
            sweep_interval: Duration::from_secs(env_parse("CONVERSATION_SWEEP_SECS", DEFAULT_CONVERSATION_SWEEP_SECS)),
        }
    }

    /// Config with every delay set to zero. Used by tests and local tooling.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            port: DEFAULT_PORT,
            delays: Delays {
                chat_reply: Duration::ZERO,
                login: Duration::ZERO,
                learner_signup: Duration::ZERO,
                teacher_signup: Duration::ZERO,
            },
            ..Self::default()
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            delays: Delays {
                chat_reply: Duration::from_millis(DEFAULT_CHAT_REPLY_DELAY_MS),
                login: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
                learner_signup: Duration::from_millis(DEFAULT_LEARNER_SIGNUP_DELAY_MS),
                teacher_signup: Duration::from_millis(DEFAULT_TEACHER_SIGNUP_DELAY_MS),
            },
            cookie_secure: false,
            conversation_idle: Duration::from_secs(DEFAULT_CONVERSATION_IDLE_SECS),
            sweep_interval: Duration::from_secs(DEFAULT_CONVERSATION_SWEEP_SECS),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn env_millis(key: &str, default: u64) -> Duration {
    Duration::from_millis(env_parse(key, default))
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
