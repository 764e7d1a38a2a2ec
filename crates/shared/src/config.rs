//! Company preferences management.
//!
//! The aging thresholds and report filters were global lookups in older
//! systems; here they load once into a [`Preferences`] value that callers pass
//! down explicitly.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Company preferences.
#[derive(Debug, Clone, Deserialize)]
pub struct Preferences {
    /// Aging bucket preferences.
    #[serde(default)]
    pub aging: AgingPreferences,
    /// Report output preferences.
    #[serde(default)]
    pub reports: ReportPreferences,
}

/// Aging bucket preferences.
#[derive(Debug, Clone, Deserialize)]
pub struct AgingPreferences {
    /// Days overdue at which a balance leaves the first bucket.
    #[serde(default = "default_past_due_days_1")]
    pub past_due_days_1: i64,
    /// Days overdue at which a balance leaves the second bucket.
    #[serde(default = "default_past_due_days_2")]
    pub past_due_days_2: i64,
}

fn default_past_due_days_1() -> i64 {
    30
}

fn default_past_due_days_2() -> i64 {
    60
}

impl Default for AgingPreferences {
    fn default() -> Self {
        Self {
            past_due_days_1: default_past_due_days_1(),
            past_due_days_2: default_past_due_days_2(),
        }
    }
}

/// Report output preferences.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportPreferences {
    /// Absolute tolerance below which an account total counts as zero.
    #[serde(default = "default_zero_balance_epsilon")]
    pub zero_balance_epsilon: Decimal,
    /// Currency reports are stated in when no conversion is requested.
    #[serde(default = "default_home_currency")]
    pub home_currency: Currency,
}

fn default_zero_balance_epsilon() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

fn default_home_currency() -> Currency {
    Currency::Usd
}

impl Default for ReportPreferences {
    fn default() -> Self {
        Self {
            zero_balance_epsilon: default_zero_balance_epsilon(),
            home_currency: default_home_currency(),
        }
    }
}

impl Preferences {
    /// Loads preferences from config files and environment.
    ///
    /// Sources, in order of precedence: `DUEBOOK__`-prefixed environment
    /// variables, `config/{RUN_MODE}`, `config/default`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DUEBOOK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let prefs = Preferences {
            aging: AgingPreferences::default(),
            reports: ReportPreferences::default(),
        };
        assert_eq!(prefs.aging.past_due_days_1, 30);
        assert_eq!(prefs.aging.past_due_days_2, 60);
        assert_eq!(prefs.reports.zero_balance_epsilon, dec!(0.01));
        assert_eq!(prefs.reports.home_currency, Currency::Usd);
    }

    #[test]
    fn test_load_uses_defaults_when_unset() {
        temp_env::with_vars_unset(
            [
                "DUEBOOK__AGING__PAST_DUE_DAYS_1",
                "DUEBOOK__AGING__PAST_DUE_DAYS_2",
                "DUEBOOK__REPORTS__ZERO_BALANCE_EPSILON",
                "DUEBOOK__REPORTS__HOME_CURRENCY",
            ],
            || {
                let prefs = Preferences::load().unwrap();
                assert_eq!(prefs.aging.past_due_days_1, 30);
                assert_eq!(prefs.aging.past_due_days_2, 60);
            },
        );
    }

    #[test]
    fn test_load_env_overrides() {
        temp_env::with_vars(
            [
                ("DUEBOOK__AGING__PAST_DUE_DAYS_1", Some("45")),
                ("DUEBOOK__AGING__PAST_DUE_DAYS_2", Some("90")),
            ],
            || {
                let prefs = Preferences::load().unwrap();
                assert_eq!(prefs.aging.past_due_days_1, 45);
                assert_eq!(prefs.aging.past_due_days_2, 90);
            },
        );
    }
}
