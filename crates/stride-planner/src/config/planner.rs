// ABOUTME: Planner configuration for periodization phases and workout selection
// ABOUTME: Defaults from named constants, environment overrides and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stride_core::constants::{periodization, plan_limits, selection};
use tracing::warn;

use super::error::ConfigError;

/// Complete planner configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Phase boundaries and volume multipliers
    pub periodization: PeriodizationConfig,
    /// Quality-workout selection thresholds
    pub selection: SelectionConfig,
}

/// Periodization phase boundaries and volume multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodizationConfig {
    /// Share of weeks in the build phase (percent, floored)
    pub build_phase_percent: u32,
    /// Share of weeks in build plus peak (percent, floored)
    pub peak_phase_end_percent: u32,
    /// Volume multiplier on the first build week
    pub build_start_factor: f64,
    /// Volume multiplier on the first peak week
    pub peak_start_factor: f64,
    /// Volume multiplier on race week
    pub taper_end_factor: f64,
    /// Lower clamp for plans sized from a target date
    pub min_target_weeks: u32,
    /// Upper clamp for plans sized from a target date
    pub max_target_weeks: u32,
    /// Weekly volume multiplier for runners with an injury history
    pub injury_mileage_factor: f64,
}

/// Quality-workout selection thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Phase point before which only tempo runs are prescribed
    pub tempo_only_until: f64,
    /// Phase point from which quality work is interval-biased
    pub interval_bias_from: f64,
    /// Every n-th week swaps the fourth run for a recovery run
    pub recovery_week_interval: u32,
}

impl Default for PeriodizationConfig {
    fn default() -> Self {
        Self {
            build_phase_percent: periodization::BUILD_PHASE_PERCENT,
            peak_phase_end_percent: periodization::PEAK_PHASE_END_PERCENT,
            build_start_factor: periodization::BUILD_START_FACTOR,
            peak_start_factor: periodization::PEAK_START_FACTOR,
            taper_end_factor: periodization::TAPER_END_FACTOR,
            min_target_weeks: plan_limits::MIN_TARGET_WEEKS,
            max_target_weeks: plan_limits::MAX_TARGET_WEEKS,
            injury_mileage_factor: periodization::INJURY_MILEAGE_FACTOR,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            tempo_only_until: selection::TEMPO_ONLY_UNTIL,
            interval_bias_from: selection::INTERVAL_BIAS_FROM,
            recovery_week_interval: selection::RECOVERY_WEEK_INTERVAL,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from the environment and validate it
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an override does not parse or a value is out of range
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self {
            periodization: PeriodizationConfig::try_from_env()?,
            selection: SelectionConfig::try_from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Lenient environment load: unparseable overrides fall back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            periodization: PeriodizationConfig::from_env(),
            selection: SelectionConfig::from_env(),
        }
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid value
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.periodization.validate()?;
        self.selection.validate()
    }
}

impl PeriodizationConfig {
    /// Load from environment variables, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            build_phase_percent: env_or("STRIDE_BUILD_PHASE_PERCENT", defaults.build_phase_percent),
            peak_phase_end_percent: env_or(
                "STRIDE_PEAK_PHASE_PERCENT",
                defaults.peak_phase_end_percent,
            ),
            build_start_factor: env_or("STRIDE_BUILD_START_FACTOR", defaults.build_start_factor),
            peak_start_factor: env_or("STRIDE_PEAK_START_FACTOR", defaults.peak_start_factor),
            taper_end_factor: env_or("STRIDE_TAPER_END_FACTOR", defaults.taper_end_factor),
            min_target_weeks: env_or("STRIDE_MIN_TARGET_WEEKS", defaults.min_target_weeks),
            max_target_weeks: env_or("STRIDE_MAX_TARGET_WEEKS", defaults.max_target_weeks),
            injury_mileage_factor: env_or(
                "STRIDE_INJURY_MILEAGE_FACTOR",
                defaults.injury_mileage_factor,
            ),
        }
    }

    /// Load from environment variables, failing on unparseable overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` naming the offending variable
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            build_phase_percent: read_env("STRIDE_BUILD_PHASE_PERCENT")?
                .unwrap_or(defaults.build_phase_percent),
            peak_phase_end_percent: read_env("STRIDE_PEAK_PHASE_PERCENT")?
                .unwrap_or(defaults.peak_phase_end_percent),
            build_start_factor: read_env("STRIDE_BUILD_START_FACTOR")?
                .unwrap_or(defaults.build_start_factor),
            peak_start_factor: read_env("STRIDE_PEAK_START_FACTOR")?
                .unwrap_or(defaults.peak_start_factor),
            taper_end_factor: read_env("STRIDE_TAPER_END_FACTOR")?
                .unwrap_or(defaults.taper_end_factor),
            min_target_weeks: read_env("STRIDE_MIN_TARGET_WEEKS")?
                .unwrap_or(defaults.min_target_weeks),
            max_target_weeks: read_env("STRIDE_MAX_TARGET_WEEKS")?
                .unwrap_or(defaults.max_target_weeks),
            injury_mileage_factor: read_env("STRIDE_INJURY_MILEAGE_FACTOR")?
                .unwrap_or(defaults.injury_mileage_factor),
        })
    }

    /// Validate phase boundaries, factors and week clamps
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.build_phase_percent == 0 || self.build_phase_percent > 100 {
            return Err(ConfigError::InvalidRange(
                "build_phase_percent must be between 1 and 100",
            ));
        }
        if self.peak_phase_end_percent > 100 {
            return Err(ConfigError::InvalidRange(
                "peak_phase_end_percent must not exceed 100",
            ));
        }
        if self.peak_phase_end_percent < self.build_phase_percent {
            return Err(ConfigError::InvalidOrdering(
                "peak_phase_end_percent must not be below build_phase_percent",
            ));
        }

        for (value, message) in [
            (
                self.build_start_factor,
                "build_start_factor must be in (0, 1]",
            ),
            (self.peak_start_factor, "peak_start_factor must be in (0, 1]"),
            (self.taper_end_factor, "taper_end_factor must be in (0, 1]"),
            (
                self.injury_mileage_factor,
                "injury_mileage_factor must be in (0, 1]",
            ),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::InvalidRange(message));
            }
        }

        if self.min_target_weeks < plan_limits::MIN_TOTAL_WEEKS
            || self.max_target_weeks > plan_limits::MAX_TOTAL_WEEKS
        {
            return Err(ConfigError::InvalidRange(
                "target week clamps must stay within 4 to 52 weeks",
            ));
        }
        if self.min_target_weeks > self.max_target_weeks {
            return Err(ConfigError::InvalidOrdering(
                "min_target_weeks must not exceed max_target_weeks",
            ));
        }

        Ok(())
    }
}

impl SelectionConfig {
    /// Load from environment variables, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            tempo_only_until: env_or("STRIDE_TEMPO_ONLY_UNTIL", defaults.tempo_only_until),
            interval_bias_from: env_or("STRIDE_INTERVAL_BIAS_FROM", defaults.interval_bias_from),
            recovery_week_interval: env_or(
                "STRIDE_RECOVERY_WEEK_INTERVAL",
                defaults.recovery_week_interval,
            ),
        }
    }

    /// Load from environment variables, failing on unparseable overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` naming the offending variable
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            tempo_only_until: read_env("STRIDE_TEMPO_ONLY_UNTIL")?
                .unwrap_or(defaults.tempo_only_until),
            interval_bias_from: read_env("STRIDE_INTERVAL_BIAS_FROM")?
                .unwrap_or(defaults.interval_bias_from),
            recovery_week_interval: read_env("STRIDE_RECOVERY_WEEK_INTERVAL")?
                .unwrap_or(defaults.recovery_week_interval),
        })
    }

    /// Validate phase thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.tempo_only_until)
            || !(0.0..=1.0).contains(&self.interval_bias_from)
        {
            return Err(ConfigError::InvalidRange(
                "selection thresholds must be within [0, 1]",
            ));
        }
        if self.tempo_only_until > self.interval_bias_from {
            return Err(ConfigError::InvalidOrdering(
                "tempo_only_until must not exceed interval_bias_from",
            ));
        }
        if self.recovery_week_interval == 0 {
            return Err(ConfigError::InvalidRange(
                "recovery_week_interval must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Read and parse an optional environment override
fn read_env<T: FromStr>(variable: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse {
                variable,
                value: raw,
            }),
        Err(_) => Ok(None),
    }
}

/// Environment override or default, logging unparseable values
fn env_or<T: FromStr>(variable: &'static str, default: T) -> T {
    match read_env(variable) {
        Ok(value) => value.unwrap_or(default),
        Err(error) => {
            warn!(%error, "Ignoring invalid planner override, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_phase_ordering_enforced() {
        let mut config = PlannerConfig::default();
        config.periodization.build_phase_percent = 95;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOrdering(_))
        ));
    }

    #[test]
    fn test_factor_ranges_enforced() {
        let mut config = PlannerConfig::default();
        config.periodization.taper_end_factor = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

        let mut config = PlannerConfig::default();
        config.periodization.injury_mileage_factor = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_target_week_clamps_enforced() {
        let mut config = PlannerConfig::default();
        config.periodization.min_target_weeks = 3;
        assert!(config.validate().is_err());

        let mut config = PlannerConfig::default();
        config.periodization.min_target_weeks = 20;
        config.periodization.max_target_weeks = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOrdering(_))
        ));
    }

    #[test]
    fn test_selection_thresholds_enforced() {
        let mut config = PlannerConfig::default();
        config.selection.tempo_only_until = 0.9;
        assert!(config.validate().is_err());

        let mut config = PlannerConfig::default();
        config.selection.recovery_week_interval = 0;
        assert!(config.validate().is_err());
    }
}
