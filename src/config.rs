use crate::agent::{DEFAULT_EPSILON, DEFAULT_LEARNING_RATE};
use crate::error::{Error, Result};

/// Default number of self-play games.
pub const DEFAULT_GAMES: usize = 10_000;
/// Default spacing of progress log lines, in games.
pub const DEFAULT_REPORT_EVERY: usize = 200;

/// Settings of a self-play training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    /// Exploration rate of both agents.
    pub epsilon: f64,
    /// Step size of the TD update of both agents.
    pub learning_rate: f64,
    /// Number of games to play.
    pub games: usize,
    /// Seed for the shared random source; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Log progress every this many games.
    pub report_every: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            learning_rate: DEFAULT_LEARNING_RATE,
            games: DEFAULT_GAMES,
            seed: None,
            report_every: DEFAULT_REPORT_EVERY,
        }
    }
}

impl TrainingConfig {
    /// Checks that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(Error::InvalidConfiguration {
                message: format!("epsilon must be within [0, 1], got {}", self.epsilon),
            });
        }
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "learning rate must be within (0, 1], got {}",
                    self.learning_rate
                ),
            });
        }
        if self.report_every == 0 {
            return Err(Error::InvalidConfiguration {
                message: "report interval must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TrainingConfig::default();
        assert_eq!(config.epsilon, 0.1);
        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.games, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_epsilon() {
        let config = TrainingConfig {
            epsilon: 1.5,
            ..TrainingConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: epsilon must be within [0, 1], got 1.5"
        );
    }

    #[test]
    fn rejects_non_positive_learning_rate() {
        for learning_rate in [0.0, -0.1, 1.1, f64::NAN] {
            let config = TrainingConfig {
                learning_rate,
                ..TrainingConfig::default()
            };
            assert!(config.validate().is_err(), "accepted {learning_rate}");
        }
    }

    #[test]
    fn rejects_zero_report_interval() {
        let config = TrainingConfig {
            report_every: 0,
            ..TrainingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn zero_games_is_allowed() {
        let config = TrainingConfig {
            games: 0,
            ..TrainingConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
