//! Series evaluator
//!
//! Ties a configuration to a coefficient table: load the table, reduce it at the
//! configured time argument, return the sum.

use log::{debug, info};

use crate::config::EvaluatorConfig;
use crate::series::CoefficientTable;
use crate::time::{instant_from_julian_millennia, jd_from_julian_millennia};
use crate::Result;

/// Evaluates one VSOP87 partial sum as described by an [`EvaluatorConfig`]
#[derive(Debug, Clone, Default)]
pub struct SeriesEvaluator {
    config: EvaluatorConfig,
}

impl SeriesEvaluator {
    /// Create an evaluator for the given configuration
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// The configuration this evaluator runs with
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Read the configured table and return the partial sum
    pub fn run(&self) -> Result<f64> {
        let table = CoefficientTable::load(&self.config.table_path, self.config.series_length)?;
        Ok(self.evaluate_table(&table))
    }

    /// Reduce an already parsed table at the configured time argument
    pub fn evaluate_table(&self, table: &CoefficientTable) -> f64 {
        let t = self.config.time_argument;

        if let Some(header) = table.header() {
            info!("Evaluating {}", header);
        }
        match instant_from_julian_millennia(t) {
            Some(instant) => debug!(
                "t = {} Julian millennia (JD {:.6}, {} TDB)",
                t,
                jd_from_julian_millennia(t),
                instant
            ),
            None => debug!("t = {} Julian millennia", t),
        }

        let value = table.evaluate(t);
        info!("Summed {} terms: {}", table.len(), value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Term;
    use crate::Vsop87Error;
    use approx::assert_relative_eq;

    #[test]
    fn test_evaluate_table_uses_time_argument() {
        let table = CoefficientTable::from_terms(vec![Term::new(1.0, 0.0, 1.0)]);

        let at_zero = SeriesEvaluator::new(EvaluatorConfig::default().with_time_argument(0.0));
        assert_eq!(at_zero.evaluate_table(&table), 1.0);

        let at_pi = SeriesEvaluator::new(
            EvaluatorConfig::default().with_time_argument(std::f64::consts::PI),
        );
        assert_relative_eq!(at_pi.evaluate_table(&table), -1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_run_missing_table() {
        let evaluator = SeriesEvaluator::new(
            EvaluatorConfig::default().with_table_path("/nonexistent/VSOP87C.ven"),
        );
        assert!(matches!(evaluator.run(), Err(Vsop87Error::Series(_))));
    }

    #[test]
    fn test_default_config() {
        let evaluator = SeriesEvaluator::default();
        assert_eq!(evaluator.config(), &EvaluatorConfig::default());
    }
}
