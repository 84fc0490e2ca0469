use crate::driver::{SeriesDriver, SeriesSum};
use crate::{BbpError, CancelToken, DigitPosition, DriverConfig, Executor, Series};
use bbp_math::{Fraction, PowerTable};

/// Fraction of `16^d · π` together with the four series that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct DigitExtraction {
    pub position: DigitPosition,
    /// `16^d · π mod 1`, in `[0, 1)`
    pub fraction: f64,
    /// Series sums in [`Series::ALL`] order
    pub series: Vec<SeriesSum>,
}

/// Digit Assembler: combines `4·S1 − 2·S4 − S5 − S6` for one position.
pub struct DigitExtractor<'e> {
    driver: SeriesDriver<'e>,
}

impl<'e> DigitExtractor<'e> {
    pub fn new(executor: &'e dyn Executor, config: DriverConfig) -> Self {
        Self {
            driver: SeriesDriver::new(executor, config),
        }
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.driver = self.driver.with_cancel(token);
        self
    }

    /// Extract `16^d · π mod 1`.
    ///
    /// Configuration is validated and the power table is sized from `d`
    /// before any chunk is dispatched.
    pub fn extract(&self, position: DigitPosition) -> Result<DigitExtraction, BbpError> {
        self.driver.config().validate()?;
        let table = PowerTable::for_exponent(position.get());

        let mut series = Vec::with_capacity(Series::ALL.len());
        let mut raw = 0.0;
        for j in Series::ALL {
            let sum = self.driver.series_sum(j, position, &table)?;
            raw += j.coefficient() * sum.value;
            series.push(sum);
        }

        let fraction = Fraction::normalize(raw);
        log::info!(
            "position {}: fraction {:.17} via {} ({} lanes)",
            position,
            fraction,
            self.driver.executor().name(),
            self.driver.executor().lanes()
        );

        Ok(DigitExtraction {
            position,
            fraction,
            series,
        })
    }
}

/// Convenience wrapper returning only the fraction
pub fn extract_digit(
    position: DigitPosition,
    executor: &dyn Executor,
    config: &DriverConfig,
) -> Result<f64, BbpError> {
    DigitExtractor::new(executor, *config)
        .extract(position)
        .map(|extraction| extraction.fraction)
}
