//! The annual observation type and series preconditions.

use serde::{Deserialize, Serialize};

use crate::error::TrendError;

/// One observation for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualObservation {
    /// Calendar year.
    pub year: i32,
    /// Observed value (unit depends on the variable).
    pub value: f64,
}

impl AnnualObservation {
    /// Creates a new observation.
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// Checks the series preconditions shared by every analyzer entry point:
/// strictly ascending years (no duplicates, no gaps required) and finite
/// values. An empty series is valid.
pub(crate) fn validate_series(series: &[AnnualObservation]) -> Result<(), TrendError> {
    for (i, pair) in series.windows(2).enumerate() {
        if pair[1].year <= pair[0].year {
            return Err(TrendError::UnsortedYears { index: i + 1 });
        }
    }
    for obs in series {
        if !obs.value.is_finite() {
            return Err(TrendError::NonFiniteValue { year: obs.year });
        }
    }
    Ok(())
}

/// Years of the series as f64, for the regression axis.
pub(crate) fn years(series: &[AnnualObservation]) -> Vec<f64> {
    series.iter().map(|obs| f64::from(obs.year)).collect()
}

/// Values of the series.
pub(crate) fn values(series: &[AnnualObservation]) -> Vec<f64> {
    series.iter().map(|obs| obs.value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(pairs: &[(i32, f64)]) -> Vec<AnnualObservation> {
        pairs
            .iter()
            .map(|&(year, value)| AnnualObservation::new(year, value))
            .collect()
    }

    #[test]
    fn accepts_ascending_series() {
        let series = obs(&[(2000, 1.0), (2001, 2.0), (2003, 3.0)]);
        assert!(validate_series(&series).is_ok());
    }

    #[test]
    fn accepts_empty_and_single() {
        assert!(validate_series(&[]).is_ok());
        assert!(validate_series(&obs(&[(2000, 1.0)])).is_ok());
    }

    #[test]
    fn rejects_descending_years() {
        let series = obs(&[(2000, 1.0), (1999, 2.0)]);
        assert!(matches!(
            validate_series(&series),
            Err(TrendError::UnsortedYears { index: 1 })
        ));
    }

    #[test]
    fn rejects_duplicate_years() {
        let series = obs(&[(2000, 1.0), (2001, 2.0), (2001, 3.0)]);
        assert!(matches!(
            validate_series(&series),
            Err(TrendError::UnsortedYears { index: 2 })
        ));
    }

    #[test]
    fn rejects_nan_value() {
        let series = obs(&[(2000, 1.0), (2001, f64::NAN)]);
        assert!(matches!(
            validate_series(&series),
            Err(TrendError::NonFiniteValue { year: 2001 })
        ));
    }

    #[test]
    fn axis_helpers() {
        let series = obs(&[(2000, 1.5), (2001, 2.5)]);
        assert_eq!(years(&series), vec![2000.0, 2001.0]);
        assert_eq!(values(&series), vec![1.5, 2.5]);
    }

    #[test]
    fn deserializes_from_json_object() {
        let obs: AnnualObservation = serde_json::from_str(r#"{"year":1995,"value":12.5}"#).unwrap();
        assert_eq!(obs, AnnualObservation::new(1995, 12.5));
    }
}
