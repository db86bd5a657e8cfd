/// Number of weights collected by the weight tracker.
pub const SAMPLE_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    #[error("expected {} samples, got {0}", SAMPLE_COUNT)]
    WrongCount(usize),
    #[error("sample #{index} is not a positive number: {value}")]
    NotPositive { index: usize, value: f64 },
}

/// Exactly [`SAMPLE_COUNT`] positive weights, in the order they were entered.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightSampleSet([f64; SAMPLE_COUNT]);

impl WeightSampleSet {
    pub fn values(&self) -> &[f64; SAMPLE_COUNT] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for WeightSampleSet {
    type Error = SampleError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(v.is_finite() && **v > 0.0))
        {
            return Err(SampleError::NotPositive { index, value });
        }

        let count = values.len();
        values
            .try_into()
            .map(WeightSampleSet)
            .map_err(|_| SampleError::WrongCount(count))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightStatistics {
    pub mean: f64,
    pub standard_deviation: f64,
    pub percent_within_two_std_dev: f64,
}

impl WeightStatistics {
    pub fn from_samples(samples: &WeightSampleSet) -> Self {
        let values = samples.values();
        let mean = mean(values);
        let standard_deviation = standard_deviation(values, mean);
        let percent_within_two_std_dev =
            percent_within_two_std_dev(values, mean, standard_deviation);

        Self {
            mean,
            standard_deviation,
            percent_within_two_std_dev,
        }
    }
}

/// Running mean, `m_i = m_{i-1} + (v_i - m_{i-1}) / (i + 1)`, applied in
/// sequence order.
pub fn mean(values: &[f64]) -> f64 {
    values
        .iter()
        .enumerate()
        .fold(0.0, |mean, (i, value)| mean + (value - mean) / (i + 1) as f64)
}

/// Population standard deviation of a full ten-sample set. The divisor is
/// fixed at [`SAMPLE_COUNT`]; use [`population_standard_deviation`] for
/// sequences of any other length.
pub fn standard_deviation(values: &[f64; SAMPLE_COUNT], mean: f64) -> f64 {
    (squared_deviations(values, mean) / SAMPLE_COUNT as f64).sqrt()
}

pub fn population_standard_deviation(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    (squared_deviations(values, mean) / values.len() as f64).sqrt()
}

fn squared_deviations(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|value| (value - mean).powi(2)).sum()
}

/// Percentage, in `[0, 100]`, of values no further than two standard
/// deviations from the mean.
pub fn percent_within_two_std_dev(values: &[f64], mean: f64, standard_deviation: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let within = values
        .iter()
        .filter(|value| (*value - mean).abs() <= 2.0 * standard_deviation)
        .count();

    within as f64 / values.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn scenario_weights() -> [f64; SAMPLE_COUNT] {
        [60.0, 61.0, 62.0, 63.0, 64.0, 65.0, 66.0, 67.0, 68.0, 69.0]
    }

    #[test]
    fn mean_of_identical_values() {
        let test_data = [0.1, 1.0, 72.3, 150.0];

        for (i, value) in test_data.into_iter().enumerate() {
            let values = [value; SAMPLE_COUNT];
            assert!((mean(&values) - value).abs() < EPSILON, "Test case #{}", i);
        }
    }

    #[test]
    fn mean_matches_arithmetic_mean() {
        assert!((mean(&scenario_weights()) - 64.5).abs() < EPSILON);
        assert!((mean(&[1.0, 2.0, 6.0]) - 3.0).abs() < EPSILON);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn standard_deviation_of_identical_values_is_zero() {
        let values = [80.0; SAMPLE_COUNT];
        assert_eq!(standard_deviation(&values, mean(&values)), 0.0);
    }

    #[test]
    fn standard_deviation_of_scenario_weights() {
        let values = scenario_weights();
        let expected = (values.iter().map(|v| (v - 64.5).powi(2)).sum::<f64>() / 10.0).sqrt();

        let result = standard_deviation(&values, 64.5);
        assert!((result - expected).abs() < EPSILON);
        assert!((result - 2.872).abs() < 1e-3);
    }

    #[test]
    fn population_standard_deviation_divides_by_length() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_standard_deviation(&values, 5.0) - 2.0).abs() < EPSILON);
        assert_eq!(population_standard_deviation(&[], 0.0), 0.0);
    }

    #[test]
    fn percent_within_two_std_dev_cases() {
        let mut outlier = [50.0; SAMPLE_COUNT];
        outlier[9] = 500.0;
        let outlier_mean = mean(&outlier);
        let outlier_std_dev = standard_deviation(&outlier, outlier_mean);

        let test_data: [(&[f64], f64, f64, f64); 4] = [
            (&[70.0; SAMPLE_COUNT], 70.0, 0.0, 100.0),
            (&outlier, outlier_mean, outlier_std_dev, 90.0),
            (&[1.0, 2.0, 3.0, 10.0], 4.0, 1.0, 50.0),
            (&[], 0.0, 0.0, 0.0),
        ];

        for (i, (values, mean, std_dev, expected)) in test_data.into_iter().enumerate() {
            assert!(
                (percent_within_two_std_dev(values, mean, std_dev) - expected).abs() < EPSILON,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn weight_statistics_from_scenario_samples() {
        let samples = WeightSampleSet::try_from(scenario_weights().to_vec()).unwrap();
        let statistics = WeightStatistics::from_samples(&samples);

        assert!((statistics.mean - 64.5).abs() < EPSILON);
        assert!((statistics.standard_deviation - 2.8722813232690143).abs() < EPSILON);
        assert_eq!(statistics.percent_within_two_std_dev, 100.0);
    }

    #[test]
    fn sample_set_rejects_invalid_input() {
        let mut with_zero = scenario_weights().to_vec();
        with_zero[3] = 0.0;
        let mut with_nan = scenario_weights().to_vec();
        with_nan[0] = f64::NAN;

        assert_eq!(
            WeightSampleSet::try_from(vec![60.0; 9]),
            Err(SampleError::WrongCount(9))
        );
        assert_eq!(
            WeightSampleSet::try_from(vec![60.0; 11]),
            Err(SampleError::WrongCount(11))
        );
        assert_eq!(
            WeightSampleSet::try_from(with_zero),
            Err(SampleError::NotPositive {
                index: 3,
                value: 0.0
            })
        );
        assert!(matches!(
            WeightSampleSet::try_from(with_nan),
            Err(SampleError::NotPositive { index: 0, .. })
        ));
    }

    #[test]
    fn sample_set_keeps_entry_order() {
        let values = scenario_weights().to_vec();
        let samples = WeightSampleSet::try_from(values.clone()).unwrap();
        assert_eq!(samples.values().to_vec(), values);
    }
}
