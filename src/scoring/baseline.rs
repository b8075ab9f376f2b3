// Baseline comparison: current document against the mean of earlier ones.
//
// The series is positional. Everything before the last entry is the
// baseline, the last entry is the current period. Baseline order does not
// matter since only its mean is used.

use serde::{Deserialize, Serialize};

use super::metrics::DocumentMetrics;

/// Deviation of the current period from the baseline mean.
///
/// The three REM fields keep their sign (direction carries meaning);
/// `abnormal_text` is an absolute difference.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BaselineDelta {
    pub abnormal_cfo: f64,
    pub abnormal_production: f64,
    pub abnormal_discretionary: f64,
    pub abnormal_text: f64,
}

/// Field-wise arithmetic mean of a set of metrics.
///
/// Returns all zeros for an empty slice.
pub fn mean_metrics(series: &[DocumentMetrics]) -> DocumentMetrics {
    if series.is_empty() {
        return DocumentMetrics::default();
    }
    let n = series.len() as f64;
    let mean = |f: fn(&DocumentMetrics) -> f64| series.iter().map(f).sum::<f64>() / n;

    DocumentMetrics {
        text_tone_score: mean(|m| m.text_tone_score),
        cfo_density: mean(|m| m.cfo_density),
        production_density: mean(|m| m.production_density),
        discretionary_density: mean(|m| m.discretionary_density),
    }
}

/// Split a series into (baseline mean, current) and compute the deltas.
///
/// Returns `None` when the series has fewer than two entries; there is no
/// baseline to compare against.
pub fn compare(series: &[DocumentMetrics]) -> Option<(DocumentMetrics, BaselineDelta)> {
    let (current, baseline) = series.split_last()?;
    if baseline.is_empty() {
        return None;
    }

    let base = mean_metrics(baseline);
    let delta = BaselineDelta {
        abnormal_cfo: current.cfo_density - base.cfo_density,
        abnormal_production: current.production_density - base.production_density,
        abnormal_discretionary: current.discretionary_density - base.discretionary_density,
        abnormal_text: (current.text_tone_score - base.text_tone_score).abs(),
    };

    Some((base, delta))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(tone: f64, cfo: f64, prod: f64, disc: f64) -> DocumentMetrics {
        DocumentMetrics {
            text_tone_score: tone,
            cfo_density: cfo,
            production_density: prod,
            discretionary_density: disc,
        }
    }

    #[test]
    fn test_single_document_has_no_baseline() {
        assert!(compare(&[metrics(1.0, 1.0, 1.0, 1.0)]).is_none());
        assert!(compare(&[]).is_none());
    }

    #[test]
    fn test_two_documents_baseline_is_first() {
        let a = metrics(4.0, 10.0, 1.0, 5.0);
        let b = metrics(1.0, 2.0, 3.0, 1.0);
        let (base, delta) = compare(&[a, b]).unwrap();
        assert_eq!(base, a);
        assert!((delta.abnormal_cfo - -8.0).abs() < 1e-9);
        assert!((delta.abnormal_production - 2.0).abs() < 1e-9);
        assert!((delta.abnormal_discretionary - -4.0).abs() < 1e-9);
        // Text delta is unsigned
        assert!((delta.abnormal_text - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_baseline_mean_over_several() {
        let series = [
            metrics(0.0, 2.0, 0.0, 0.0),
            metrics(0.0, 4.0, 0.0, 0.0),
            metrics(0.0, 6.0, 0.0, 0.0),
            metrics(0.0, 10.0, 0.0, 0.0),
        ];
        let (base, delta) = compare(&series).unwrap();
        assert!((base.cfo_density - 4.0).abs() < 1e-9);
        assert!((delta.abnormal_cfo - 6.0).abs() < 1e-9);
    }
}
