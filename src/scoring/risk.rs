// Risk classification: REM score, ordinal levels, and the final verdict.
//
// The REM score sums the magnitudes of the three abnormal densities. Each
// term is written as the income-increasing direction (lower CFO, higher
// production, lower discretionary spend) even though only the magnitude
// survives. Both the REM score and the text abnormality map to levels
// through the same thresholds, and the pair of levels picks the verdict.

use serde::{Deserialize, Serialize};

use super::baseline::BaselineDelta;

/// Scores strictly above this are High.
pub const HIGH_THRESHOLD: f64 = 6.0;
/// Scores strictly above this (and not High) are Moderate.
pub const MODERATE_THRESHOLD: f64 = 3.0;

/// Ordinal risk level for a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Map a score to a level: `> 6` High, `> 3` Moderate, otherwise Low.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s > HIGH_THRESHOLD => RiskLevel::High,
            s if s > MODERATE_THRESHOLD => RiskLevel::Moderate,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Categorical outcome of the numeric/text level pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Numeric and language signals both High
    Confirmed,
    /// Both signals at least Moderate, not both High
    Likely,
    /// Numeric High, language Low
    NumericOnly,
    Low,
}

impl Verdict {
    /// Decision table over (numeric level, text level).
    pub fn from_levels(numeric: RiskLevel, text: RiskLevel) -> Self {
        use RiskLevel::{High, Low, Moderate};
        match (numeric, text) {
            (High, High) => Verdict::Confirmed,
            (High | Moderate, High | Moderate) => Verdict::Likely,
            (High, Low) => Verdict::NumericOnly,
            _ => Verdict::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Confirmed => "Confirmed REM: numeric and language signals aligned",
            Verdict::Likely => "Likely REM",
            Verdict::NumericOnly => "Numeric REM only (language not supportive)",
            Verdict::Low => "Low risk",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The verdict together with the REM score that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskVerdict {
    pub verdict: Verdict,
    pub rem_score: f64,
}

/// Income-increasing patterns implied by the direction of the deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeEffect {
    CfoSuppression,
    Overproduction,
    DiscretionaryCuts,
}

impl IncomeEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeEffect::CfoSuppression => "CFO suppression",
            IncomeEffect::Overproduction => "Overproduction",
            IncomeEffect::DiscretionaryCuts => "Discretionary cost cutting",
        }
    }
}

impl std::fmt::Display for IncomeEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Composite REM score from the abnormal densities.
///
/// `rem = |-abnormal_cfo| + |abnormal_production| + |-abnormal_discretionary|`
pub fn rem_score(delta: &BaselineDelta) -> f64 {
    (-delta.abnormal_cfo).abs()
        + delta.abnormal_production.abs()
        + (-delta.abnormal_discretionary).abs()
}

/// Which income-increasing patterns the deltas point to. Informational only;
/// the verdict does not use it.
pub fn income_effects(delta: &BaselineDelta) -> Vec<IncomeEffect> {
    let mut effects = Vec::new();
    if delta.abnormal_cfo < 0.0 {
        effects.push(IncomeEffect::CfoSuppression);
    }
    if delta.abnormal_production > 0.0 {
        effects.push(IncomeEffect::Overproduction);
    }
    if delta.abnormal_discretionary < 0.0 {
        effects.push(IncomeEffect::DiscretionaryCuts);
    }
    effects
}

/// Classify a baseline delta into (numeric level, text level, verdict).
pub fn classify(delta: &BaselineDelta) -> (RiskLevel, RiskLevel, RiskVerdict) {
    let score = rem_score(delta);
    let numeric = RiskLevel::from_score(score);
    let text = RiskLevel::from_score(delta.abnormal_text);
    let verdict = RiskVerdict {
        verdict: Verdict::from_levels(numeric, text),
        rem_score: score,
    };
    (numeric, text, verdict)
}
