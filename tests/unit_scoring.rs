// Unit tests for the scoring functions.
//
// Tests isolated pure functions: density edge cases, RiskLevel boundaries,
// the verdict decision table, baseline deltas and income effects.

use earnwatch::scoring::baseline::{compare, mean_metrics, BaselineDelta};
use earnwatch::scoring::density::{density, occurrences};
use earnwatch::scoring::keywords;
use earnwatch::scoring::metrics::DocumentMetrics;
use earnwatch::scoring::risk::{
    classify, income_effects, rem_score, IncomeEffect, RiskLevel, Verdict,
};

fn metrics(tone: f64, cfo: f64, prod: f64, disc: f64) -> DocumentMetrics {
    DocumentMetrics {
        text_tone_score: tone,
        cfo_density: cfo,
        production_density: prod,
        discretionary_density: disc,
    }
}

// ============================================================
// density — invariants
// ============================================================

#[test]
fn density_empty_text_is_zero_for_every_set() {
    for set in keywords::ALL {
        assert_eq!(density("", set.keywords), 0.0, "{}", set.name);
    }
}

#[test]
fn density_empty_keyword_list_is_zero() {
    assert_eq!(density("cash flow cash flow", &[]), 0.0);
}

#[test]
fn density_is_never_negative() {
    let texts = ["", " ", "cfo", "risk brisk risky", "lorem ipsum dolor"];
    for text in texts {
        for set in keywords::ALL {
            assert!(density(text, set.keywords) >= 0.0);
        }
    }
}

#[test]
fn density_whitespace_only_text_uses_one_word_floor() {
    assert_eq!(density("   \n\t", keywords::CFO.keywords), 0.0);
}

#[test]
fn density_counts_stems() {
    // "advertis" matches advertising and advertisement
    let text = "advertising and advertisement spend";
    assert_eq!(occurrences(text, keywords::DISCRETIONARY.keywords), 2);
    assert!((density(text, keywords::DISCRETIONARY.keywords) - 500.0).abs() < 1e-9);
}

#[test]
fn density_matches_across_words() {
    // "may" inside "mayor", "cfo" inside "cfos"
    assert_eq!(occurrences("the mayor", keywords::UNCERTAINTY.keywords), 1);
    assert_eq!(occurrences("cfos", keywords::CFO.keywords), 1);
}

// ============================================================
// RiskLevel::from_score — boundary conditions
// ============================================================

#[test]
fn level_exact_boundary_high_is_moderate() {
    assert_eq!(RiskLevel::from_score(6.0), RiskLevel::Moderate);
}

#[test]
fn level_just_above_high() {
    assert_eq!(RiskLevel::from_score(6.000_001), RiskLevel::High);
}

#[test]
fn level_exact_boundary_moderate_is_low() {
    assert_eq!(RiskLevel::from_score(3.0), RiskLevel::Low);
}

#[test]
fn level_zero_and_negative() {
    assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(-10.0), RiskLevel::Low);
}

#[test]
fn level_nan_falls_to_low() {
    // NaN fails all > comparisons, so it falls through to the wildcard arm
    assert_eq!(RiskLevel::from_score(f64::NAN), RiskLevel::Low);
}

#[test]
fn level_display_matches_as_str() {
    for level in [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High] {
        assert_eq!(level.to_string(), level.as_str());
    }
}

// ============================================================
// Verdict strings
// ============================================================

#[test]
fn verdict_strings() {
    assert_eq!(
        Verdict::Confirmed.as_str(),
        "Confirmed REM: numeric and language signals aligned"
    );
    assert_eq!(Verdict::Likely.as_str(), "Likely REM");
    assert_eq!(
        Verdict::NumericOnly.as_str(),
        "Numeric REM only (language not supportive)"
    );
    assert_eq!(Verdict::Low.to_string(), "Low risk");
}

#[test]
fn income_effect_strings() {
    assert_eq!(IncomeEffect::CfoSuppression.to_string(), "CFO suppression");
    assert_eq!(IncomeEffect::Overproduction.to_string(), "Overproduction");
    assert_eq!(
        IncomeEffect::DiscretionaryCuts.to_string(),
        "Discretionary cost cutting"
    );
}

// ============================================================
// Baseline comparison
// ============================================================

#[test]
fn mean_of_empty_is_zero() {
    assert_eq!(mean_metrics(&[]), DocumentMetrics::default());
}

#[test]
fn two_document_baseline_is_the_first_document() {
    let first = metrics(2.5, 7.0, 3.0, 4.0);
    let (base, _) = compare(&[first, metrics(0.0, 0.0, 0.0, 0.0)]).unwrap();
    assert_eq!(base, first);
}

#[test]
fn identical_documents_have_zero_deltas() {
    let m = metrics(5.0, 3.0, 2.0, 1.0);
    let (_, delta) = compare(&[m, m]).unwrap();
    assert_eq!(delta, BaselineDelta::default());

    let (numeric, text, verdict) = classify(&delta);
    assert_eq!(numeric, RiskLevel::Low);
    assert_eq!(text, RiskLevel::Low);
    assert_eq!(verdict.verdict, Verdict::Low);
    assert_eq!(verdict.rem_score, 0.0);
    assert!(income_effects(&delta).is_empty());
}

#[test]
fn baseline_order_does_not_change_deltas() {
    let a = metrics(1.0, 4.0, 2.0, 8.0);
    let b = metrics(3.0, 6.0, 1.0, 2.0);
    let current = metrics(9.0, 1.0, 5.0, 1.0);
    let (_, d1) = compare(&[a, b, current]).unwrap();
    let (_, d2) = compare(&[b, a, current]).unwrap();
    assert!((d1.abnormal_cfo - d2.abnormal_cfo).abs() < 1e-9);
    assert!((d1.abnormal_production - d2.abnormal_production).abs() < 1e-9);
    assert!((d1.abnormal_discretionary - d2.abnormal_discretionary).abs() < 1e-9);
    assert!((d1.abnormal_text - d2.abnormal_text).abs() < 1e-9);
}

// ============================================================
// Scenario: CFO and discretionary drop, production flat
// ============================================================

#[test]
fn cfo_and_discretionary_drop_is_numeric_high() {
    let baseline = metrics(0.0, 10.0, 1.0, 5.0);
    let current = metrics(0.0, 2.0, 1.0, 1.0);
    let (_, delta) = compare(&[baseline, current]).unwrap();

    assert!((delta.abnormal_cfo - -8.0).abs() < 1e-9);
    assert!(delta.abnormal_production.abs() < 1e-9);
    assert!((delta.abnormal_discretionary - -4.0).abs() < 1e-9);
    assert!((rem_score(&delta) - 12.0).abs() < 1e-9);

    let (numeric, text, verdict) = classify(&delta);
    assert_eq!(numeric, RiskLevel::High);
    assert_eq!(text, RiskLevel::Low);
    assert_eq!(verdict.verdict, Verdict::NumericOnly);

    let effects = income_effects(&delta);
    assert!(effects.contains(&IncomeEffect::CfoSuppression));
    assert!(effects.contains(&IncomeEffect::DiscretionaryCuts));
    assert!(!effects.contains(&IncomeEffect::Overproduction));
}

#[test]
fn overproduction_is_reported() {
    let (_, delta) = compare(&[metrics(0.0, 0.0, 1.0, 0.0), metrics(0.0, 0.0, 3.0, 0.0)]).unwrap();
    assert_eq!(income_effects(&delta), vec![IncomeEffect::Overproduction]);
}

#[test]
fn text_and_numeric_high_is_confirmed() {
    let delta = BaselineDelta {
        abnormal_cfo: -7.0,
        abnormal_production: 0.0,
        abnormal_discretionary: 0.0,
        abnormal_text: 6.5,
    };
    let (_, _, verdict) = classify(&delta);
    assert_eq!(verdict.verdict, Verdict::Confirmed);
    assert!((verdict.rem_score - 7.0).abs() < 1e-9);
}

#[test]
fn moderate_numeric_with_low_text_is_low() {
    let delta = BaselineDelta {
        abnormal_cfo: -4.0,
        abnormal_production: 0.0,
        abnormal_discretionary: 0.0,
        abnormal_text: 1.0,
    };
    let (numeric, _, verdict) = classify(&delta);
    assert_eq!(numeric, RiskLevel::Moderate);
    assert_eq!(verdict.verdict, Verdict::Low);
}
