use super::types::{ExtendedOutcome, ExtendedSeries, TwoPeriodOutcome, TwoPeriodSeries};

/// Per-period discount rate used when a caller does not supply one.
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.05;

/// Benefits under standard (no-extension) rules.
///
/// Eligibility is decided once, in period 1 (`income <= threshold`,
/// inclusive), and the same benefit applies in period 2; the model only
/// observes one income value per household. NPV is the period-1 benefit
/// plus the discounted period-2 benefit.
pub fn two_period_standard(
    income: f64,
    threshold: f64,
    benefit_amount: f64,
    discount_rate: f64,
) -> TwoPeriodOutcome {
    let benefit = if income <= threshold {
        benefit_amount
    } else {
        0.0
    };
    TwoPeriodOutcome {
        period_1_benefit: benefit,
        period_2_benefit: benefit,
        npv: benefit + benefit / (1.0 + discount_rate),
    }
}

pub fn two_period_standard_series(
    incomes: &[f64],
    threshold: f64,
    benefit_amount: f64,
    discount_rate: f64,
) -> TwoPeriodSeries {
    let mut series = TwoPeriodSeries {
        period_1_benefit: Vec::with_capacity(incomes.len()),
        period_2_benefit: Vec::with_capacity(incomes.len()),
        npv: Vec::with_capacity(incomes.len()),
    };
    for &income in incomes {
        let outcome = two_period_standard(income, threshold, benefit_amount, discount_rate);
        series.period_1_benefit.push(outcome.period_1_benefit);
        series.period_2_benefit.push(outcome.period_2_benefit);
        series.npv.push(outcome.npv);
    }
    series
}

/// Benefits with extended eligibility.
///
/// The period-1 test is the same, but once a household qualifies it
/// keeps the benefit for `extension_periods` additional periods
/// unconditionally. Income is never re-tested after period 1 (there is
/// only one income observation), so the extension capitalises the
/// cliff: missing the threshold now costs the present value of every
/// guaranteed period, not just one.
pub fn two_period_extended(
    income: f64,
    threshold: f64,
    benefit_amount: f64,
    extension_periods: u32,
    discount_rate: f64,
) -> Result<ExtendedOutcome, String> {
    validate_extension_periods(extension_periods)?;
    let eligible = income <= threshold;
    let period_1_benefit = if eligible { benefit_amount } else { 0.0 };
    let npv = if eligible {
        benefit_amount * discount_factor_sum(extension_periods, discount_rate)
    } else {
        0.0
    };
    Ok(ExtendedOutcome {
        period_1_benefit,
        extended_benefits: vec![period_1_benefit; extension_periods as usize],
        npv,
    })
}

pub fn two_period_extended_series(
    incomes: &[f64],
    threshold: f64,
    benefit_amount: f64,
    extension_periods: u32,
    discount_rate: f64,
) -> Result<ExtendedSeries, String> {
    validate_extension_periods(extension_periods)?;
    let factor_sum = discount_factor_sum(extension_periods, discount_rate);
    let eligible: Vec<bool> = incomes.iter().map(|&income| income <= threshold).collect();
    let period_1_benefit: Vec<f64> = eligible
        .iter()
        .map(|&e| if e { benefit_amount } else { 0.0 })
        .collect();
    let npv: Vec<f64> = eligible
        .iter()
        .map(|&e| if e { benefit_amount * factor_sum } else { 0.0 })
        .collect();
    // No re-test after period 1: every extension-period series repeats
    // the period-1 eligibility.
    let extended_benefits = (0..extension_periods)
        .map(|_| period_1_benefit.clone())
        .collect();
    Ok(ExtendedSeries {
        period_1_benefit,
        extended_benefits,
        npv,
    })
}

/// Present value of the capitalised entry cliff: `benefit_amount`
/// received for `1 + extension_periods` consecutive periods. With a
/// zero discount rate this is exactly
/// `benefit_amount * (1 + extension_periods)`.
pub fn entry_cliff_size(
    benefit_amount: f64,
    extension_periods: u32,
    discount_rate: f64,
) -> Result<f64, String> {
    validate_extension_periods(extension_periods)?;
    Ok(benefit_amount * discount_factor_sum(extension_periods, discount_rate))
}

fn validate_extension_periods(extension_periods: u32) -> Result<(), String> {
    if extension_periods < 1 {
        return Err("extension_periods must be >= 1".to_string());
    }
    Ok(())
}

fn discount_factor_sum(extension_periods: u32, discount_rate: f64) -> f64 {
    (0..=extension_periods)
        .map(|t| 1.0 / (1.0 + discount_rate).powi(t as i32))
        .sum()
}
