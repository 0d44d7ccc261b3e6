use super::types::BenefitDesign;

/// Marginal tax rate from benefit withdrawal at each grid point.
///
/// Computed as the negated numerical derivative of the benefit series
/// with respect to income: `MTR(y) = -dB/dy`. A positive MTR means the
/// benefit is being withdrawn; MTR > 1 means net income falls as gross
/// income rises.
pub fn mtr(income_grid: &[f64], design: &dyn BenefitDesign) -> Result<Vec<f64>, String> {
    validate_grid(income_grid)?;
    let schedule = design.evaluate_grid(income_grid);
    let mut rates = gradient(&schedule.benefit, income_grid);
    for rate in &mut rates {
        *rate = -*rate;
    }
    Ok(rates)
}

/// Discrete drop in net income at each grid step.
///
/// `gap[i] = max(0, net[i-1] - net[i])`; the first element is 0. A
/// positive gap marks a step where net income fell as gross income
/// rose. A gap strictly between two sampled points can be missed by a
/// coarse grid.
pub fn cliff_gap(income_grid: &[f64], design: &dyn BenefitDesign) -> Result<Vec<f64>, String> {
    validate_grid(income_grid)?;
    let schedule = design.evaluate_grid(income_grid);
    let mut gaps = Vec::with_capacity(income_grid.len());
    gaps.push(0.0);
    for pair in schedule.net_income.windows(2) {
        gaps.push((pair[0] - pair[1]).max(0.0));
    }
    Ok(gaps)
}

/// Trapezoidal integral of the MTR series over the income grid.
///
/// For any design that fully withdraws a benefit of size `b` somewhere
/// inside the grid, this integral approximates `b` regardless of how
/// the withdrawal is shaped (abrupt cliff or gradual taper).
pub fn conservation_integral(
    income_grid: &[f64],
    design: &dyn BenefitDesign,
) -> Result<f64, String> {
    let rates = mtr(income_grid, design)?;
    Ok(trapezoid(&rates, income_grid))
}

/// True iff the marginal tax rate strictly exceeds 1: more than a
/// dollar of net income lost per additional dollar earned.
pub fn is_on_cliff(mtr_value: f64) -> bool {
    mtr_value > 1.0
}

pub fn is_on_cliff_series(mtr_values: &[f64]) -> Vec<bool> {
    mtr_values.iter().map(|&rate| is_on_cliff(rate)).collect()
}

/// Effective tax rate from benefit withdrawal when moving from zero
/// income to `income`: `(B(0) - B(y)) / y`. Zero income returns 0.
pub fn participation_tax_rate(income: f64, design: &dyn BenefitDesign) -> f64 {
    if income == 0.0 {
        return 0.0;
    }
    let benefit_at_zero = design.evaluate(0.0).benefit;
    let benefit_at_income = design.evaluate(income).benefit;
    (benefit_at_zero - benefit_at_income) / income
}

fn validate_grid(income_grid: &[f64]) -> Result<(), String> {
    if income_grid.len() < 2 {
        return Err(format!(
            "income grid needs at least 2 points, got {}",
            income_grid.len()
        ));
    }
    if income_grid.windows(2).any(|pair| pair[1] < pair[0]) {
        return Err("income grid must be sorted ascending".to_string());
    }
    Ok(())
}

// Second-order finite differences on a possibly non-uniform grid:
// one-sided at the two edges, weighted central scheme in the interior.
fn gradient(values: &[f64], xs: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut out = vec![0.0; n];
    out[0] = (values[1] - values[0]) / (xs[1] - xs[0]);
    out[n - 1] = (values[n - 1] - values[n - 2]) / (xs[n - 1] - xs[n - 2]);
    for i in 1..n - 1 {
        let hs = xs[i] - xs[i - 1];
        let hd = xs[i + 1] - xs[i];
        out[i] = (hs * hs * values[i + 1] + (hd * hd - hs * hs) * values[i]
            - hd * hd * values[i - 1])
            / (hs * hd * (hs + hd));
    }
    out
}

fn trapezoid(values: &[f64], xs: &[f64]) -> f64 {
    let mut total = 0.0;
    for i in 0..values.len() - 1 {
        total += (xs[i + 1] - xs[i]) * (values[i] + values[i + 1]) * 0.5;
    }
    total
}
