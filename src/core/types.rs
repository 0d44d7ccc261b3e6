use serde::Serialize;

/// A benefit schedule evaluated at one gross-income level.
///
/// Every design keeps `net_income == income + benefit` pointwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DesignPoint {
    pub net_income: f64,
    pub benefit: f64,
}

/// Benefit and net-income series evaluated over an income grid,
/// index-aligned with the grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSchedule {
    pub net_income: Vec<f64>,
    pub benefit: Vec<f64>,
}

/// A stylised benefit design: a pure mapping from gross income to
/// `{net_income, benefit}`.
pub trait BenefitDesign {
    fn evaluate(&self, income: f64) -> DesignPoint;

    fn evaluate_grid(&self, income_grid: &[f64]) -> DesignSchedule {
        let mut net_income = Vec::with_capacity(income_grid.len());
        let mut benefit = Vec::with_capacity(income_grid.len());
        for &income in income_grid {
            let point = self.evaluate(income);
            net_income.push(point.net_income);
            benefit.push(point.benefit);
        }
        DesignSchedule { net_income, benefit }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoPeriodOutcome {
    pub period_1_benefit: f64,
    pub period_2_benefit: f64,
    pub npv: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedOutcome {
    pub period_1_benefit: f64,
    pub extended_benefits: Vec<f64>,
    pub npv: f64,
}

/// Column-vector form of [`TwoPeriodOutcome`] over an income axis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoPeriodSeries {
    pub period_1_benefit: Vec<f64>,
    pub period_2_benefit: Vec<f64>,
    pub npv: Vec<f64>,
}

/// Column-vector form of [`ExtendedOutcome`]; `extended_benefits` holds
/// one series per extension period, each aligned with the income axis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedSeries {
    pub period_1_benefit: Vec<f64>,
    pub extended_benefits: Vec<Vec<f64>>,
    pub npv: Vec<f64>,
}
