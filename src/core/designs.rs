use super::types::{BenefitDesign, DesignPoint};

/// Full benefit below the threshold, nothing at or above it.
#[derive(Debug, Clone, Copy)]
pub struct CliffDesign {
    pub threshold: f64,
    pub benefit_amount: f64,
}

impl BenefitDesign for CliffDesign {
    fn evaluate(&self, income: f64) -> DesignPoint {
        let benefit = if income < self.threshold {
            self.benefit_amount
        } else {
            0.0
        };
        DesignPoint {
            net_income: income + benefit,
            benefit,
        }
    }
}

/// Benefit tapers linearly above the threshold: each dollar of income
/// past the threshold removes `phase_out_rate` dollars of benefit,
/// floored at zero.
#[derive(Debug, Clone, Copy)]
pub struct PhaseOutDesign {
    pub threshold: f64,
    pub benefit_amount: f64,
    pub phase_out_rate: f64,
}

impl BenefitDesign for PhaseOutDesign {
    fn evaluate(&self, income: f64) -> DesignPoint {
        let excess = (income - self.threshold).max(0.0);
        let benefit = (self.benefit_amount - self.phase_out_rate * excess).max(0.0);
        DesignPoint {
            net_income: income + benefit,
            benefit,
        }
    }
}

/// Flat benefit paid at every income level.
#[derive(Debug, Clone, Copy)]
pub struct UniversalDesign {
    pub benefit_amount: f64,
}

impl BenefitDesign for UniversalDesign {
    fn evaluate(&self, income: f64) -> DesignPoint {
        DesignPoint {
            net_income: income + self.benefit_amount,
            benefit: self.benefit_amount,
        }
    }
}

/// Cliff design with the eligibility window widened by `extension`
/// dollars of income: the cliff moves to `threshold + extension`
/// instead of disappearing.
#[derive(Debug, Clone, Copy)]
pub struct ExtendedEligibilityDesign {
    pub threshold: f64,
    pub benefit_amount: f64,
    pub extension: f64,
}

impl ExtendedEligibilityDesign {
    fn as_shifted_cliff(&self) -> CliffDesign {
        CliffDesign {
            threshold: self.threshold + self.extension,
            benefit_amount: self.benefit_amount,
        }
    }
}

impl BenefitDesign for ExtendedEligibilityDesign {
    fn evaluate(&self, income: f64) -> DesignPoint {
        self.as_shifted_cliff().evaluate(income)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn cliff_pays_full_benefit_strictly_below_threshold() {
        let design = CliffDesign {
            threshold: 30_000.0,
            benefit_amount: 5_000.0,
        };
        assert_approx(design.evaluate(0.0).benefit, 5_000.0);
        assert_approx(design.evaluate(29_999.0).benefit, 5_000.0);
        assert_approx(design.evaluate(30_000.0).benefit, 0.0);
        assert_approx(design.evaluate(80_000.0).benefit, 0.0);
    }

    #[test]
    fn phaseout_tapers_at_the_stated_rate() {
        let design = PhaseOutDesign {
            threshold: 30_000.0,
            benefit_amount: 5_000.0,
            phase_out_rate: 0.5,
        };
        assert_approx(design.evaluate(30_000.0).benefit, 5_000.0);
        assert_approx(design.evaluate(32_000.0).benefit, 4_000.0);
        // Exhausted at threshold + benefit / rate = 40_000.
        assert_approx(design.evaluate(40_000.0).benefit, 0.0);
        assert_approx(design.evaluate(90_000.0).benefit, 0.0);
    }

    #[test]
    fn universal_pays_everywhere() {
        let design = UniversalDesign {
            benefit_amount: 5_000.0,
        };
        assert_approx(design.evaluate(0.0).benefit, 5_000.0);
        assert_approx(design.evaluate(1_000_000.0).benefit, 5_000.0);
    }

    #[test]
    fn extended_eligibility_shifts_the_cliff_rather_than_removing_it() {
        let design = ExtendedEligibilityDesign {
            threshold: 30_000.0,
            benefit_amount: 5_000.0,
            extension: 10_000.0,
        };
        assert_approx(design.evaluate(35_000.0).benefit, 5_000.0);
        assert_approx(design.evaluate(39_999.0).benefit, 5_000.0);
        assert_approx(design.evaluate(40_000.0).benefit, 0.0);
    }

    #[test]
    fn net_income_identity_holds_for_every_design() {
        let incomes = [0.0, 12_345.0, 30_000.0, 39_999.5, 40_000.0, 75_000.0];
        let cliff = CliffDesign {
            threshold: 30_000.0,
            benefit_amount: 5_000.0,
        };
        let phaseout = PhaseOutDesign {
            threshold: 30_000.0,
            benefit_amount: 5_000.0,
            phase_out_rate: 0.5,
        };
        let universal = UniversalDesign {
            benefit_amount: 5_000.0,
        };
        let extended = ExtendedEligibilityDesign {
            threshold: 30_000.0,
            benefit_amount: 5_000.0,
            extension: 10_000.0,
        };
        let designs: [&dyn BenefitDesign; 4] = [&cliff, &phaseout, &universal, &extended];
        for design in designs {
            for &income in &incomes {
                let point = design.evaluate(income);
                assert_approx(point.net_income, income + point.benefit);
            }
        }
    }

    #[test]
    fn evaluate_grid_matches_pointwise_evaluation() {
        let design = PhaseOutDesign {
            threshold: 30_000.0,
            benefit_amount: 5_000.0,
            phase_out_rate: 0.5,
        };
        let grid = [0.0, 10_000.0, 31_000.0, 50_000.0];
        let schedule = design.evaluate_grid(&grid);
        assert_eq!(schedule.benefit.len(), grid.len());
        assert_eq!(schedule.net_income.len(), grid.len());
        for (idx, &income) in grid.iter().enumerate() {
            let point = design.evaluate(income);
            assert_approx(schedule.benefit[idx], point.benefit);
            assert_approx(schedule.net_income[idx], point.net_income);
        }
    }
}
