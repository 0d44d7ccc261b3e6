mod designs;
mod measures;
mod two_period;
mod types;

pub use designs::{CliffDesign, ExtendedEligibilityDesign, PhaseOutDesign, UniversalDesign};
pub use measures::{
    cliff_gap, conservation_integral, is_on_cliff, is_on_cliff_series, mtr,
    participation_tax_rate,
};
pub use two_period::{
    DEFAULT_DISCOUNT_RATE, entry_cliff_size, two_period_extended, two_period_extended_series,
    two_period_standard, two_period_standard_series,
};
pub use types::{
    BenefitDesign, DesignPoint, DesignSchedule, ExtendedOutcome, ExtendedSeries, TwoPeriodOutcome,
    TwoPeriodSeries,
};
