use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    BenefitDesign, CliffDesign, ExtendedEligibilityDesign, ExtendedSeries, PhaseOutDesign,
    TwoPeriodSeries, UniversalDesign, cliff_gap, conservation_integral, entry_cliff_size,
    is_on_cliff_series, mtr, participation_tax_rate, two_period_extended_series,
    two_period_standard_series,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliDesignKind {
    Cliff,
    PhaseOut,
    Universal,
    ExtendedEligibility,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ApiDesignKind {
    Cliff,
    #[serde(alias = "phaseOut", alias = "phase_out", alias = "phaseout")]
    PhaseOut,
    Universal,
    #[serde(alias = "extendedEligibility", alias = "extended_eligibility")]
    ExtendedEligibility,
}

impl From<ApiDesignKind> for CliDesignKind {
    fn from(value: ApiDesignKind) -> Self {
        match value {
            ApiDesignKind::Cliff => CliDesignKind::Cliff,
            ApiDesignKind::PhaseOut => CliDesignKind::PhaseOut,
            ApiDesignKind::Universal => CliDesignKind::Universal,
            ApiDesignKind::ExtendedEligibility => CliDesignKind::ExtendedEligibility,
        }
    }
}

impl From<CliDesignKind> for ApiDesignKind {
    fn from(value: CliDesignKind) -> Self {
        match value {
            CliDesignKind::Cliff => ApiDesignKind::Cliff,
            CliDesignKind::PhaseOut => ApiDesignKind::PhaseOut,
            CliDesignKind::Universal => ApiDesignKind::Universal,
            CliDesignKind::ExtendedEligibility => ApiDesignKind::ExtendedEligibility,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AnalyzePayload {
    design: Option<ApiDesignKind>,
    threshold: Option<f64>,
    benefit_amount: Option<f64>,
    phase_out_rate: Option<f64>,
    eligibility_extension: Option<f64>,
    grid_min: Option<f64>,
    grid_max: Option<f64>,
    grid_step: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TwoPeriodPayload {
    threshold: Option<f64>,
    benefit_amount: Option<f64>,
    extension_periods: Option<u32>,
    discount_rate: Option<f64>,
    grid_min: Option<f64>,
    grid_max: Option<f64>,
    grid_step: Option<f64>,
}

#[derive(Parser, Debug)]
#[command(
    name = "cliffs",
    about = "Benefit-cliffs analyzer (stylised designs, withdrawal measures, two-period capitalisation)"
)]
struct Cli {
    #[arg(long, value_enum, default_value_t = CliDesignKind::Cliff)]
    design: CliDesignKind,
    #[arg(long, default_value_t = 30_000.0)]
    threshold: f64,
    #[arg(long, default_value_t = 5_000.0)]
    benefit_amount: f64,
    #[arg(
        long,
        default_value_t = 50.0,
        help = "Benefit lost per dollar of income above the threshold, in percent"
    )]
    phase_out_rate: f64,
    #[arg(
        long,
        default_value_t = 10_000.0,
        help = "Extra income range over which the extended-eligibility design keeps the benefit"
    )]
    eligibility_extension: f64,
    #[arg(long, default_value_t = 0.0)]
    grid_min: f64,
    #[arg(long, default_value_t = 100_000.0)]
    grid_max: f64,
    #[arg(long, default_value_t = 500.0)]
    grid_step: f64,
    #[arg(
        long,
        default_value_t = 1,
        help = "Periods the benefit persists after initial qualification"
    )]
    extension_periods: u32,
    #[arg(long, default_value_t = 5.0, help = "Per-period discount rate in percent")]
    discount_rate: f64,
}

#[derive(Debug, Clone, Copy)]
struct AnalysisInputs {
    design_kind: CliDesignKind,
    threshold: f64,
    benefit_amount: f64,
    phase_out_rate: f64,
    eligibility_extension: f64,
    grid_min: f64,
    grid_max: f64,
    grid_step: f64,
}

#[derive(Debug, Clone, Copy)]
struct TwoPeriodInputs {
    threshold: f64,
    benefit_amount: f64,
    extension_periods: u32,
    discount_rate: f64,
    grid_min: f64,
    grid_max: f64,
    grid_step: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    design: ApiDesignKind,
    threshold: f64,
    benefit_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    phase_out_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    eligibility_extension: Option<f64>,
    income: Vec<f64>,
    benefit: Vec<f64>,
    net_income: Vec<f64>,
    mtr: Vec<f64>,
    cliff_gap: Vec<f64>,
    on_cliff: Vec<bool>,
    conservation_integral: f64,
    max_cliff_gap: f64,
    participation_tax_rate_at_grid_max: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct TwoPeriodResponse {
    threshold: f64,
    benefit_amount: f64,
    extension_periods: u32,
    discount_rate: f64,
    income: Vec<f64>,
    standard: TwoPeriodSeries,
    extended: ExtendedSeries,
    entry_cliff_size: f64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_analysis_inputs(cli: Cli) -> Result<AnalysisInputs, String> {
    if !cli.threshold.is_finite() || cli.threshold < 0.0 {
        return Err("--threshold must be >= 0".to_string());
    }
    if !cli.benefit_amount.is_finite() || cli.benefit_amount < 0.0 {
        return Err("--benefit-amount must be >= 0".to_string());
    }
    if cli.design == CliDesignKind::PhaseOut
        && (!cli.phase_out_rate.is_finite() || cli.phase_out_rate <= 0.0)
    {
        return Err("--phase-out-rate must be > 0 for the phase-out design".to_string());
    }
    if !cli.eligibility_extension.is_finite() || cli.eligibility_extension < 0.0 {
        return Err("--eligibility-extension must be >= 0".to_string());
    }
    validate_grid_spec(cli.grid_min, cli.grid_max, cli.grid_step)?;

    Ok(AnalysisInputs {
        design_kind: cli.design,
        threshold: cli.threshold,
        benefit_amount: cli.benefit_amount,
        phase_out_rate: cli.phase_out_rate / 100.0,
        eligibility_extension: cli.eligibility_extension,
        grid_min: cli.grid_min,
        grid_max: cli.grid_max,
        grid_step: cli.grid_step,
    })
}

fn build_two_period_inputs(cli: Cli) -> Result<TwoPeriodInputs, String> {
    if !cli.threshold.is_finite() || cli.threshold < 0.0 {
        return Err("--threshold must be >= 0".to_string());
    }
    if !cli.benefit_amount.is_finite() || cli.benefit_amount < 0.0 {
        return Err("--benefit-amount must be >= 0".to_string());
    }
    if cli.extension_periods < 1 {
        return Err("--extension-periods must be >= 1".to_string());
    }
    if !cli.discount_rate.is_finite() || cli.discount_rate < 0.0 {
        return Err("--discount-rate must be >= 0".to_string());
    }
    validate_grid_spec(cli.grid_min, cli.grid_max, cli.grid_step)?;

    Ok(TwoPeriodInputs {
        threshold: cli.threshold,
        benefit_amount: cli.benefit_amount,
        extension_periods: cli.extension_periods,
        discount_rate: cli.discount_rate / 100.0,
        grid_min: cli.grid_min,
        grid_max: cli.grid_max,
        grid_step: cli.grid_step,
    })
}

fn validate_grid_spec(grid_min: f64, grid_max: f64, grid_step: f64) -> Result<(), String> {
    if !grid_min.is_finite() || grid_min < 0.0 {
        return Err("--grid-min must be >= 0".to_string());
    }
    if !grid_max.is_finite() || grid_max <= grid_min {
        return Err("--grid-max must be greater than --grid-min".to_string());
    }
    if !grid_step.is_finite() || grid_step <= 0.0 {
        return Err("--grid-step must be > 0".to_string());
    }
    let points = ((grid_max - grid_min) / grid_step).floor() as u64 + 1;
    if points < 2 {
        return Err("--grid-step leaves fewer than 2 grid points".to_string());
    }
    if points > 1_000_000 {
        return Err("--grid-step produces more than 1,000,000 grid points".to_string());
    }
    Ok(())
}

fn build_income_grid(grid_min: f64, grid_max: f64, grid_step: f64) -> Vec<f64> {
    let mut grid = Vec::new();
    let mut idx: u64 = 0;
    loop {
        let income = grid_min + grid_step * idx as f64;
        if income > grid_max + grid_step * 1e-9 {
            break;
        }
        grid.push(income);
        idx += 1;
    }
    grid
}

fn design_from_inputs(inputs: &AnalysisInputs) -> Box<dyn BenefitDesign> {
    match inputs.design_kind {
        CliDesignKind::Cliff => Box::new(CliffDesign {
            threshold: inputs.threshold,
            benefit_amount: inputs.benefit_amount,
        }),
        CliDesignKind::PhaseOut => Box::new(PhaseOutDesign {
            threshold: inputs.threshold,
            benefit_amount: inputs.benefit_amount,
            phase_out_rate: inputs.phase_out_rate,
        }),
        CliDesignKind::Universal => Box::new(UniversalDesign {
            benefit_amount: inputs.benefit_amount,
        }),
        CliDesignKind::ExtendedEligibility => Box::new(ExtendedEligibilityDesign {
            threshold: inputs.threshold,
            benefit_amount: inputs.benefit_amount,
            extension: inputs.eligibility_extension,
        }),
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route(
            "/api/analyze",
            get(analyze_get_handler).post(analyze_post_handler),
        )
        .route(
            "/api/two-period",
            get(two_period_get_handler).post(two_period_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    println!("Benefit-cliffs HTTP API listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/api/analyze");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn analyze_get_handler(Query(payload): Query<AnalyzePayload>) -> Response {
    analyze_handler_impl(payload).await
}

async fn analyze_post_handler(Json(payload): Json<AnalyzePayload>) -> Response {
    analyze_handler_impl(payload).await
}

async fn analyze_handler_impl(payload: AnalyzePayload) -> Response {
    let inputs = match analysis_inputs_from_payload(payload) {
        Ok(inputs) => inputs,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    match build_analyze_response(&inputs) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

async fn two_period_get_handler(Query(payload): Query<TwoPeriodPayload>) -> Response {
    two_period_handler_impl(payload).await
}

async fn two_period_post_handler(Json(payload): Json<TwoPeriodPayload>) -> Response {
    two_period_handler_impl(payload).await
}

async fn two_period_handler_impl(payload: TwoPeriodPayload) -> Response {
    let inputs = match two_period_inputs_from_payload(payload) {
        Ok(inputs) => inputs,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    match build_two_period_response(&inputs) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn analysis_inputs_from_json(json: &str) -> Result<AnalysisInputs, String> {
    let payload = serde_json::from_str::<AnalyzePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    analysis_inputs_from_payload(payload)
}

fn analysis_inputs_from_payload(payload: AnalyzePayload) -> Result<AnalysisInputs, String> {
    let mut cli = default_cli_for_api();
    if let Some(v) = payload.design {
        cli.design = v.into();
    }
    if let Some(v) = payload.threshold {
        cli.threshold = v;
    }
    if let Some(v) = payload.benefit_amount {
        cli.benefit_amount = v;
    }
    if let Some(v) = payload.phase_out_rate {
        cli.phase_out_rate = v;
    }
    if let Some(v) = payload.eligibility_extension {
        cli.eligibility_extension = v;
    }
    if let Some(v) = payload.grid_min {
        cli.grid_min = v;
    }
    if let Some(v) = payload.grid_max {
        cli.grid_max = v;
    }
    if let Some(v) = payload.grid_step {
        cli.grid_step = v;
    }
    build_analysis_inputs(cli)
}

fn two_period_inputs_from_payload(payload: TwoPeriodPayload) -> Result<TwoPeriodInputs, String> {
    let mut cli = default_cli_for_api();
    if let Some(v) = payload.threshold {
        cli.threshold = v;
    }
    if let Some(v) = payload.benefit_amount {
        cli.benefit_amount = v;
    }
    if let Some(v) = payload.extension_periods {
        cli.extension_periods = v;
    }
    if let Some(v) = payload.discount_rate {
        cli.discount_rate = v;
    }
    if let Some(v) = payload.grid_min {
        cli.grid_min = v;
    }
    if let Some(v) = payload.grid_max {
        cli.grid_max = v;
    }
    if let Some(v) = payload.grid_step {
        cli.grid_step = v;
    }
    build_two_period_inputs(cli)
}

fn default_cli_for_api() -> Cli {
    Cli {
        design: CliDesignKind::Cliff,
        threshold: 30_000.0,
        benefit_amount: 5_000.0,
        phase_out_rate: 50.0,
        eligibility_extension: 10_000.0,
        grid_min: 0.0,
        grid_max: 100_000.0,
        grid_step: 500.0,
        extension_periods: 1,
        discount_rate: 5.0,
    }
}

fn build_analyze_response(inputs: &AnalysisInputs) -> Result<AnalyzeResponse, String> {
    let design = design_from_inputs(inputs);
    let income = build_income_grid(inputs.grid_min, inputs.grid_max, inputs.grid_step);
    let schedule = design.evaluate_grid(&income);
    let rates = mtr(&income, design.as_ref())?;
    let gaps = cliff_gap(&income, design.as_ref())?;
    let integral = conservation_integral(&income, design.as_ref())?;
    let on_cliff = is_on_cliff_series(&rates);
    let max_cliff_gap = gaps.iter().copied().fold(0.0_f64, f64::max);
    let ptr_at_grid_max = participation_tax_rate(inputs.grid_max, design.as_ref());

    Ok(AnalyzeResponse {
        design: inputs.design_kind.into(),
        threshold: inputs.threshold,
        benefit_amount: inputs.benefit_amount,
        phase_out_rate: (inputs.design_kind == CliDesignKind::PhaseOut)
            .then_some(inputs.phase_out_rate),
        eligibility_extension: (inputs.design_kind == CliDesignKind::ExtendedEligibility)
            .then_some(inputs.eligibility_extension),
        income,
        benefit: schedule.benefit,
        net_income: schedule.net_income,
        mtr: rates,
        cliff_gap: gaps,
        on_cliff,
        conservation_integral: integral,
        max_cliff_gap,
        participation_tax_rate_at_grid_max: ptr_at_grid_max,
    })
}

fn build_two_period_response(inputs: &TwoPeriodInputs) -> Result<TwoPeriodResponse, String> {
    let income = build_income_grid(inputs.grid_min, inputs.grid_max, inputs.grid_step);
    let standard = two_period_standard_series(
        &income,
        inputs.threshold,
        inputs.benefit_amount,
        inputs.discount_rate,
    );
    let extended = two_period_extended_series(
        &income,
        inputs.threshold,
        inputs.benefit_amount,
        inputs.extension_periods,
        inputs.discount_rate,
    )?;
    let entry_cliff = entry_cliff_size(
        inputs.benefit_amount,
        inputs.extension_periods,
        inputs.discount_rate,
    )?;

    Ok(TwoPeriodResponse {
        threshold: inputs.threshold,
        benefit_amount: inputs.benefit_amount,
        extension_periods: inputs.extension_periods,
        discount_rate: inputs.discount_rate,
        income,
        standard,
        extended,
        entry_cliff_size: entry_cliff,
    })
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

    fn sample_cli() -> Cli {
        default_cli_for_api()
    }

    #[test]
    fn build_analysis_inputs_converts_percent_rates() {
        let mut cli = sample_cli();
        cli.design = CliDesignKind::PhaseOut;
        cli.phase_out_rate = 50.0;

        let inputs = build_analysis_inputs(cli).expect("valid inputs");
        assert_approx(inputs.phase_out_rate, 0.5);
    }

    #[test]
    fn build_analysis_inputs_rejects_negative_benefit() {
        let mut cli = sample_cli();
        cli.benefit_amount = -1.0;
        let err = build_analysis_inputs(cli).expect_err("must reject negative benefit");
        assert!(err.contains("--benefit-amount"));
    }

    #[test]
    fn build_analysis_inputs_rejects_zero_phase_out_rate_for_phaseout_design() {
        let mut cli = sample_cli();
        cli.design = CliDesignKind::PhaseOut;
        cli.phase_out_rate = 0.0;
        let err = build_analysis_inputs(cli).expect_err("must reject zero rate");
        assert!(err.contains("--phase-out-rate"));
    }

    #[test]
    fn build_analysis_inputs_allows_zero_phase_out_rate_for_other_designs() {
        let mut cli = sample_cli();
        cli.design = CliDesignKind::Cliff;
        cli.phase_out_rate = 0.0;
        assert!(build_analysis_inputs(cli).is_ok());
    }

    #[test]
    fn build_analysis_inputs_rejects_inverted_grid_bounds() {
        let mut cli = sample_cli();
        cli.grid_min = 50_000.0;
        cli.grid_max = 10_000.0;
        let err = build_analysis_inputs(cli).expect_err("must reject inverted bounds");
        assert!(err.contains("--grid-max"));
    }

    #[test]
    fn build_analysis_inputs_rejects_zero_grid_step() {
        let mut cli = sample_cli();
        cli.grid_step = 0.0;
        let err = build_analysis_inputs(cli).expect_err("must reject zero step");
        assert!(err.contains("--grid-step"));
    }

    #[test]
    fn build_two_period_inputs_rejects_zero_extension_periods() {
        let mut cli = sample_cli();
        cli.extension_periods = 0;
        let err = build_two_period_inputs(cli).expect_err("must reject zero periods");
        assert!(err.contains("--extension-periods"));
    }

    #[test]
    fn build_two_period_inputs_converts_percent_discount_rate() {
        let mut cli = sample_cli();
        cli.discount_rate = 5.0;
        let inputs = build_two_period_inputs(cli).expect("valid inputs");
        assert_approx(inputs.discount_rate, 0.05);
    }

    #[test]
    fn analysis_inputs_from_json_parses_camel_case_keys() {
        let inputs = analysis_inputs_from_json(
            r#"{
                "design": "phase-out",
                "threshold": 25000,
                "benefitAmount": 4000,
                "phaseOutRate": 25,
                "gridMin": 0,
                "gridMax": 60000,
                "gridStep": 100
            }"#,
        )
        .expect("valid payload");
        assert_eq!(inputs.design_kind, CliDesignKind::PhaseOut);
        assert_approx(inputs.threshold, 25_000.0);
        assert_approx(inputs.benefit_amount, 4_000.0);
        assert_approx(inputs.phase_out_rate, 0.25);
        assert_approx(inputs.grid_max, 60_000.0);
        assert_approx(inputs.grid_step, 100.0);
    }

    #[test]
    fn analysis_inputs_from_json_accepts_snake_case_design_alias() {
        let inputs = analysis_inputs_from_json(r#"{ "design": "extended_eligibility" }"#)
            .expect("valid payload");
        assert_eq!(inputs.design_kind, CliDesignKind::ExtendedEligibility);
    }

    #[test]
    fn income_grid_includes_both_endpoints_for_an_even_span() {
        let grid = build_income_grid(0.0, 100_000.0, 500.0);
        assert_eq!(grid.len(), 201);
        assert_approx(grid[0], 0.0);
        assert_approx(*grid.last().expect("non-empty"), 100_000.0);
    }

    #[test]
    fn income_grid_drops_a_partial_final_step() {
        let grid = build_income_grid(0.0, 1_000.0, 300.0);
        assert_eq!(grid.len(), 4);
        assert_approx(*grid.last().expect("non-empty"), 900.0);
    }

    #[test]
    fn analyze_response_reports_the_cliff() {
        let inputs = build_analysis_inputs(sample_cli()).expect("valid inputs");
        let response = build_analyze_response(&inputs).expect("analysis must run");

        assert_eq!(response.income.len(), response.mtr.len());
        assert_eq!(response.income.len(), response.cliff_gap.len());
        assert_eq!(response.income.len(), response.on_cliff.len());
        assert!(response.on_cliff.iter().any(|&flag| flag));
        // Step-500 grid: the observed drop is benefit minus one step.
        assert_approx(response.max_cliff_gap, 4_500.0);
        assert!((response.conservation_integral - 5_000.0).abs() <= 250.0);
        assert_approx(response.participation_tax_rate_at_grid_max, 5_000.0 / 100_000.0);
    }

    #[test]
    fn analyze_response_serialization_contains_expected_fields() {
        let inputs = build_analysis_inputs(sample_cli()).expect("valid inputs");
        let response = build_analyze_response(&inputs).expect("analysis must run");
        let json = serde_json::to_value(&response).expect("serializable");

        for key in [
            "design",
            "threshold",
            "benefitAmount",
            "income",
            "benefit",
            "netIncome",
            "mtr",
            "cliffGap",
            "onCliff",
            "conservationIntegral",
            "maxCliffGap",
            "participationTaxRateAtGridMax",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["design"], "cliff");
        // Cliff design omits the parameters of the other designs.
        assert!(json.get("phaseOutRate").is_none());
        assert!(json.get("eligibilityExtension").is_none());
    }

    #[test]
    fn two_period_response_serialization_contains_expected_fields() {
        let mut cli = sample_cli();
        cli.extension_periods = 3;
        let inputs = build_two_period_inputs(cli).expect("valid inputs");
        let response = build_two_period_response(&inputs).expect("model must run");
        let json = serde_json::to_value(&response).expect("serializable");

        for key in [
            "threshold",
            "benefitAmount",
            "extensionPeriods",
            "discountRate",
            "income",
            "standard",
            "extended",
            "entryCliffSize",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(
            json["extended"]["extendedBenefits"]
                .as_array()
                .expect("array")
                .len(),
            3
        );
        assert!(json["standard"]["npv"].is_array());
    }

    #[test]
    fn two_period_response_entry_cliff_capitalises_every_guaranteed_period() {
        let mut cli = sample_cli();
        cli.extension_periods = 4;
        cli.discount_rate = 0.0;
        let inputs = build_two_period_inputs(cli).expect("valid inputs");
        let response = build_two_period_response(&inputs).expect("model must run");
        assert_approx(response.entry_cliff_size, 5.0 * 5_000.0);
    }
}
