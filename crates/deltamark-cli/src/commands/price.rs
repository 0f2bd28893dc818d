//! Price command implementation.
//!
//! Builds a zero curve and a floating-rate bond from the arguments and
//! prints the discounted net present value.

use anyhow::Result;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

use deltamark_bonds::{
    CalendarId, DiscountingEngine, FixingStore, FloatingRateBond, FloatingRateBondSpec, RateIndex,
};
use deltamark_core::{Compounding, Date, Frequency};
use deltamark_curves::{ZeroCurve, ZeroCurveSpec};

use crate::cli::OutputFormat;
use crate::commands::{parse_date, parse_percent, parse_tenor};
use crate::error::CliError;
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Valuation date (YYYY-MM-DD); also the curve reference date
    #[arg(short, long)]
    pub evaluation_date: String,

    /// Issue date (YYYY-MM-DD)
    #[arg(short, long)]
    pub issue: String,

    /// Maturity date (YYYY-MM-DD)
    #[arg(short, long)]
    pub maturity: String,

    /// Curve pillar tenors from the valuation date (comma-separated)
    #[arg(long, default_value = "6m,1y,2y,5y")]
    pub tenors: String,

    /// Zero rates in percent matching the tenors (comma-separated)
    #[arg(short, long)]
    pub rates: String,

    /// Historical index fixing as DATE=RATE in percent; repeatable
    #[arg(long = "fixing")]
    pub fixings: Vec<String>,

    /// Spread over the index in basis points
    #[arg(long, default_value = "0")]
    pub spread_bps: i64,

    /// Face value
    #[arg(long, default_value = "100")]
    pub face: f64,

    /// Coupon frequency: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long, default_value = "2")]
    pub frequency: u32,

    /// Settlement lag in business days
    #[arg(long, default_value = "3")]
    pub settlement_days: u32,

    /// Calendar for schedule and settlement adjustments
    #[arg(long, value_enum, default_value = "target")]
    pub calendar: CalendarChoice,

    /// Also print the projected cash flows
    #[arg(long)]
    pub show_flows: bool,
}

/// Calendar choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalendarChoice {
    /// Eurozone TARGET calendar
    Target,
    /// Weekends only
    Weekend,
}

impl From<CalendarChoice> for CalendarId {
    fn from(choice: CalendarChoice) -> Self {
        match choice {
            CalendarChoice::Target => CalendarId::Target,
            CalendarChoice::Weekend => CalendarId::Weekend,
        }
    }
}

/// Execute the price command.
pub fn execute(args: PriceArgs, format: OutputFormat) -> Result<()> {
    let evaluation_date = parse_date(&args.evaluation_date)?;
    let issue = parse_date(&args.issue)?;
    let maturity = parse_date(&args.maturity)?;

    let (frequency, compounding) = match args.frequency {
        1 => (Frequency::Annual, Compounding::Annual),
        2 => (Frequency::SemiAnnual, Compounding::SemiAnnual),
        4 => (Frequency::Quarterly, Compounding::Quarterly),
        12 => (Frequency::Monthly, Compounding::Monthly),
        other => {
            return Err(anyhow::anyhow!(
                "Invalid frequency: {other}. Use 1, 2, 4, or 12."
            ))
        }
    };

    let curve = build_curve(&args, evaluation_date, compounding)?;
    let fixings = build_fixings(&args)?;

    let tenor_months = frequency.months_per_period();
    let index = if tenor_months == 6 {
        RateIndex::euribor_6m()
    } else {
        RateIndex::ibor(tenor_months)
    };

    let face = Decimal::from_f64_retain(args.face)
        .ok_or_else(|| anyhow::anyhow!("Invalid face value: {}", args.face))?;

    let mut spec = FloatingRateBondSpec::new(issue, maturity, index);
    spec.settlement_days = args.settlement_days;
    spec.face_value = face;
    spec.frequency = frequency;
    spec.spread = Decimal::from(args.spread_bps) / Decimal::from(10_000);
    spec.calendar = args.calendar.into();
    let bond = FloatingRateBond::new(spec)?;

    let engine = DiscountingEngine::new();
    let npv = engine.npv(&bond, &curve, &fixings, evaluation_date)?;

    let mut results = Vec::new();
    results.push(KeyValue::new("Bond Type", "Floating Rate"));
    results.push(KeyValue::new("Index", bond.index().name()));
    results.push(KeyValue::new("Face", face.to_string()));
    results.push(KeyValue::new("Issue", issue.to_string()));
    results.push(KeyValue::new("Maturity", maturity.to_string()));
    results.push(KeyValue::new("Frequency", frequency.to_string()));
    results.push(KeyValue::new("Valuation Date", evaluation_date.to_string()));
    results.push(KeyValue::new(
        "Settlement",
        bond.settlement_date(evaluation_date).to_string(),
    ));
    results.push(KeyValue::new("NPV", npv.round_dp(6).to_string()));

    print_header("Bond Valuation", format);
    print_output(&results, format)?;

    if args.show_flows {
        let flows = engine.cash_flows(&bond, &curve, &fixings, evaluation_date)?;
        let rows: Vec<KeyValue> = flows
            .iter()
            .map(|flow| {
                KeyValue::new(
                    flow.payment_date.to_string(),
                    format!(
                        "{:?} amount {} df {} pv {}",
                        flow.kind,
                        flow.amount.round_dp(6),
                        flow.discount_factor.round_dp(8),
                        flow.present_value.round_dp(6)
                    ),
                )
            })
            .collect();

        print_header("Cash Flows", format);
        print_output(&rows, format)?;
    }

    Ok(())
}

/// Builds the zero curve from the tenor and rate lists.
fn build_curve(
    args: &PriceArgs,
    reference_date: Date,
    compounding: Compounding,
) -> Result<ZeroCurve> {
    let tenors: Vec<u32> = args
        .tenors
        .split(',')
        .map(parse_tenor)
        .collect::<Result<_, _>>()?;
    let rates: Vec<Decimal> = args
        .rates
        .split(',')
        .map(parse_percent)
        .collect::<Result<_, _>>()?;

    if tenors.len() != rates.len() {
        return Err(anyhow::anyhow!(
            "{} tenors but {} rates",
            tenors.len(),
            rates.len()
        ));
    }

    let mut pillars = Vec::with_capacity(tenors.len());
    for (months, rate) in tenors.into_iter().zip(rates) {
        pillars.push((reference_date.add_months(months as i32)?, rate));
    }

    Ok(ZeroCurve::new(ZeroCurveSpec {
        reference_date,
        pillars,
        day_count: deltamark_core::daycounts::DayCountConvention::Act360,
        compounding,
    })?)
}

/// Parses the repeatable `--fixing DATE=RATE` arguments.
fn build_fixings(args: &PriceArgs) -> Result<FixingStore> {
    let mut store = FixingStore::new();
    for raw in &args.fixings {
        let (date_part, rate_part) = raw
            .split_once('=')
            .ok_or_else(|| CliError::InvalidFixing(raw.clone()))?;
        let date = parse_date(date_part.trim())?;
        let rate = parse_percent(rate_part)?;
        store.add_fixing(date, rate, false)?;
    }
    Ok(store)
}
