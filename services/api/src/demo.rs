use crate::infra::{engine_from_table, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use foreclosure_advisor::error::AppError;
use foreclosure_advisor::workflows::foreclosure::{
    calculate_foreclosure_timeline, ForeclosureTimeline,
};
use foreclosure_advisor::workflows::valuation::{
    PropertyCondition, PropertyDetails, PropertyType, ValuationResult,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Five-digit ZIP code used to look up the price per square foot
    #[arg(long)]
    pub(crate) zip_code: String,
    /// single_family, condo, townhouse, or multi_family
    #[arg(long)]
    pub(crate) property_type: PropertyType,
    /// Finished living area in square feet
    #[arg(long)]
    pub(crate) square_feet: f64,
    #[arg(long, default_value_t = 3.0)]
    pub(crate) bedrooms: f64,
    /// Bathrooms; half baths count as 0.5
    #[arg(long, default_value_t = 2.0)]
    pub(crate) bathrooms: f64,
    /// excellent, good, fair, or poor
    #[arg(long)]
    pub(crate) condition: PropertyCondition,
    /// CSV price table overriding the built-in rates
    #[arg(long)]
    pub(crate) price_table: Option<PathBuf>,
    /// Print the raw JSON result instead of the formatted report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct TimelineArgs {
    /// Due date of the first missed mortgage payment (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) first_missed_payment: NaiveDate,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the raw JSON timeline instead of the formatted report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the reporting date (defaults to today).
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// CSV price table overriding the built-in rates
    #[arg(long)]
    pub(crate) price_table: Option<PathBuf>,
}

pub(crate) fn run_valuation_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let engine = engine_from_table(args.price_table.as_deref())?;
    let details = PropertyDetails {
        zip_code: args.zip_code,
        property_type: args.property_type,
        square_feet: args.square_feet,
        bedrooms: args.bedrooms,
        bathrooms: args.bathrooms,
        condition: args.condition,
    };

    let result = engine.estimate(&details);
    if args.json {
        print_json(&result)?;
    } else {
        render_valuation(&details, &result);
    }
    Ok(())
}

pub(crate) fn run_foreclosure_timeline(args: TimelineArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let timeline = calculate_foreclosure_timeline(args.first_missed_payment, today);

    if args.json {
        print_json(&timeline)?;
    } else {
        render_timeline(&timeline);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, price_table } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let engine = engine_from_table(price_table.as_deref())?;

    let details = sample_homeowner();
    let result = engine.estimate(&details);

    println!("Foreclosure advisor demo");
    println!("========================\n");
    render_valuation(&details, &result);

    let first_missed_payment = today
        .checked_sub_signed(chrono::Duration::days(75))
        .unwrap_or(today);
    println!();
    render_timeline(&calculate_foreclosure_timeline(first_missed_payment, today));

    Ok(())
}

fn sample_homeowner() -> PropertyDetails {
    PropertyDetails {
        zip_code: "75201".to_string(),
        property_type: PropertyType::SingleFamily,
        square_feet: 2_000.0,
        bedrooms: 4.0,
        bathrooms: 2.5,
        condition: PropertyCondition::Good,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

fn render_valuation(details: &PropertyDetails, result: &ValuationResult) {
    println!("Home valuation estimate");
    println!(
        "{} in {}: {} sq ft, {} bd / {} ba, {} condition",
        details.property_type.label(),
        details.zip_code,
        details.square_feet,
        details.bedrooms,
        details.bathrooms,
        details.condition.label()
    );

    if result.zip_code_found {
        println!("Price per sq ft: ${:.0}", result.price_per_sq_ft);
    } else {
        println!(
            "Price per sq ft: ${:.0} (ZIP not in price table, using default)",
            result.price_per_sq_ft
        );
    }

    println!("\nEstimated value: {}", dollars(result.estimated_value));
    println!(
        "Range: {} - {}",
        dollars(result.valuation_range.low),
        dollars(result.valuation_range.high)
    );
    println!("Confidence: {}", result.confidence.label());

    let breakdown = &result.breakdown;
    println!("\nBreakdown");
    println!("- Base value: {}", dollars(breakdown.base_value));
    println!("- Property type: {}", dollars(breakdown.type_adjustment));
    println!("- Condition: {}", dollars(breakdown.condition_adjustment));
    println!("- Bedrooms: {}", dollars(breakdown.bedroom_adjustment));
    println!("- Bathrooms: {}", dollars(breakdown.bathroom_adjustment));
}

fn render_timeline(timeline: &ForeclosureTimeline) {
    println!("Foreclosure timeline (Texas non-judicial)");
    println!(
        "First missed payment {} (evaluated {})",
        timeline.first_missed_payment, timeline.evaluated_on
    );

    println!("\nMilestones");
    for milestone in &timeline.milestones {
        println!(
            "- {} | {} | {}",
            milestone.date, milestone.stage_label, milestone.status_label
        );
    }

    if timeline.days_until_sale >= 0 {
        println!(
            "\nEstimated sale date: {} ({} days away)",
            timeline.estimated_sale_date, timeline.days_until_sale
        );
    } else {
        println!(
            "\nEstimated sale date: {} ({} days ago)",
            timeline.estimated_sale_date, -timeline.days_until_sale
        );
    }
    println!("Urgency: {}", timeline.urgency_label);

    println!("\nRecommended next steps");
    for action in &timeline.recommended_actions {
        println!("- {action}");
    }
}

fn dollars(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
