//! Classification and analysis commands

use anyhow::Result;
use serde::Serialize;
use spendwise_core::{
    classify_price_trend, forecast_next, BehaviorAnalyzer, ClassificationSource, Config,
    PersonalityAnalyzer, Trend,
};

use super::{open_engine, parse_distribution, print_json};

#[derive(Serialize)]
struct ForecastOutput {
    predicted_expense: f64,
}

pub fn cmd_classify(config: &Config, description: &str, json: bool) -> Result<()> {
    let engine = open_engine(config)?;
    let result = engine.classify(description);

    if json {
        return print_json(&result);
    }

    let via = match result.source {
        ClassificationSource::Keyword => "keyword match",
        ClassificationSource::Model => "classifier",
        ClassificationSource::Fallback => "no usable classifier",
    };
    println!("🏷️  {} ({})", result.label, via);
    Ok(())
}

pub fn cmd_forecast(amounts: &[f64], json: bool) -> Result<()> {
    let predicted = forecast_next(amounts);

    if json {
        return print_json(&ForecastOutput {
            predicted_expense: predicted,
        });
    }

    println!("📈 Next month: {:.2}", predicted);
    if amounts.len() < 2 {
        println!("   (fewer than two months; no trend fitted)");
    }
    Ok(())
}

pub fn cmd_price(prices: &[f64], json: bool) -> Result<()> {
    let forecast = classify_price_trend(prices);

    if json {
        return print_json(&forecast);
    }

    let arrow = match forecast.trend {
        Trend::Increasing => "↗",
        Trend::Decreasing => "↘",
        Trend::Stable => "→",
    };
    println!(
        "💲 Next price: {:.2} {} {}",
        forecast.predicted, arrow, forecast.trend
    );
    Ok(())
}

pub fn cmd_behavior(entries: &[String], json: bool) -> Result<()> {
    let dist = parse_distribution(entries)?;
    let analysis = BehaviorAnalyzer::new().analyze(&dist);

    if json {
        return print_json(&analysis);
    }

    println!("🧭 Behavior: {}", analysis.behavior);
    if let (Some(stable), Some(variable)) = (analysis.stable_percent, analysis.variable_percent) {
        println!("   Stable:   {:>5.1}%", stable);
        println!("   Variable: {:>5.1}%", variable);
    }
    for tag in &analysis.tags {
        println!("   • {}", tag);
    }
    Ok(())
}

pub fn cmd_personality(
    entries: &[String],
    total: Option<f64>,
    months: u32,
    json: bool,
) -> Result<()> {
    let dist = parse_distribution(entries)?;
    let total = total.unwrap_or_else(|| dist.total());
    let profile = PersonalityAnalyzer::new().analyze(&dist, total, months);

    if json {
        return print_json(&profile);
    }

    println!("{} {}", profile.emoji, profile.persona);
    println!("   {}", profile.description);
    println!("   💡 {}", profile.advice);
    Ok(())
}
