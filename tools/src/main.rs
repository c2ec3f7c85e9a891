//! report-runner: headless analysis runner for BizRadar.
//!
//! Usage:
//!   report-runner --requests requests.json
//!   report-runner --demo
//!   report-runner --demo --strategy weighted --json

use anyhow::{Context, Result};
use bizradar_core::matrix::{ComparativeStrategy, RankingStrategy, WeightedMatrixStrategy};
use bizradar_core::report::{self, FeasibilityReport, ReportIdentity};
use bizradar_core::types::CompetitionDensity;
use bizradar_core::MarketSignal;
use std::env;
use std::fs;

/// One analysis request, as supplied in the requests file.
#[derive(serde::Deserialize)]
struct AnalysisRequest {
    location: String,
    category: String,
    market: MarketSignal,
    #[serde(default)]
    forecast_growth: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let demo = args.iter().any(|a| a == "--demo");
    let as_json = args.iter().any(|a| a == "--json");
    let strategy_name = args
        .windows(2)
        .find(|w| w[0] == "--strategy")
        .map(|w| w[1].as_str())
        .unwrap_or("comparative");
    let requests_path = args
        .windows(2)
        .find(|w| w[0] == "--requests")
        .map(|w| w[1].as_str());

    let requests = if demo {
        demo_requests()
    } else if let Some(path) = requests_path {
        let raw = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?
    } else {
        eprintln!("Usage: report-runner --requests <file.json> | --demo [--strategy weighted] [--json]");
        std::process::exit(2);
    };

    let reports: Vec<FeasibilityReport> = requests
        .into_iter()
        .map(|req| {
            let (built, _) = report::analyze(
                ReportIdentity::generate(),
                &req.location,
                &req.category,
                req.market,
                req.forecast_growth,
            );
            built
        })
        .collect();

    if !as_json {
        for built in &reports {
            println!("{}", report::summary(built));
            println!();
        }
    }

    if reports.len() < 2 {
        log::info!("single report, skipping decision matrix");
        if as_json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        return Ok(());
    }

    let strategy: Box<dyn RankingStrategy> = match strategy_name {
        "weighted" => Box::new(WeightedMatrixStrategy::default()),
        _ => Box::new(ComparativeStrategy::default()),
    };
    let result = strategy.rank(&reports)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("=== DECISION MATRIX ({}) ===", strategy.name());
    for ranked in &result.ranking {
        println!(
            "  #{} {} ({}) | score {:.0} | {}",
            ranked.rank, ranked.location, ranked.category, ranked.score, ranked.label
        );
        for s in &ranked.strengths {
            println!("       + {s}");
        }
        for c in &ranked.concerns {
            println!("       - {c}");
        }
    }
    println!();
    println!("=== INSIGHTS ===");
    for insight in &result.insights {
        println!("  * {insight}");
    }

    Ok(())
}

/// Three contrasting scenarios for a quick end-to-end look.
fn demo_requests() -> Vec<AnalysisRequest> {
    vec![
        AnalysisRequest {
            location: "Indiranagar, Bangalore".to_string(),
            category: "Cafe".to_string(),
            market: MarketSignal {
                demand_index: 75.0,
                competition_density: CompetitionDensity::Balanced,
                competition_index: 50.0,
                competition_count: 140,
                population_density: 6000.0,
                avg_income: 6.2,
                internet_penetration: 82.0,
                literacy_rate: 89.0,
            },
            forecast_growth: Some(1.15),
        },
        AnalysisRequest {
            location: "Koramangala, Bangalore".to_string(),
            category: "Restaurant".to_string(),
            market: MarketSignal {
                demand_index: 68.0,
                competition_density: CompetitionDensity::Oversaturated,
                competition_index: 85.0,
                competition_count: 310,
                population_density: 9500.0,
                avg_income: 7.0,
                internet_penetration: 85.0,
                literacy_rate: 90.0,
            },
            forecast_growth: Some(1.1),
        },
        AnalysisRequest {
            location: "Whitefield, Bangalore".to_string(),
            category: "Tutoring Center".to_string(),
            market: MarketSignal {
                demand_index: 62.0,
                competition_density: CompetitionDensity::Low,
                competition_index: 25.0,
                competition_count: 18,
                population_density: 4200.0,
                avg_income: 5.1,
                internet_penetration: 78.0,
                literacy_rate: 91.0,
            },
            forecast_growth: Some(1.2),
        },
    ]
}
