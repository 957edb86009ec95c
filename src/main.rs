use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nutri_grade_rs::cli::{Cli, Command, ScoreArgs};
use nutri_grade_rs::compare::{compare_batch, load_rows};
use nutri_grade_rs::config::{load_rules_or_default, save_rules};
use nutri_grade_rs::error::{Result, ScoreError};
use nutri_grade_rs::interface::{
    display_comparison, display_rules, display_score, display_thresholds,
    display_validation_errors,
};
use nutri_grade_rs::models::ScoreType;
use nutri_grade_rs::scoring::NutritionalScorer;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run(cli) {
        match &e {
            ScoreError::Validation(errors) => display_validation_errors(errors),
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let rules_path = cli.rules.as_deref();

    match cli.command {
        Command::Score(args) => cmd_score(rules_path, &args),
        Command::Compare { file, json } => cmd_compare(rules_path, &file, json),
        Command::Grades => {
            display_thresholds();
            Ok(())
        }
        Command::Rules { write } => cmd_rules(rules_path, write.as_deref()),
    }
}

fn build_scorer(rules_path: Option<&Path>) -> Result<NutritionalScorer> {
    let rules = load_rules_or_default(rules_path)?;
    NutritionalScorer::with_rules(rules)
}

/// Score one item from command-line values.
fn cmd_score(rules_path: Option<&Path>, args: &ScoreArgs) -> Result<()> {
    let scorer = build_scorer(rules_path)?;
    let data = args.data();
    let score_type = ScoreType::from(args.category);

    tracing::debug!("Scoring {} as {}", data.debug_string(), score_type);
    let score = scorer.calculate(data, score_type)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&score)?);
        return Ok(());
    }

    let breakdown = if args.breakdown && score_type != ScoreType::Water {
        Some(scorer.breakdown(&data)?)
    } else {
        None
    };
    display_score(&score, &data, breakdown.as_ref());
    Ok(())
}

/// Score and rank every row in a CSV file.
fn cmd_compare(rules_path: Option<&Path>, file: &Path, json: bool) -> Result<()> {
    if !file.exists() {
        return Err(ScoreError::InvalidInput(format!(
            "file not found: {}",
            file.display()
        )));
    }

    let scorer = build_scorer(rules_path)?;
    let batch = load_rows(file)?;
    let comparison = compare_batch(&scorer, &batch);

    tracing::debug!(
        "Ranked {} item(s), rejected {}",
        comparison.ranked.len(),
        comparison.rejected.len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        display_comparison(&comparison);
    }
    Ok(())
}

/// Print or export the effective validation ranges.
fn cmd_rules(rules_path: Option<&Path>, write: Option<&Path>) -> Result<()> {
    let rules = load_rules_or_default(rules_path)?;

    match write {
        Some(path) => {
            save_rules(path, &rules)?;
            println!("Validation ranges written to {}", path.display());
        }
        None => display_rules(&rules),
    }
    Ok(())
}
