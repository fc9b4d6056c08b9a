//! Output formatting for CLI responses

use anyhow::Error;
use bedcomp_probe::{FitSummary, HeightStatistics, ObjectModel, ProbePoint};
use colored::*;
use serde_json::{Value, json};

use crate::error::CliError;
use crate::session::Query;

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format output as JSON: {e}"),
    }
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let kind = match error.downcast_ref::<CliError>() {
        Some(CliError::NotReady(_)) => "not_ready",
        Some(CliError::FitRejected(_)) => "fit_rejected",
        Some(CliError::InvalidSession(_) | CliError::JsonError(_) | CliError::YamlError(_)) => {
            "invalid_session"
        }
        Some(CliError::IoError(_)) => "io",
        None => "other",
    };
    print_json(&json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": kind,
        }
    }));
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

pub fn print_fit(summary: &FitSummary, json: bool) {
    if json {
        print_json(&json!({
            "success": true,
            "fit": summary.fit(),
            "points": summary.points(),
            "reply": summary.to_string(),
            "deprecation_notice": summary.deprecation_notice(),
        }));
    } else {
        println!("{summary}");
    }
}

pub fn print_heights(reply: &str, stats: &HeightStatistics, json: bool) {
    if json {
        print_json(&json!({
            "success": true,
            "statistics": stats,
            "reply": reply,
        }));
    } else {
        println!("{reply}");
    }
}

pub fn print_height_errors(results: &[(Query, f32)], json: bool) {
    if json {
        let rows: Vec<Value> = results
            .iter()
            .map(|(q, h)| json!({ "x": q.x, "y": q.y, "height_error": h }))
            .collect();
        print_json(&json!({ "success": true, "queries": rows }));
        return;
    }

    if results.is_empty() {
        println!("{}", "No query points given".yellow());
        return;
    }
    for (q, h) in results {
        println!("X{:.1} Y{:.1} height error {:.3}", q.x, q.y, h);
    }
}

pub fn print_status(
    points: &[ProbePoint],
    ready: usize,
    good: bool,
    object_model: &ObjectModel,
    json: bool,
) {
    if json {
        print_json(&json!({
            "success": true,
            "numPointsReady": ready,
            "good": good,
            "objectModel": object_model,
            "points": points,
        }));
        return;
    }

    let readiness = if good {
        "ready to fit".green()
    } else {
        "not ready".red()
    };
    println!(
        "{} {} of {} points probed, {}",
        "Probe points:".bold(),
        ready,
        points.len(),
        readiness
    );
    for (i, p) in points.iter().enumerate() {
        let state = if !p.is_complete() {
            "not set".dimmed()
        } else if p.has_probe_error() {
            "probing failed".red()
        } else {
            format!("{:.3}", p.z).normal()
        };
        println!("  P{i} [{:.1}, {:.1}] {}", p.x, p.y, state);
    }
    println!(
        "{} {}",
        "Active compensation points:".bold(),
        object_model.num_points_probed
    );
}
