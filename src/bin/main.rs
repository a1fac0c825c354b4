use std::fs;
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use graphical_lp::algorithm::{solve_program, SolveOutcome};
use graphical_lp::config::{Config, PivotRuleKind};
use graphical_lp::io::import;
use graphical_lp::io::json::RenderData;

/// Solve small linear programs by vertex enumeration and the Simplex method.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description
    problem_file: PathBuf,
    /// Tolerance for feasibility tests and signs of tableau entries
    #[arg(long, default_value_t = 1e-9, value_parser = positive_tolerance)]
    epsilon: f64,
    /// Maximum number of Simplex pivots
    #[arg(long, default_value_t = 1_000)]
    max_iterations: usize,
    /// Vertices agreeing up to this many decimals are merged
    #[arg(long, default_value_t = 3)]
    dedup_decimals: u32,
    /// Number of decimals in the printed results
    #[arg(long, default_value_t = 2)]
    display_decimals: usize,
    /// Column selection rule of the Simplex method
    #[arg(long, value_enum, default_value_t = PivotRule::MostNegative)]
    pivot_rule: PivotRule,
    /// Print every intermediate Simplex tableau
    #[arg(long)]
    tableaus: bool,
    /// Write the data needed to plot the solved problem to this JSON file
    #[arg(long)]
    render: Option<PathBuf>,
    /// Increase logging verbosity, can be repeated
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, ValueEnum)]
enum PivotRule {
    MostNegative,
    FirstProfitable,
}

impl From<PivotRule> for PivotRuleKind {
    fn from(rule: PivotRule) -> Self {
        match rule {
            PivotRule::MostNegative => PivotRuleKind::MostNegative,
            PivotRule::FirstProfitable => PivotRuleKind::FirstProfitable,
        }
    }
}

fn main() {
    let opts: Opts = Opts::parse();

    let level = match opts.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Could not install the logger, continuing without logging.");
    }

    let config = Config::default()
        .with_epsilon(opts.epsilon)
        .with_max_iterations(opts.max_iterations)
        .with_dedup_decimals(opts.dedup_decimals)
        .with_display_decimals(opts.display_decimals)
        .with_record_tableaus(opts.tableaus)
        .with_pivot_rule(opts.pivot_rule.into());

    let path = opts.problem_file.as_path();
    println!("Reading problem file: \"{}\"...", path.to_string_lossy());
    let program = match import(path) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("Couldn't read the problem: {}", error);
            exit(1);
        },
    };

    println!("{}", program.objective());
    for constraint in program.constraints() {
        println!("    {}", constraint);
    }

    println!("Solving...");
    let report = solve_program(&program, &config);

    if opts.tableaus {
        for (index, tableau) in report.tableaus.iter().enumerate() {
            println!("Tableau {}:\n{}", index, tableau);
        }
    }
    if let Some(iterations) = report.iterations {
        println!("Simplex iterations: {}", iterations);
    }
    if let SolveOutcome::Optimal { vertices, .. } = &report.outcome {
        println!("Feasible vertices:");
        for vertex in vertices {
            println!("    {:.*}", config.display_decimals, vertex);
        }
    }
    println!("{}", report.outcome.summary(config.display_decimals));

    if let Some(render_path) = &opts.render {
        if let Err(message) = write_render_data(render_path, &RenderData::new(&program, &report.outcome, config.display_decimals)) {
            eprintln!("{}", message);
            exit(1);
        }
    }

    if matches!(report.outcome, SolveOutcome::Error(_)) {
        exit(2);
    }
}

/// Parse a tolerance, which needs to be a finite, strictly positive number.
fn positive_tolerance(text: &str) -> Result<f64, String> {
    let value: f64 = text.parse()
        .map_err(|error| format!("\"{}\" is not a number: {}", text, error))?;
    if value.is_finite() && value > 0_f64 {
        Ok(value)
    } else {
        Err(format!("the tolerance should be a positive number, got {}", value))
    }
}

fn write_render_data(path: &Path, data: &RenderData) -> Result<(), String> {
    let text = data.to_json()
        .map_err(|error| format!("Couldn't serialize the render data: {}", error))?;
    fs::write(path, text)
        .map_err(|error| format!("Couldn't write \"{}\": {}", path.to_string_lossy(), error))
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use crate::{Opts, positive_tolerance};

    #[test]
    fn tolerance() {
        assert_eq!(positive_tolerance("1e-6"), Ok(1e-6));
        assert!(positive_tolerance("0").is_err());
        assert!(positive_tolerance("-1e-9").is_err());
        assert!(positive_tolerance("inf").is_err());
        assert!(positive_tolerance("NaN").is_err());
        assert!(positive_tolerance("small").is_err());
    }

    #[test]
    fn rejects_non_positive_epsilon() {
        assert!(Opts::try_parse_from(["graphical-lp", "problem.json", "--epsilon", "0"]).is_err());
        assert!(Opts::try_parse_from(["graphical-lp", "problem.json", "--epsilon=-1"]).is_err());

        let opts = Opts::try_parse_from(["graphical-lp", "problem.json"]).unwrap();
        assert_eq!(opts.epsilon, 1e-9);
    }
}
