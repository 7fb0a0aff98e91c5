//! neurosym CLI - Command-line interface for NeuroSymbolic Risk
//!
//! Commands:
//! - analyze: Score an indicator vector read from a file or stdin
//! - scenario: Score one of the preset scenarios
//! - fixtures: Check the preset scenarios' declared levels against the classifier
//! - rules: Print the diagnostic rule catalog
//! - catalog: Print the research indicator catalog
//! - validate: Check an indicator vector for missing or out-of-range values

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use neurosym_risk::catalog::RESEARCH_INDICATORS;
use neurosym_risk::coverage;
use neurosym_risk::rules::RULES;
use neurosym_risk::types::{InputCoverage, QualityFlag};
use neurosym_risk::{
    parse_indicators, ComputeError, FixtureCheck, RiskAnalyzer, RiskReport, Scenario,
    ScenarioKind, PRODUCER_NAME, VERSION,
};

/// neurosym - Neuro-symbolic cognitive decline risk scoring
#[derive(Parser)]
#[command(name = "neurosym")]
#[command(version = VERSION)]
#[command(about = "Score AI-usage cognitive decline risk from indicator vectors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an indicator vector (JSON object)
    Analyze {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Output format (defaults to text on a terminal, json otherwise)
        #[arg(long)]
        output_format: Option<OutputFormat>,

        /// Reject NaN and out-of-range indicator values
        #[arg(long)]
        strict: bool,

        /// Fixed producer instance id for the report
        #[arg(long)]
        instance_id: Option<String>,
    },

    /// Score a preset scenario (high, moderate or low)
    Scenario {
        /// Scenario name
        name: String,

        /// Output format (defaults to text on a terminal, json otherwise)
        #[arg(long)]
        output_format: Option<OutputFormat>,
    },

    /// Check the preset scenarios' declared levels against the classifier
    Fixtures {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the diagnostic rule catalog
    Rules {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the research indicator catalog
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate an indicator vector
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Compact JSON report
    Json,
    /// Pretty-printed JSON report
    JsonPretty,
    /// Human-readable summary
    Text,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `NEUROSYM_LOG` (default `warn`)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("NEUROSYM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn run(cli: Cli) -> Result<(), NeurosymCliError> {
    match cli.command {
        Commands::Analyze {
            input,
            output,
            output_format,
            strict,
            instance_id,
        } => cmd_analyze(&input, &output, output_format, strict, instance_id),

        Commands::Scenario {
            name,
            output_format,
        } => cmd_scenario(&name, output_format),

        Commands::Fixtures { json } => cmd_fixtures(json),

        Commands::Rules { json } => cmd_rules(json),

        Commands::Catalog { json } => cmd_catalog(json),

        Commands::Validate { input, json } => cmd_validate(&input, json),
    }
}

fn cmd_analyze(
    input: &Path,
    output: &Path,
    output_format: Option<OutputFormat>,
    strict: bool,
    instance_id: Option<String>,
) -> Result<(), NeurosymCliError> {
    let vector = parse_indicators(&read_input(input)?)?;

    if strict {
        vector.validate()?;
    }

    let analyzer = match instance_id {
        Some(id) => RiskAnalyzer::with_instance_id(id),
        None => RiskAnalyzer::new(),
    };
    let report = analyzer.report(&vector);

    let to_stdout = is_stdio(output);
    let format = resolve_format(output_format, to_stdout);
    let output_data = format_report(&report, &format)?;

    if to_stdout {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn cmd_scenario(name: &str, output_format: Option<OutputFormat>) -> Result<(), NeurosymCliError> {
    let kind: ScenarioKind = name.parse()?;
    let scenario = Scenario::get(kind);
    let report = RiskAnalyzer::new().report(&scenario.data);

    let format = resolve_format(output_format, true);
    if matches!(format, OutputFormat::Text) {
        println!("Scenario: {} ({})", scenario.name, kind);
        println!();
    }
    print!("{}", format_report(&report, &format)?);

    Ok(())
}

fn cmd_fixtures(json: bool) -> Result<(), NeurosymCliError> {
    let checks: Vec<FixtureCheck> = ScenarioKind::ALL
        .iter()
        .map(|kind| Scenario::get(*kind).verify())
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&checks)?);
        return Ok(());
    }

    println!("Fixture Check");
    println!("=============");
    for check in &checks {
        let status = if check.level_matches { "[OK]" } else { "[MISMATCH]" };
        println!(
            "  {} {}: declared {} ({:.3}), computed {} ({:.3})",
            status,
            check.kind,
            check.declared_risk_level.as_str(),
            check.declared_risk_score,
            check.computed_risk_level.as_str(),
            check.computed_risk_score
        );
    }

    Ok(())
}

fn cmd_rules(json: bool) -> Result<(), NeurosymCliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&RULES)?);
        return Ok(());
    }

    println!("Diagnostic Rules");
    println!("================");
    for rule in RULES.iter() {
        println!(
            "  {} (confidence {:.2}, activation {:.2}, +{:.2})",
            rule.rule_id, rule.confidence, rule.activation, rule.increment
        );
        println!("    {}", rule.description);
    }

    Ok(())
}

fn cmd_catalog(json: bool) -> Result<(), NeurosymCliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&RESEARCH_INDICATORS)?);
        return Ok(());
    }

    println!("Research Indicators");
    println!("===================");
    for indicator in RESEARCH_INDICATORS.iter() {
        println!(
            "  {:<34} {:.2}  {:<13} {}",
            indicator.name,
            indicator.weight,
            format!("{:?}", indicator.category).to_lowercase(),
            indicator.source
        );
    }

    Ok(())
}

fn cmd_validate(input: &Path, json: bool) -> Result<(), NeurosymCliError> {
    let vector = parse_indicators(&read_input(input)?)?;

    let validation = vector.validate();
    let report = ValidationReport {
        valid: validation.is_ok(),
        error: validation.err().map(|e| e.to_string()),
        coverage: coverage::assess(&vector),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Valid:    {}", report.valid);
        println!(
            "Coverage: {}/{} ({:.0}%)",
            report.coverage.present,
            report.coverage.expected,
            report.coverage.coverage * 100.0
        );

        if !report.coverage.flags.is_empty() {
            println!("\nFlags:");
            for flag in &report.coverage.flags {
                println!("  - {}", describe_flag(flag));
            }
        }
    }

    if report.valid {
        Ok(())
    } else {
        Err(NeurosymCliError::ValidationFailed(report.error.unwrap_or_default()))
    }
}

// Helper functions

fn is_stdio(path: &Path) -> bool {
    path.to_string_lossy() == "-"
}

fn read_input(input: &Path) -> Result<String, NeurosymCliError> {
    if is_stdio(input) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn resolve_format(requested: Option<OutputFormat>, to_stdout: bool) -> OutputFormat {
    match requested {
        Some(format) => format,
        None if to_stdout && atty::is(atty::Stream::Stdout) => OutputFormat::Text,
        None => OutputFormat::Json,
    }
}

fn format_report(report: &RiskReport, format: &OutputFormat) -> Result<String, NeurosymCliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(report)? + "\n"),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

fn render_text(report: &RiskReport) -> String {
    let analysis = &report.analysis;
    let mut out = String::new();

    out.push_str(&format!("Risk score:    {:.3}\n", analysis.risk_score));
    out.push_str(&format!("Risk level:    {}\n", analysis.risk_level.label()));
    out.push_str(&format!("Neural score:  {:.2}\n", analysis.neural_score));
    out.push_str(&format!("Rules fired:   {}\n", analysis.symbolic.fired_rules.len()));
    for rule in &analysis.symbolic.fired_rules {
        out.push_str(&format!("  - {} (activation {:.2})\n", rule.rule_id, rule.activation));
    }

    out.push_str("\nTop factors:\n");
    for factor in &analysis.top_factors {
        let marker = if factor.is_risk { " [!]" } else { "" };
        out.push_str(&format!("  - {}: {:.1}%{}\n", factor.name, factor.value * 100.0, marker));
    }

    out.push_str("\nRecommendations:\n");
    for recommendation in &analysis.recommendations {
        out.push_str(&format!("  - {}\n", recommendation));
    }

    out.push_str(&format!(
        "\nInput coverage: {}/{}\n",
        report.coverage.present, report.coverage.expected
    ));
    out
}

fn describe_flag(flag: &QualityFlag) -> String {
    match flag {
        QualityFlag::MissingIndicator(name) => format!("missing indicator {}", name),
        QualityFlag::MissingUsageFrequency => "missing usage_frequency".to_string(),
        QualityFlag::UnknownUsageFrequency => "unrecognized usage_frequency".to_string(),
        QualityFlag::OutOfRange(name) => format!("{} outside [0, 1]", name),
    }
}

// Error types

#[derive(Debug)]
enum NeurosymCliError {
    Io(io::Error),
    Compute(ComputeError),
    Json(serde_json::Error),
    ValidationFailed(String),
}

impl From<io::Error> for NeurosymCliError {
    fn from(e: io::Error) -> Self {
        NeurosymCliError::Io(e)
    }
}

impl From<ComputeError> for NeurosymCliError {
    fn from(e: ComputeError) -> Self {
        NeurosymCliError::Compute(e)
    }
}

impl From<serde_json::Error> for NeurosymCliError {
    fn from(e: serde_json::Error) -> Self {
        NeurosymCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
    producer: String,
}

impl From<NeurosymCliError> for CliError {
    fn from(e: NeurosymCliError) -> Self {
        let (code, message, hint) = match e {
            NeurosymCliError::Io(e) => (
                "IO_ERROR",
                e.to_string(),
                "Check file paths and permissions",
            ),
            NeurosymCliError::Compute(ComputeError::UnknownScenario(name)) => (
                "UNKNOWN_SCENARIO",
                format!("Unknown scenario: {}", name),
                "Use one of: high, moderate, low",
            ),
            NeurosymCliError::Compute(e @ ComputeError::InvalidIndicator { .. }) => (
                "INVALID_INDICATOR",
                e.to_string(),
                "Normalized indicators must lie in [0, 1]",
            ),
            NeurosymCliError::Compute(e) => (
                "PARSE_ERROR",
                e.to_string(),
                "Input must be a JSON object of indicator values",
            ),
            NeurosymCliError::Json(e) => ("JSON_ERROR", e.to_string(), "Check JSON syntax"),
            NeurosymCliError::ValidationFailed(message) => (
                "VALIDATION_FAILED",
                message,
                "Fix the reported indicator and retry",
            ),
        };

        CliError {
            code: code.to_string(),
            message,
            hint: Some(hint.to_string()),
            producer: PRODUCER_NAME.to_string(),
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    valid: bool,
    error: Option<String>,
    coverage: InputCoverage,
}
