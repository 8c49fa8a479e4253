mod aggregation;
mod error;
mod input;
mod logging;
mod methods;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info, warn};

use crate::error::{McdmError, Result};
use crate::input::{TableFormat, load_decision_matrix, load_ranked_table};
use crate::model::criteria::{CriteriaProfile, VikorOrder};
use crate::model::ranking::MethodKind;
use crate::pipeline::stage3_methods::run_stage3;
use crate::pipeline::stage4_collect::{collect_method_results, collect_ranked_tables};
use crate::pipeline::stage5_aggregate::run_stage5;
use crate::pipeline::stage6_report::{Stage6Input, write_reports};
use crate::report::json::SummaryData;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Parser)]
#[command(
    name = "mcdm-consensus",
    version,
    about = "Rank stocks with six MCDM methods and aggregate the rankings into a consensus"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and rank a decision matrix with each MCDM method.
    Rank(RankArgs),
    /// Combine exported method result tables into consensus rankings.
    Aggregate(AggregateArgs),
    /// Rank a decision matrix and aggregate the rankings in one pass.
    Run(RankArgs),
    /// Write the default criteria profile as JSON.
    Profile(ProfileArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Tsv,
}

impl From<OutputFormat> for TableFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Csv => TableFormat::Csv,
            OutputFormat::Tsv => TableFormat::Tsv,
        }
    }
}

#[derive(Debug, Args)]
struct RankArgs {
    /// Decision matrix table (Symbol, Shortname, criteria columns).
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Criteria profile JSON; defaults to the built-in eight-criterion profile.
    #[arg(long)]
    profile: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
    /// Comma-separated subset of methods; all six when omitted.
    #[arg(long, value_delimiter = ',')]
    methods: Vec<MethodKind>,
    /// WASPAS weighting coefficient.
    #[arg(long)]
    lambda: Option<f64>,
    /// VIKOR strategy weight.
    #[arg(long = "vikor-v")]
    vikor_v: Option<f64>,
    /// Rank VIKOR by descending Q instead of ascending.
    #[arg(long)]
    vikor_higher_is_better: bool,
    /// Rescale profile weights to sum to one before ranking.
    #[arg(long)]
    normalize_weights: bool,
}

#[derive(Debug, Args)]
struct AggregateArgs {
    /// Method result tables with Symbol, Shortname and Rank columns.
    #[arg(long, num_args = 1.., required = true)]
    results: Vec<PathBuf>,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct ProfileArgs {
    #[arg(long)]
    out: PathBuf,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Rank(args) => {
            let config = build_config(&args)?;
            run_pipeline(&config, false)?;
        }
        Command::Run(args) => {
            let config = build_config(&args)?;
            run_pipeline(&config, true)?;
        }
        Command::Aggregate(args) => {
            run_aggregate(&args.results, &args.out, args.format.into())?;
        }
        Command::Profile(args) => {
            write_default_profile(&args.out)?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone)]
struct RunConfig {
    input: PathBuf,
    out_dir: PathBuf,
    profile: CriteriaProfile,
    methods: Vec<MethodKind>,
    format: TableFormat,
}

fn build_config(args: &RankArgs) -> Result<RunConfig> {
    let mut profile = match &args.profile {
        Some(path) => CriteriaProfile::load(path)?,
        None => CriteriaProfile::default_v1(),
    };
    if args.normalize_weights {
        profile = profile.normalized()?;
    }
    if let Some(lambda) = args.lambda {
        profile.lambda = lambda;
    }
    if let Some(v) = args.vikor_v {
        profile.v = v;
    }
    if args.vikor_higher_is_better {
        profile.vikor_order = VikorOrder::HigherIsBetter;
    }
    profile.validate()?;

    let total = profile.total_weight();
    if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        warn!(
            "criterion weights sum to {:.6}; engines use them as given (see --normalize-weights)",
            total
        );
    }

    let methods = if args.methods.is_empty() {
        MethodKind::ALL.to_vec()
    } else {
        MethodKind::ALL
            .into_iter()
            .filter(|m| args.methods.contains(m))
            .collect()
    };

    Ok(RunConfig {
        input: args.input.clone(),
        out_dir: args.out.clone(),
        profile,
        methods,
        format: args.format.into(),
    })
}

fn run_pipeline(config: &RunConfig, aggregate: bool) -> Result<SummaryData> {
    let matrix = load_decision_matrix(&config.input, &config.profile)?;
    let stage3 = run_stage3(&matrix, &config.profile, &config.methods);
    info!(
        "{} of {} methods succeeded",
        stage3.results.len(),
        config.methods.len()
    );

    let consensus = aggregate.then(|| -> Result<_> {
        let ranking = collect_method_results(&stage3.results)?;
        let aggregates = run_stage5(&ranking)?;
        Ok((ranking, aggregates))
    });
    let (ranking, aggregates, deferred) = match consensus {
        Some(Ok((ranking, aggregates))) => (Some(ranking), Some(aggregates), None),
        Some(Err(err)) => {
            warn!("skipping consensus reports: {err}");
            (None, None, Some(err))
        }
        None => (None, None, None),
    };

    let input = Stage6Input {
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        input_path: Some(config.input.display().to_string()),
        profile: Some(&config.profile),
        methods: Some(&stage3),
        ranking: ranking.as_ref(),
        aggregates: aggregates.as_ref(),
        format: config.format,
    };
    let summary = write_reports(&input, &config.out_dir)?;
    match deferred {
        Some(err) => Err(err),
        None => Ok(summary),
    }
}

fn run_aggregate(paths: &[PathBuf], out_dir: &Path, format: TableFormat) -> Result<SummaryData> {
    let tables = paths
        .iter()
        .map(|p| load_ranked_table(p))
        .collect::<Result<Vec<_>>>()?;
    let ranking = collect_ranked_tables(&tables)?;
    let aggregates = run_stage5(&ranking)?;

    let input = Stage6Input {
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        input_path: None,
        profile: None,
        methods: None,
        ranking: Some(&ranking),
        aggregates: Some(&aggregates),
        format,
    };
    write_reports(&input, out_dir)
}

fn write_default_profile(path: &Path) -> Result<()> {
    let json = CriteriaProfile::default_v1().to_json()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| McdmError::io(parent, e))?;
    }
    std::fs::write(path, json).map_err(|e| McdmError::io(path, e))?;
    info!("wrote default profile to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
