// survey-power CLI
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use survey_power::cohort::partition_scores;
use survey_power::power::{
    noninferiority_power, run_rank_sum, t_test_power, RankSumStrategy, SimConfig,
    NON_INFERIORITY_ALPHA,
};
use survey_power::print_report;
use survey_power::stats::summarize;
use survey_power::survey::{
    load_comprehension_records, load_group_assignments, merge_manual_records, ManualTimestamps,
    ParticipantIdMap, StudyGroup,
};

/// Non-inferiority power analysis for the comprehension outcome of a
/// two-arm trial: loads the survey scores and the records-system export,
/// splits participants into cohorts, and cross-checks the power of the
/// planned comparison with three independent methods.
#[derive(Parser)]
#[command(name = "survey-power", version)]
struct Cli {
    /// Comprehension score CSV (columns participant_id, score)
    scores: PathBuf,

    /// Records-system export CSV (columns participant_id, study_group)
    assignments: PathBuf,

    /// Manual response CSV merged over the automated scores
    #[arg(long, value_name = "CSV", requires = "manual_timestamps")]
    manual_scores: Option<PathBuf>,

    /// JSON file of manually entered completion timestamps
    #[arg(long, value_name = "JSON", requires = "manual_scores")]
    manual_timestamps: Option<PathBuf>,

    /// Participant id map CSV; when given, score rows are anonymized and
    /// the map is rewritten with any newly assigned ids
    #[arg(long, value_name = "CSV")]
    id_map: Option<PathBuf>,

    /// Recompute the Mann-Whitney-U simulation instead of reprinting the
    /// cached snapshot (takes minutes at the default iteration count)
    #[arg(long)]
    run_rank_sum_sim: bool,

    /// Simulation replicates
    #[arg(long, default_value = "10000")]
    iterations: usize,

    /// Simulation seed
    #[arg(long, default_value = "24601")]
    seed: u64,

    /// Worker threads for the simulation (defaults to all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Verbose output showing pipeline stages
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the simulation thread pool")?;
    }

    //----------------------------------------
    // Load and prepare records
    if cli.verbose {
        eprintln!("Loading comprehension scores: {}", cli.scores.display());
    }
    let mut records = load_comprehension_records(&cli.scores)?;

    if let Some(manual_scores) = &cli.manual_scores {
        if cli.verbose {
            eprintln!("Merging manual responses: {}", manual_scores.display());
        }
        let manual_records = load_comprehension_records(manual_scores)?;
        let timestamps = match &cli.manual_timestamps {
            Some(path) => ManualTimestamps::load(path)?,
            None => ManualTimestamps::default(),
        };
        records = merge_manual_records(records, manual_records, &timestamps)?;
    }

    if let Some(id_map_path) = &cli.id_map {
        if cli.verbose {
            eprintln!("Anonymizing with id map: {}", id_map_path.display());
        }
        let mut id_map = ParticipantIdMap::load(id_map_path)?;
        records = id_map.anonymize_records(records)?;
        id_map.save(id_map_path)?;
    }

    if cli.verbose {
        eprintln!("Loading group assignments: {}", cli.assignments.display());
    }
    let assignments = load_group_assignments(&cli.assignments)?;
    if cli.verbose {
        let n_intervention = assignments
            .iter()
            .filter(|a| a.study_group == StudyGroup::Intervention)
            .count();
        eprintln!(
            "Loaded {} assignments: {} {}, {} {}",
            assignments.len(),
            n_intervention,
            StudyGroup::Intervention.label(),
            assignments.len() - n_intervention,
            StudyGroup::Reference.label(),
        );
    }

    //----------------------------------------
    // Partition, summarize, analyze
    let cohorts = partition_scores(&records, &assignments)?;
    let summary = summarize(&cohorts)?;

    let noninferiority = noninferiority_power(
        NON_INFERIORITY_ALPHA,
        summary.n_intervention,
        summary.n_reference,
        summary.difference_in_means,
        -summary.margin, // higher scores are better
        summary.pooled_stddev,
    )?;
    let t_test = t_test_power(
        NON_INFERIORITY_ALPHA,
        &cohorts.intervention,
        &cohorts.reference,
        summary.margin,
    )?;

    let strategy = if cli.run_rank_sum_sim {
        RankSumStrategy::Live(SimConfig {
            iterations: cli.iterations,
            seed: cli.seed,
        })
    } else {
        RankSumStrategy::Cached
    };
    let rank_sum = run_rank_sum(&strategy, &cohorts, summary.margin, NON_INFERIORITY_ALPHA)?;

    //----------------------------------------
    // Report
    print_report(&summary, &noninferiority, &t_test, &rank_sum);
    Ok(())
}
