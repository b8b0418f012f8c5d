//! End-to-end run of the analysis pipeline over files on disk.

use std::fs;

use survey_power::cohort::partition_scores;
use survey_power::power::cache::CACHED_RANK_SUM_SNAPSHOT;
use survey_power::power::{
    noninferiority_power, run_rank_sum, t_test_power, RankSumReport, RankSumStrategy, SimConfig,
    NON_INFERIORITY_ALPHA,
};
use survey_power::stats::summarize;
use survey_power::survey::{
    load_comprehension_records, load_group_assignments, merge_manual_records, ManualTimestamps,
    ParticipantIdMap,
};

#[test]
fn full_pipeline_from_files() {
    let directory = tempfile::tempdir().unwrap();

    let scores_path = directory.path().join("comprehension.preprocessed.csv");
    fs::write(
        &scores_path,
        "participant_id,score\n\
         p1,8\n\
         p2,9\n\
         p3,7\n\
         p4,8\n\
         p6,6\n\
         p7,7\n\
         p8,6\n\
         p9,5\n\
         p10,6\n",
    )
    .unwrap();

    // p5 was collected manually after the app failed for them
    let manual_path = directory.path().join("comprehension.manual.csv");
    fs::write(&manual_path, "participant_id,score\np5,9\n").unwrap();
    let timestamps_path = directory.path().join("participant_surveys.manual.json");
    fs::write(
        &timestamps_path,
        r#"{"p5": {"comprehension_t0": "2024-05-13"}}"#,
    )
    .unwrap();

    let assignments_path = directory.path().join("records_export.csv");
    fs::write(
        &assignments_path,
        "participant_id,study_group\n\
         p1,App\n\
         p2,App\n\
         p3,App\n\
         p4,App\n\
         p5,App\n\
         p6,Counseling\n\
         p7,Counseling\n\
         p8,Counseling\n\
         p9,Counseling\n\
         p10,Counseling\n",
    )
    .unwrap();

    let records = load_comprehension_records(&scores_path).unwrap();
    let manual_records = load_comprehension_records(&manual_path).unwrap();
    let timestamps = ManualTimestamps::load(&timestamps_path).unwrap();
    let records = merge_manual_records(records, manual_records, &timestamps).unwrap();
    assert_eq!(records.len(), 10);

    let assignments = load_group_assignments(&assignments_path).unwrap();
    let cohorts = partition_scores(&records, &assignments).unwrap();
    assert_eq!(cohorts.total_len(), records.len());
    assert_eq!(cohorts.intervention.len(), 5);
    assert_eq!(cohorts.reference.len(), 5);

    let summary = summarize(&cohorts).unwrap();
    assert!((summary.mean_intervention - 8.2).abs() < 1e-9);
    assert!((summary.mean_reference - 6.0).abs() < 1e-9);
    assert!((summary.difference_in_means - 2.2).abs() < 1e-9);
    assert!((summary.margin - 0.6).abs() < 1e-9);

    let noninferiority = noninferiority_power(
        NON_INFERIORITY_ALPHA,
        summary.n_intervention,
        summary.n_reference,
        summary.difference_in_means,
        -summary.margin,
        summary.pooled_stddev,
    )
    .unwrap();
    assert!((0.0..=1.0).contains(&noninferiority.power));

    let t_test = t_test_power(
        NON_INFERIORITY_ALPHA,
        &cohorts.intervention,
        &cohorts.reference,
        summary.margin,
    )
    .unwrap();
    assert!((0.0..=1.0).contains(&t_test.power));
    assert!((t_test.effect_size - 2.8 / 0.6f64.sqrt()).abs() < 1e-9);

    // Default strategy reprints the cached snapshot verbatim
    let cached = run_rank_sum(
        &RankSumStrategy::Cached,
        &cohorts,
        summary.margin,
        NON_INFERIORITY_ALPHA,
    )
    .unwrap();
    assert_eq!(cached, RankSumReport::Cached(CACHED_RANK_SUM_SNAPSHOT));

    // Opting in runs the simulation
    let config = SimConfig {
        iterations: 300,
        seed: 24601,
    };
    let simulated = run_rank_sum(
        &RankSumStrategy::Live(config),
        &cohorts,
        summary.margin,
        NON_INFERIORITY_ALPHA,
    )
    .unwrap();
    if let RankSumReport::Simulated(estimates) = simulated {
        assert!((0.0..=1.0).contains(&estimates.power_exact));
        assert!((0.0..=1.0).contains(&estimates.type_i_asymptotic));
    } else {
        panic!()
    }
}

#[test]
fn anonymization_keeps_the_join_intact() {
    let directory = tempfile::tempdir().unwrap();
    let id_map_path = directory.path().join("participant_id_map.csv");

    let scores_path = directory.path().join("comprehension.csv");
    fs::write(
        &scores_path,
        "participant_id,score\nehive-1,8\nehive-2,9\nehive-3,6\nehive-4,5\n",
    )
    .unwrap();

    let records = load_comprehension_records(&scores_path).unwrap();
    let mut id_map = ParticipantIdMap::load(&id_map_path).unwrap();
    let records = id_map.anonymize_records(records).unwrap();
    id_map.save(&id_map_path).unwrap();

    // The records export is keyed by the anonymous ids
    let assignments_content = format!(
        "participant_id,study_group\n{},App\n{},App\n{},Counseling\n{},Counseling\n",
        id_map.get("ehive-1").unwrap(),
        id_map.get("ehive-2").unwrap(),
        id_map.get("ehive-3").unwrap(),
        id_map.get("ehive-4").unwrap(),
    );
    let assignments_path = directory.path().join("records_export.csv");
    fs::write(&assignments_path, assignments_content).unwrap();

    let assignments = load_group_assignments(&assignments_path).unwrap();
    let cohorts = partition_scores(&records, &assignments).unwrap();
    assert_eq!(cohorts.intervention, vec![8.0, 9.0]);
    assert_eq!(cohorts.reference, vec![6.0, 5.0]);
}
