use std::fs;
use std::path::Path;

use crate::error::AnalysisErr;
use crate::survey::error::SurveyDataErr;
use crate::survey::types::{ComprehensionRecord, GroupAssignment, StudyGroup};

// Columns are located by header name; column order in the exports is not
// stable across survey tools.
const PARTICIPANT_ID_COLUMN: &str = "participant_id";
const SCORE_COLUMN: &str = "score";
const STUDY_GROUP_COLUMN: &str = "study_group";

fn column_index(columns: &[&str], name: &str, path: &str) -> Result<usize, AnalysisErr> {
    match columns.iter().position(|&column| column == name) {
        Some(index) => Ok(index),
        None => Err(SurveyDataErr::MissingColumn {
            column: name.to_string(),
            path: path.to_string(),
        }
        .into()),
    }
}

fn split_row<'a>(
    line: &'a str,
    line_number: usize,
    last_needed_index: usize,
    path: &str,
) -> Result<Vec<&'a str>, AnalysisErr> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() <= last_needed_index {
        return Err(SurveyDataErr::ShortRow {
            line: line_number,
            path: path.to_string(),
        }
        .into());
    }
    Ok(fields)
}

/// Parses comprehension score rows from CSV content. Rows with a blank score
/// cell are skipped; the participant did not answer the questionnaire.
pub fn parse_comprehension_records(
    content: &str,
    path: &str,
) -> Result<Vec<ComprehensionRecord>, AnalysisErr> {
    let mut lines = content.lines();
    let Some(header) = lines.next() else {
        return Err(SurveyDataErr::EmptyFile {
            path: path.to_string(),
        }
        .into());
    };
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let id_index = column_index(&columns, PARTICIPANT_ID_COLUMN, path)?;
    let score_index = column_index(&columns, SCORE_COLUMN, path)?;

    let mut records = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line_number = offset + 2;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_row(line, line_number, id_index.max(score_index), path)?;
        let participant_id = fields[id_index];
        if participant_id.is_empty() {
            return Err(SurveyDataErr::MissingParticipantId {
                line: line_number,
                path: path.to_string(),
            }
            .into());
        }
        let raw_score = fields[score_index];
        if raw_score.is_empty() {
            continue;
        }
        // `parse::<f64>` accepts the literals `NaN` and `inf`, which would
        // poison every downstream statistic; only finite scores are data
        let score = match raw_score.parse::<f64>() {
            Ok(score) if score.is_finite() => score,
            _ => {
                return Err(SurveyDataErr::BadScore {
                    line: line_number,
                    value: raw_score.to_string(),
                    path: path.to_string(),
                }
                .into())
            }
        };
        records.push(ComprehensionRecord {
            participant_id: participant_id.to_string(),
            score,
        });
    }
    Ok(records)
}

/// Parses group assignments from a records-system CSV export. Rows with a
/// blank group cell belong to participants who are not randomized yet; they
/// are skipped here and surface as a join error if such a participant has
/// scores.
pub fn parse_group_assignments(
    content: &str,
    path: &str,
) -> Result<Vec<GroupAssignment>, AnalysisErr> {
    let mut lines = content.lines();
    let Some(header) = lines.next() else {
        return Err(SurveyDataErr::EmptyFile {
            path: path.to_string(),
        }
        .into());
    };
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let id_index = column_index(&columns, PARTICIPANT_ID_COLUMN, path)?;
    let group_index = column_index(&columns, STUDY_GROUP_COLUMN, path)?;

    let mut assignments = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line_number = offset + 2;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_row(line, line_number, id_index.max(group_index), path)?;
        let participant_id = fields[id_index];
        if participant_id.is_empty() {
            return Err(SurveyDataErr::MissingParticipantId {
                line: line_number,
                path: path.to_string(),
            }
            .into());
        }
        let label = fields[group_index];
        if label.is_empty() {
            continue;
        }
        let Some(study_group) = StudyGroup::from_label(label) else {
            return Err(SurveyDataErr::UnknownStudyGroup {
                line: line_number,
                label: label.to_string(),
                path: path.to_string(),
            }
            .into());
        };
        assignments.push(GroupAssignment {
            participant_id: participant_id.to_string(),
            study_group,
        });
    }
    Ok(assignments)
}

pub(crate) fn read_file(path: &Path) -> Result<String, AnalysisErr> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) => Err(SurveyDataErr::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        }
        .into()),
    }
}

/// Loads comprehension score records from a CSV file.
pub fn load_comprehension_records(path: &Path) -> Result<Vec<ComprehensionRecord>, AnalysisErr> {
    let content = read_file(path)?;
    parse_comprehension_records(&content, &path.display().to_string())
}

/// Loads group assignments from a records-system CSV export.
pub fn load_group_assignments(path: &Path) -> Result<Vec<GroupAssignment>, AnalysisErr> {
    let content = read_file(path)?;
    parse_group_assignments(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_scores() {
        let content = "participant_id,score\np1,8\np2,9.5\n";
        let records = parse_comprehension_records(content, "scores.csv").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].participant_id, "p1");
        assert_eq!(records[1].score, 9.5);
    }

    #[test]
    fn parse_scores_extra_columns_any_order() {
        let content = "authored_at_gmt,score,participant_id\n2024-02-01,7,p1\n";
        let records = parse_comprehension_records(content, "scores.csv").unwrap();
        assert_eq!(records[0].participant_id, "p1");
        assert_eq!(records[0].score, 7.0);
    }

    #[test]
    fn blank_score_is_skipped() {
        let content = "participant_id,score\np1,\np2,6\n";
        let records = parse_comprehension_records(content, "scores.csv").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].participant_id, "p2");
    }

    #[test]
    fn missing_score_column_error() {
        let content = "participant_id,points\np1,8\n";
        if let Err(e) = parse_comprehension_records(content, "scores.csv") {
            assert_eq!(
                String::from(
                    "while loading survey data: missing required column \
                     `score` in scores.csv"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn bad_score_cell_error() {
        let content = "participant_id,score\np1,eight\n";
        if let Err(e) = parse_comprehension_records(content, "scores.csv") {
            assert_eq!(
                String::from(
                    "while loading survey data: could not parse score \
                     `eight` on line 2 of scores.csv"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn non_finite_score_cell_error() {
        for cell in ["NaN", "nan", "inf", "-inf", "infinity"] {
            let content = format!("participant_id,score\np1,{}\n", cell);
            if let Err(e) = parse_comprehension_records(&content, "scores.csv") {
                assert_eq!(
                    format!(
                        "while loading survey data: could not parse score \
                         `{}` on line 2 of scores.csv",
                        cell
                    ),
                    format!("{}", e)
                );
            } else {
                panic!()
            }
        }
    }

    #[test]
    fn parse_assignments() {
        let content = "participant_id,study_group\np1,App\np2,Counseling\np3,\n";
        let assignments = parse_group_assignments(content, "records.csv").unwrap();
        assert_eq!(assignments.len(), 2);
        assert_eq!(assignments[0].study_group, StudyGroup::Intervention);
        assert_eq!(assignments[1].study_group, StudyGroup::Reference);
    }

    #[test]
    fn unknown_group_label_error() {
        let content = "participant_id,study_group\np1,Placebo\n";
        if let Err(e) = parse_group_assignments(content, "records.csv") {
            assert_eq!(
                String::from(
                    "while loading survey data: unknown study group label \
                     `Placebo` on line 2 of records.csv"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "participant_id,score").unwrap();
        writeln!(file, "p1,8").unwrap();
        let records = load_comprehension_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
    }
}
