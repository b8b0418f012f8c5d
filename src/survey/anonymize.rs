//! Participant anonymization. Survey exports carry the collection system's
//! own participant ids; analyses must only ever see anonymous ids. The
//! mapping lives in a small CSV file next to the external data so reruns
//! assign the same anonymous id to the same participant.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use uuid::Uuid;

use crate::error::AnalysisErr;
use crate::survey::error::SurveyDataErr;
use crate::survey::load::read_file;
use crate::survey::types::ComprehensionRecord;

const SOURCE_ID_COLUMN: &str = "source_id";
const PARTICIPANT_ID_COLUMN: &str = "participant_id";

/// Mapping from collection-system ids to anonymous participant ids.
#[derive(Debug, Default)]
pub struct ParticipantIdMap {
    entries: BTreeMap<String, String>,
}

impl ParticipantIdMap {
    /// Reads the stored id map. A missing file is an empty map; the map is
    /// created on the first anonymization run.
    pub fn load(path: &Path) -> Result<ParticipantIdMap, AnalysisErr> {
        if !path.exists() {
            return Ok(ParticipantIdMap::default());
        }
        let content = read_file(path)?;
        let path_label = path.display().to_string();
        let mut lines = content.lines();
        let Some(header) = lines.next() else {
            return Err(SurveyDataErr::EmptyFile { path: path_label }.into());
        };
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        let source_index = match columns.iter().position(|&c| c == SOURCE_ID_COLUMN) {
            Some(index) => index,
            None => {
                return Err(SurveyDataErr::MissingColumn {
                    column: SOURCE_ID_COLUMN.to_string(),
                    path: path_label.clone(),
                }
                .into())
            }
        };
        let anonymous_index = match columns.iter().position(|&c| c == PARTICIPANT_ID_COLUMN) {
            Some(index) => index,
            None => {
                return Err(SurveyDataErr::MissingColumn {
                    column: PARTICIPANT_ID_COLUMN.to_string(),
                    path: path_label.clone(),
                }
                .into())
            }
        };
        let mut entries = BTreeMap::new();
        for (offset, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() <= source_index.max(anonymous_index) {
                return Err(SurveyDataErr::ShortRow {
                    line: offset + 2,
                    path: path_label.clone(),
                }
                .into());
            }
            entries.insert(
                fields[source_index].to_string(),
                fields[anonymous_index].to_string(),
            );
        }
        Ok(ParticipantIdMap { entries })
    }

    pub fn save(&self, path: &Path) -> Result<(), AnalysisErr> {
        let mut content = format!("{},{}\n", SOURCE_ID_COLUMN, PARTICIPANT_ID_COLUMN);
        for (source_id, participant_id) in &self.entries {
            content.push_str(&format!("{},{}\n", source_id, participant_id));
        }
        match fs::write(path, content) {
            Ok(()) => Ok(()),
            Err(e) => Err(SurveyDataErr::Io {
                path: path.display().to_string(),
                detail: e.to_string(),
            }
            .into()),
        }
    }

    pub fn get(&self, source_id: &str) -> Option<&str> {
        self.entries.get(source_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn contains_anonymous(&self, id: &str) -> bool {
        self.entries.values().any(|anonymous| anonymous == id)
    }

    fn fresh_id(&self) -> String {
        let mut id = Uuid::new_v4().to_string();
        while self.contains_anonymous(&id) {
            id = Uuid::new_v4().to_string();
        }
        id
    }

    /// Replaces collection-system ids with anonymous ids, assigning fresh
    /// UUIDs to participants not seen before. Feeding already anonymous ids
    /// through again is a fatal error; it means a preprocessed file was
    /// passed where a raw export was expected.
    pub fn anonymize_records(
        &mut self,
        records: Vec<ComprehensionRecord>,
    ) -> Result<Vec<ComprehensionRecord>, AnalysisErr> {
        let mut anonymized = Vec::with_capacity(records.len());
        for record in records {
            if self.contains_anonymous(&record.participant_id) {
                return Err(SurveyDataErr::AlreadyAnonymized {
                    participant_id: record.participant_id,
                }
                .into());
            }
            let anonymous_id = match self.entries.get(&record.participant_id) {
                Some(id) => id.clone(),
                None => {
                    let id = self.fresh_id();
                    self.entries
                        .insert(record.participant_id.clone(), id.clone());
                    id
                }
            };
            anonymized.push(ComprehensionRecord {
                participant_id: anonymous_id,
                score: record.score,
            });
        }
        Ok(anonymized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, score: f64) -> ComprehensionRecord {
        ComprehensionRecord {
            participant_id: id.to_string(),
            score,
        }
    }

    #[test]
    fn fresh_ids_are_assigned_and_stable() {
        let mut map = ParticipantIdMap::default();
        let first = map
            .anonymize_records(vec![record("ehive-1", 8.0), record("ehive-2", 6.0)])
            .unwrap();
        assert_eq!(map.len(), 2);
        assert_ne!(first[0].participant_id, "ehive-1");
        assert_ne!(first[0].participant_id, first[1].participant_id);

        // Same source id maps to the same anonymous id on a rerun
        let second = map.anonymize_records(vec![record("ehive-1", 8.0)]).unwrap();
        assert_eq!(second[0].participant_id, first[0].participant_id);
    }

    #[test]
    fn scores_are_preserved() {
        let mut map = ParticipantIdMap::default();
        let anonymized = map.anonymize_records(vec![record("ehive-1", 7.5)]).unwrap();
        assert_eq!(anonymized[0].score, 7.5);
    }

    #[test]
    fn double_anonymization_error() {
        let mut map = ParticipantIdMap::default();
        let anonymized = map.anonymize_records(vec![record("ehive-1", 8.0)]).unwrap();
        let result = map.anonymize_records(anonymized);
        assert!(result.is_err());
    }

    #[test]
    fn save_and_reload() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("participant_id_map.csv");

        let mut map = ParticipantIdMap::default();
        map.anonymize_records(vec![record("ehive-1", 8.0)]).unwrap();
        map.save(&path).unwrap();

        let reloaded = ParticipantIdMap::load(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get("ehive-1"), map.get("ehive-1"));
    }

    #[test]
    fn missing_file_is_empty_map() {
        let map = ParticipantIdMap::load(Path::new("does/not/exist.csv")).unwrap();
        assert!(map.is_empty());
    }
}
