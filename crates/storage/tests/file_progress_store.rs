//! Progress store over the file backend.

use std::collections::HashMap;
use std::sync::Arc;

use kinetips_core::{time::fixed_now, ProgramProgress};
use kinetips_storage::{FileStore, KeyValueStore, ProgressStore, DEFAULT_PROGRESS_KEY};

fn completed(id: &str) -> ProgramProgress {
    ProgramProgress {
        program_id: id.to_string(),
        current_exercise_index: 10,
        total_exercises: 10,
        is_completed: true,
        last_updated: fixed_now(),
        completed_today: 1,
        last_completion_date: Some(fixed_now()),
    }
}

#[test]
fn test_progress_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let backend = FileStore::new(dir.path()).unwrap();
        let store = ProgressStore::new(Arc::new(backend));
        let mut map = HashMap::new();
        map.insert("p_4_6_th_tummy_reach".to_string(), completed("p_4_6_th_tummy_reach"));
        store.save(&map);
    }

    let reopened = ProgressStore::new(Arc::new(FileStore::new(dir.path()).unwrap()));
    let map = reopened.load();
    assert_eq!(map.len(), 1);
    assert_eq!(map["p_4_6_th_tummy_reach"], completed("p_4_6_th_tummy_reach"));
}

#[test]
fn test_blob_is_a_json_object_keyed_by_program() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileStore::new(dir.path()).unwrap();
    let store = ProgressStore::new(Arc::new(backend.clone()));

    let mut map = HashMap::new();
    map.insert("p_0_2_th_massage".to_string(), completed("p_0_2_th_massage"));
    store.save(&map);

    let raw = backend.get(DEFAULT_PROGRESS_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(json["p_0_2_th_massage"]["isCompleted"], true);
    assert_eq!(json["p_0_2_th_massage"]["currentExerciseIndex"], 10);
}

#[test]
fn test_truncated_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("workout_progress.json"), b"{\"p_0_2").unwrap();

    let store = ProgressStore::new(Arc::new(FileStore::new(dir.path()).unwrap()));
    assert!(store.load().is_empty());
}
