use mmamath::app::{DATA_DIR_ENV, GRAPH_PATH_ENV};
use mmamath::{DataError, MmaMathApp};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const GRAPH_JSON: &str = r#"{
    "holm": [
        {"Name": "Holly Holm", "Opponent": "Ronda Rousey", "OpponentId": "rousey", "Date": "2015-11-15", "Method": "KO/TKO"}
    ],
    "rousey": [
        {"Name": "Ronda Rousey", "Opponent": "Miesha Tate", "OpponentId": "tate", "Date": "2013-12-28", "Method": "Submission"}
    ],
    "tate": [
        {"Name": "Miesha Tate", "Opponent": "Holly Holm", "OpponentId": "holm", "Date": "2016-03-05", "Method": "Submission"}
    ]
}"#;

const NAMES_JSON: &str = r#"{"rousey": "Ronda Rousey", "holm": "Holly Holm", "tate": "Miesha Tate", "nunes": "Amanda Nunes"}"#;

const RATINGS_JSON: &str = r#"{"tate": {"Name": "Miesha Tate", "Elo": 1650}, "rousey": {"Name": "Ronda Rousey", "Elo": 1810.5}}"#;

const PICS_JSON: &str = r#"[{"Name": "Holly Holm", "PicURL": "https://img/holm.png"}]"#;

fn write_datasets(dir: &Path, with_pics: bool) {
    fs::write(dir.join("fighter_wins_graph.json"), GRAPH_JSON).unwrap();
    fs::write(dir.join("fighter_id_name_map.json"), NAMES_JSON).unwrap();
    fs::write(dir.join("fighter_peak_elo_records.json"), RATINGS_JSON).unwrap();
    if with_pics {
        fs::write(dir.join("fighter_pics.json"), PICS_JSON).unwrap();
    }
}

#[test]
fn test_load_full_dataset() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path(), true);

    let data = MmaMathApp::from_dir(dir.path()).load_data().unwrap();

    assert_eq!(data.graph.entity_count(), 3);
    assert_eq!(data.graph.edge_count(), 3);
    assert_eq!(data.directory.len(), 4);
    assert_eq!(data.directory.id_of("Holly Holm"), Some("holm"));
    assert_eq!(data.directory.details_of("holm").image_ref, "https://img/holm.png");
    assert_eq!(data.directory.details_of("rousey").rating, 1810.5);

    let notable: Vec<&str> = data.notable.iter().map(|fighter| fighter.id.as_str()).collect();
    assert_eq!(notable, ["tate", "rousey"]);
}

#[test]
fn test_missing_pictures_use_placeholder() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path(), false);

    let data = MmaMathApp::from_dir(dir.path()).load_data().unwrap();

    assert_eq!(
        data.directory.details_of("holm").image_ref,
        mmamath::directory::PLACEHOLDER_IMAGE
    );
}

#[test]
fn test_loaded_data_answers_queries() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path(), true);
    let data = MmaMathApp::from_dir(dir.path()).load_data().unwrap();

    let path = data.find_path_by_names("Holly Holm", "Miesha Tate").unwrap();
    let steps = data.hydrate_path(&path);
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].date.as_deref(), Some("11/15/2015"));
    assert_eq!(steps[1].method.as_deref(), Some("Submission"));

    // Nunes has a name but no fights, so she never takes part in a search
    assert!(data.find_path_by_names("Holly Holm", "Amanda Nunes").is_none());
}

#[test]
fn test_missing_required_dataset() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path(), true);
    fs::remove_file(dir.path().join("fighter_peak_elo_records.json")).unwrap();

    let result = MmaMathApp::from_dir(dir.path()).load_data();
    assert!(matches!(result, Err(DataError::MissingDataset(path)) if path.ends_with("fighter_peak_elo_records.json")));
}

#[test]
fn test_explicit_data_dir_is_checked() {
    let dir = TempDir::new().unwrap();

    let result = MmaMathApp::new(Some(dir.path().to_path_buf()));
    assert!(matches!(result, Err(DataError::MissingDataset(_))));
}

#[test]
fn test_malformed_dataset_reports_path() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path(), true);
    fs::write(dir.path().join("fighter_id_name_map.json"), "{ not json").unwrap();

    let error = MmaMathApp::from_dir(dir.path()).load_data().err().unwrap();
    assert!(matches!(error, DataError::Json { .. }));
    assert!(error.to_string().contains("fighter_id_name_map.json"));
}

fn environment(vars: &[(&str, &Path)]) -> impl Fn(&str) -> Option<OsString> {
    let vars: HashMap<String, OsString> = vars
        .iter()
        .map(|(name, value)| (name.to_string(), value.as_os_str().to_owned()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_explicit_data_dir_beats_environment() {
    let flag_dir = TempDir::new().unwrap();
    let env_dir = TempDir::new().unwrap();

    let app = MmaMathApp::resolve(
        Some(flag_dir.path().to_path_buf()),
        environment(&[(DATA_DIR_ENV, env_dir.path())]),
    );

    assert_eq!(app.graph_path, flag_dir.path().join("fighter_wins_graph.json"));
    assert_eq!(app.pics_path, flag_dir.path().join("fighter_pics.json"));
}

#[test]
fn test_environment_data_dir_without_flag() {
    let env_dir = TempDir::new().unwrap();
    write_datasets(env_dir.path(), true);

    let app = MmaMathApp::resolve(None, environment(&[(DATA_DIR_ENV, env_dir.path())]));

    assert_eq!(app.names_path, env_dir.path().join("fighter_id_name_map.json"));
    assert_eq!(app.load_data().unwrap().directory.len(), 4);
}

#[test]
fn test_default_data_dir_is_relative_data() {
    let app = MmaMathApp::resolve(None, environment(&[]));

    assert_eq!(app.graph_path, PathBuf::from("data").join("fighter_wins_graph.json"));
    assert_eq!(app.ratings_path, PathBuf::from("data").join("fighter_peak_elo_records.json"));
}

#[test]
fn test_per_file_override_replaces_one_dataset() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path(), true);
    let elsewhere = TempDir::new().unwrap();
    let graph_path = elsewhere.path().join("wins.json");
    fs::write(&graph_path, r#"{"nunes": [{"OpponentId": "holm"}]}"#).unwrap();

    let app = MmaMathApp::resolve(
        Some(dir.path().to_path_buf()),
        environment(&[(GRAPH_PATH_ENV, graph_path.as_path())]),
    );

    assert_eq!(app.graph_path, graph_path);
    assert_eq!(app.names_path, dir.path().join("fighter_id_name_map.json"));

    let data = app.load_data().unwrap();
    assert_eq!(data.graph.edge_count(), 1);
    assert!(data.find_path_by_names("Amanda Nunes", "Holly Holm").is_some());
}

#[test]
fn test_repeated_rating_id_agrees_between_directory_and_notable() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path(), true);
    fs::write(
        dir.path().join("fighter_peak_elo_records.json"),
        r#"{"tate": 1500, "rousey": 1600, "tate": 1900}"#,
    )
    .unwrap();

    let data = MmaMathApp::from_dir(dir.path()).load_data().unwrap();

    assert_eq!(data.directory.details_of("tate").rating, 1900.0);
    let notable: Vec<(&str, f64)> = data
        .notable
        .iter()
        .map(|fighter| (fighter.id.as_str(), fighter.rating))
        .collect();
    assert_eq!(notable, [("tate", 1900.0), ("rousey", 1600.0)]);
}
