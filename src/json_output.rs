use crate::context::{FightData, WinStep};
use crate::pathfinding::NotablePath;
use crate::search::SearchResult;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
}

#[derive(Serialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<WinStep>>,
}

#[derive(Serialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub fighters_explored: usize,
}

#[derive(Serialize)]
pub struct JsonNotableOutput {
    pub fighter: String,
    pub limit: usize,
    pub results: Vec<JsonNotable>,
}

#[derive(Serialize)]
pub struct JsonNotable {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub steps: usize,
}

pub fn create_json_output(result: &SearchResult<'_>, data: &FightData) -> JsonOutput {
    JsonOutput {
        query: JsonQuery {
            from: result.from_name.clone(),
            to: result.to_name.clone(),
        },
        result: JsonResult {
            found: result.path.is_some(),
            path: result.path.as_deref().map(|path| data.hydrate_path(path)),
        },
        stats: JsonStats {
            search_time_ms: (result.search_duration * 1000.0) as u64,
            fighters_explored: result.fighters_visited,
        },
    }
}

pub fn create_notable_output(
    fighter_id: &str,
    limit: usize,
    found: &[NotablePath<'_>],
    data: &FightData,
) -> JsonNotableOutput {
    JsonNotableOutput {
        fighter: data.directory.name_of(fighter_id).to_string(),
        limit,
        results: found
            .iter()
            .map(|notable| {
                let details = data.directory.details_of(notable.target);
                JsonNotable {
                    id: details.id,
                    name: details.name,
                    rating: details.rating,
                    steps: notable.path.len(),
                }
            })
            .collect(),
    }
}

pub fn print_json_output<T: Serialize>(json_output: &T) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
