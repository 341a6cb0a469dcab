use crate::context::FightData;
use crate::graph::Edge;
use thiserror::Error;

const SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Error, PartialEq)]
#[error("fighter '{query}' not found")]
pub struct LookupError {
    pub query: String,
    /// Display names loosely matching the query
    pub suggestions: Vec<String>,
}

pub struct SearchRequest {
    pub from_fighter: String,
    pub to_fighter: String,
    pub from_name: String,
    pub to_name: String,
}

pub struct SearchResult<'g> {
    pub path: Option<Vec<&'g Edge>>,
    pub fighters_visited: usize,
    pub search_duration: f64,
    pub from_name: String,
    pub to_name: String,
}

/// Turn a command-line fighter argument into an id.
///
/// Names resolve exactly, first match winning. With `by_id` the argument
/// must already be a known id.
pub fn resolve_fighter(data: &FightData, query: &str, by_id: bool) -> Result<String, LookupError> {
    let resolved = if by_id {
        (data.directory.contains(query) || data.graph.exists(query)).then_some(query)
    } else {
        data.directory.id_of(query)
    };

    resolved.map(str::to_string).ok_or_else(|| LookupError {
        query: query.to_string(),
        suggestions: data
            .directory
            .suggest(query, SUGGESTION_LIMIT)
            .into_iter()
            .map(|id| data.directory.name_of(id).to_string())
            .collect(),
    })
}

pub fn create_search_request(
    data: &FightData,
    from: &str,
    to: &str,
    by_id: bool,
) -> Result<SearchRequest, LookupError> {
    let from_fighter = resolve_fighter(data, from, by_id)?;
    let to_fighter = resolve_fighter(data, to, by_id)?;

    Ok(SearchRequest {
        from_name: data.directory.name_of(&from_fighter).to_string(),
        to_name: data.directory.name_of(&to_fighter).to_string(),
        from_fighter,
        to_fighter,
    })
}

pub fn execute_path_search(data: &FightData, request: SearchRequest) -> SearchResult<'_> {
    let search = data.find_path(&request.from_fighter, &request.to_fighter);

    SearchResult {
        path: search.path,
        fighters_visited: search.fighters_visited,
        search_duration: search.elapsed_secs,
        from_name: request.from_name,
        to_name: request.to_name,
    }
}
