use crate::directory::DEFAULT_RATING;
use crate::error::{DataError, Result};
use crate::graph::{Edge, WinGraph};
use chrono::{NaiveDate, NaiveDateTime};
use memmap2::Mmap;
use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use std::{fmt, fs::File, marker::PhantomData, path::Path};
use tracing::{debug, info};

/// JSON object entries in document order.
struct OrderedEntries<T>(Vec<(String, T)>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedEntries<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = OrderedEntries<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object keyed by fighter id")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, T>()? {
                    entries.push(entry);
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[derive(Deserialize)]
struct WinRecord {
    #[serde(rename = "OpponentId")]
    opponent_id: String,
    #[serde(rename = "Date", default)]
    date: Option<String>,
    #[serde(rename = "Method", default)]
    method: Option<String>,
}

#[derive(Deserialize)]
struct EdgeRecord {
    from: String,
    to: String,
    #[serde(default, alias = "occurredOn")]
    date: Option<String>,
    #[serde(default)]
    method: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RatingRecord {
    Detailed {
        #[serde(rename = "Elo", default)]
        elo: Option<f64>,
    },
    Bare(f64),
}

impl RatingRecord {
    fn rating(&self) -> f64 {
        match self {
            RatingRecord::Detailed { elo } => elo.unwrap_or(DEFAULT_RATING),
            RatingRecord::Bare(rating) => *rating,
        }
    }
}

#[derive(Deserialize)]
struct PictureRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "PicURL", default)]
    pic_url: Option<String>,
}

fn build_edge(from: String, to: String, date: Option<String>, method: Option<String>) -> Edge {
    Edge {
        occurred_on: date.as_deref().and_then(parse_fight_date),
        from,
        to,
        method,
    }
}

/// Parse the date formats seen in fight records. Unrecognised text yields `None`.
pub fn parse_fight_date(raw: &str) -> Option<NaiveDate> {
    const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%b. %d, %Y", "%m/%d/%Y"];
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%d %H:%M:%S"];

    let raw = raw.trim();
    let parsed = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|datetime| datetime.date())
        });

    if parsed.is_none() && !raw.is_empty() {
        debug!(raw, "unrecognised fight date");
    }
    parsed
}

/// Decode either the grouped adjacency object or a flat list of win records.
pub fn decode_win_graph(bytes: &[u8]) -> serde_json::Result<WinGraph> {
    let is_edge_list = bytes
        .iter()
        .find(|byte| !byte.is_ascii_whitespace())
        .is_some_and(|&byte| byte == b'[');

    if is_edge_list {
        let records: Vec<EdgeRecord> = serde_json::from_slice(bytes)?;
        return Ok(WinGraph::from_edges(
            records
                .into_iter()
                .map(|record| build_edge(record.from, record.to, record.date, record.method)),
        ));
    }

    let OrderedEntries(groups) = serde_json::from_slice::<OrderedEntries<Vec<WinRecord>>>(bytes)?;
    Ok(WinGraph::from_adjacency(groups.into_iter().map(|(winner, wins)| {
        let edges = wins
            .into_iter()
            .map(|win| build_edge(winner.clone(), win.opponent_id, win.date, win.method))
            .collect();
        (winner, edges)
    })))
}

/// Decode `{ "<id>": "<name>" }` in document order.
pub fn decode_identities(bytes: &[u8]) -> serde_json::Result<Vec<(String, String)>> {
    let OrderedEntries(identities) = serde_json::from_slice(bytes)?;
    Ok(identities)
}

/// Decode `{ "<id>": { "Elo": n } }` (or `{ "<id>": n }`) in document order.
pub fn decode_ratings(bytes: &[u8]) -> serde_json::Result<Vec<(String, f64)>> {
    let OrderedEntries::<RatingRecord>(records) = serde_json::from_slice(bytes)?;
    Ok(records
        .into_iter()
        .map(|(id, record)| {
            let rating = record.rating();
            (id, rating)
        })
        .collect())
}

/// Decode `[ { "Name", "PicURL" } ]`, dropping records without a URL.
pub fn decode_pictures(bytes: &[u8]) -> serde_json::Result<Vec<(String, String)>> {
    let records: Vec<PictureRecord> = serde_json::from_slice(bytes)?;
    Ok(records
        .into_iter()
        .filter_map(|record| record.pic_url.map(|url| (record.name, url)))
        .collect())
}

fn open_memory_mapped_file(path: &Path) -> Result<Mmap> {
    let io_error = |source| DataError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    // SAFETY: dataset files are not modified while the process runs.
    unsafe { Mmap::map(&file) }.map_err(io_error)
}

fn parse_dataset<T>(path: &Path, decode: impl FnOnce(&[u8]) -> serde_json::Result<T>) -> Result<T> {
    if !path.exists() {
        return Err(DataError::MissingDataset(path.to_path_buf()));
    }
    let data = open_memory_mapped_file(path)?;
    decode(&data[..]).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_win_graph(path: &Path) -> Result<WinGraph> {
    let graph = parse_dataset(path, decode_win_graph)?;
    info!(
        fighters = graph.entity_count(),
        wins = graph.edge_count(),
        "loaded win graph from {}",
        path.display()
    );
    Ok(graph)
}

pub fn parse_identities(path: &Path) -> Result<Vec<(String, String)>> {
    let identities = parse_dataset(path, decode_identities)?;
    info!(fighters = identities.len(), "loaded fighter names from {}", path.display());
    Ok(identities)
}

pub fn parse_ratings(path: &Path) -> Result<Vec<(String, f64)>> {
    let ratings = parse_dataset(path, decode_ratings)?;
    info!(rated = ratings.len(), "loaded fighter ratings from {}", path.display());
    Ok(ratings)
}

/// Picture URLs are optional enrichment: a missing file loads as empty.
pub fn parse_pictures(path: &Path) -> Result<Vec<(String, String)>> {
    if !path.exists() {
        info!("no picture dataset at {}, using placeholder images", path.display());
        return Ok(Vec::new());
    }
    let pictures = parse_dataset(path, decode_pictures)?;
    info!(pictures = pictures.len(), "loaded fighter pictures from {}", path.display());
    Ok(pictures)
}
