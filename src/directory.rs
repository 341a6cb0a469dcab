use rustc_hash::FxHashMap;
use serde::Serialize;
use unidecode::unidecode;

/// Name reported for ids missing from the identity dataset.
pub const UNKNOWN_NAME: &str = "NA";

/// Rating reported for fighters without a rating record.
pub const DEFAULT_RATING: f64 = 1000.0;

/// Headshot shown for fighters without a picture.
pub const PLACEHOLDER_IMAGE: &str = "https://dmxg5wxfqgb4u.cloudfront.net/styles/teaser/s3/image/fighter_images/ComingSoon/comingsoon_headshot_odopod.png?VersionId=6Lx8ImOpYf0wBYQKs_FGYIkuSIfTN0f0&itok=pYDOjN8k";

/// Display record for one fighter, with every field already defaulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityDetails {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub image_ref: String,
}

struct DirectoryEntry {
    id: String,
    name: String,
    folded_name: String,
}

/// Bidirectional id/name mapping plus rating and picture enrichment.
///
/// Display names are not unique. Name lookups return the first id in
/// identity-dataset order; callers that need a specific fighter should
/// pass ids instead.
#[derive(Default)]
pub struct EntityDirectory {
    entries: Vec<DirectoryEntry>,
    by_id: FxHashMap<String, usize>,
    first_by_name: FxHashMap<String, usize>,
    ratings: FxHashMap<String, f64>,
    images_by_name: FxHashMap<String, String>,
}

impl EntityDirectory {
    /// Build from `(id, name)` pairs in dataset order. A repeated id keeps its first name.
    pub fn new<I>(identities: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut directory = Self::default();
        for (id, name) in identities {
            if directory.by_id.contains_key(&id) {
                continue;
            }
            let position = directory.entries.len();
            directory.by_id.insert(id.clone(), position);
            directory.first_by_name.entry(name.clone()).or_insert(position);
            directory.entries.push(DirectoryEntry {
                folded_name: fold_name(&name),
                id,
                name,
            });
        }
        directory
    }

    pub fn with_ratings<I>(mut self, ratings: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        self.ratings.extend(ratings);
        self
    }

    /// Attach picture URLs keyed by display name.
    pub fn with_images<I>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, url) in images {
            self.images_by_name.entry(name).or_insert(url);
        }
        self
    }

    pub fn name_of(&self, id: &str) -> &str {
        self.by_id
            .get(id)
            .map(|&position| self.entries[position].name.as_str())
            .unwrap_or(UNKNOWN_NAME)
    }

    /// First id whose display name equals `name` exactly.
    pub fn id_of(&self, name: &str) -> Option<&str> {
        self.first_by_name
            .get(name)
            .map(|&position| self.entries[position].id.as_str())
    }

    pub fn details_of(&self, id: &str) -> EntityDetails {
        let known_name = self
            .by_id
            .get(id)
            .map(|&position| self.entries[position].name.as_str());

        EntityDetails {
            id: id.to_string(),
            name: known_name.unwrap_or(UNKNOWN_NAME).to_string(),
            rating: self.ratings.get(id).copied().unwrap_or(DEFAULT_RATING),
            image_ref: known_name
                .map(|name| self.image_for_name(name))
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_string(),
        }
    }

    pub fn image_for_name(&self, name: &str) -> &str {
        self.images_by_name
            .get(name)
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// All display names, sorted, duplicates included.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.iter().map(|entry| entry.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Ids whose name loosely contains `query`, ignoring case, accents and spacing.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let folded_query = fold_name(query);
        if folded_query.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| entry.folded_name.contains(&folded_query))
            .map(|entry| entry.id.as_str())
            .take(limit)
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn fold_name(name: &str) -> String {
    unidecode(name)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
