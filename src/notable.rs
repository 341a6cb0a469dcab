use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct NotableFighter {
    pub id: String,
    pub rating: f64,
}

/// Rated fighters eligible as targets for notable-opponent searches.
///
/// Iteration follows the rating dataset's key order. Ratings are carried
/// for display only; nothing here ranks by them.
#[derive(Debug, Default)]
pub struct NotableSet {
    members: Vec<NotableFighter>,
    positions: FxHashMap<String, usize>,
}

impl NotableSet {
    /// Build from `(id, rating)` pairs.
    ///
    /// A repeated id keeps its first position but takes the last rating,
    /// matching how the directory resolves the same records.
    pub fn new<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut set = Self::default();
        for (id, rating) in ratings {
            match set.positions.get(&id) {
                Some(&position) => set.members[position].rating = rating,
                None => {
                    set.positions.insert(id.clone(), set.members.len());
                    set.members.push(NotableFighter { id, rating });
                }
            }
        }
        set
    }

    pub fn iter(&self) -> impl Iterator<Item = &NotableFighter> {
        self.members.iter()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
