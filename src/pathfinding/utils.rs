use crate::graph::Edge;
use rustc_hash::FxHashMap;

pub(super) type ParentMap<'g> = FxHashMap<&'g str, (&'g str, &'g Edge)>;

pub(super) fn reconstruct_path<'g>(parent_map: &ParentMap<'g>, start: &str, target: &'g str) -> Vec<&'g Edge> {
    let mut path = Vec::new();
    let mut current_fighter = target;

    while current_fighter != start {
        let Some(&(parent_fighter, win)) = parent_map.get(current_fighter) else {
            break;
        };
        path.push(win);
        current_fighter = parent_fighter;
    }

    path.reverse();
    path
}

/// Fighter ids along `path`, starting with `start`.
pub fn path_ids<'g>(start: &'g str, path: &[&'g Edge]) -> Vec<&'g str> {
    std::iter::once(start)
        .chain(path.iter().map(|win| win.to.as_str()))
        .collect()
}
