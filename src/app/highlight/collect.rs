use std::collections::HashSet;

use crate::catalog::Link;

pub(super) fn collect_direct_neighbours(links: &[Link], active_id: &str) -> HashSet<String> {
    let mut related = HashSet::from([active_id.to_owned()]);
    for link in links {
        if let Some(other) = link.other(active_id) {
            related.insert(other.to_owned());
        }
    }
    related
}
