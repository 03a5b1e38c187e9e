//! Shared fragment cleanup for decomposition output.

use schema::AttributeSet;

/// Final cleanup every decomposition strategy applies: drop empty
/// fragments, deduplicate, drop fragments contained in another fragment,
/// and order by (size descending, canonical serialization ascending).
pub(crate) fn finalize(fragments: Vec<AttributeSet>) -> Vec<AttributeSet> {
    let mut unique: Vec<AttributeSet> = Vec::new();
    for fragment in fragments {
        if !fragment.is_empty() && !unique.contains(&fragment) {
            unique.push(fragment);
        }
    }

    let mut kept: Vec<AttributeSet> = unique
        .iter()
        .filter(|fragment| {
            !unique
                .iter()
                .any(|other| fragment.is_proper_subset(other))
        })
        .cloned()
        .collect();

    kept.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| a.canonical().cmp(&b.canonical()))
    });
    kept
}
