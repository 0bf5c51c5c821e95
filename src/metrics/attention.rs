//! Needs-attention ordering for the notifications and dashboard cards.

use crate::types::{AttentionItem, AttentionType};

/// Stable sort by priority, `High` first. Equal priorities keep input order.
pub fn rank(items: &[AttentionItem]) -> Vec<AttentionItem> {
    let mut ranked = items.to_vec();
    // `sort_by_key` is stable; the ordering contract depends on it.
    ranked.sort_by_key(|item| item.priority);
    ranked
}

/// The first `n` items after ranking.
pub fn top_attention(items: &[AttentionItem], n: usize) -> Vec<AttentionItem> {
    let mut ranked = rank(items);
    ranked.truncate(n);
    ranked
}

/// Per-type counts over all items, one entry per type in declaration order.
pub fn count_by_type(items: &[AttentionItem]) -> Vec<(AttentionType, usize)> {
    AttentionType::ALL
        .iter()
        .map(|t| (*t, items.iter().filter(|i| i.item_type == *t).count()))
        .collect()
}
