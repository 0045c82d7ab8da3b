//! Property-based tests for the narration pipeline.
//!
//! These tests verify the invariants the downstream tools depend on:
//! - Lossless: splitting and absorption never add or drop text
//! - Bounded: no chunk exceeds the length cap
//! - Floored: absorption leaves no short chunk behind a predecessor
//! - Complete: reordering emits every comment exactly once

use proptest::prelude::*;
use serifu::{
    absorb_short, reorganize, Comment, CommentTable, PunctSplitter, ScoredSplitter, Splitter,
};
use unicode_segmentation::UnicodeSegmentation;

// =============================================================================
// Test Generators
// =============================================================================

/// Forum-comment-like text: kana, kanji, particles, punctuation, the
/// occasional marker-free run.
fn comment_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[あいうえおかきくけこさしすせそのはにをとでが。、！？ア寿司猫犬雨 w]{0,250}")
        .unwrap()
}

/// Pre-split chunk lists for the absorption pass.
fn chunk_lists() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[あい う。長文]{0,40}").unwrap(),
        0..15,
    )
}

/// Comment tables with random anchor graphs; anchor ids range past the
/// id space so dangling references occur.
fn anchor_tables() -> impl Strategy<Value = CommentTable> {
    prop::collection::btree_set(0u64..40, 0..25).prop_flat_map(|ids| {
        let ids: Vec<u64> = ids.into_iter().collect();
        let len = ids.len();
        prop::collection::vec(prop::collection::vec(0u64..50, 0..4), len).prop_map(
            move |anchor_lists| {
                ids.iter()
                    .zip(anchor_lists)
                    .map(|(&id, anchors)| {
                        (
                            id,
                            Comment::new(id, format!("コメント{id}")).with_anchors(anchors),
                        )
                    })
                    .collect()
            },
        )
    })
}

// =============================================================================
// Invariant Helpers
// =============================================================================

fn glen(s: &str) -> usize {
    s.graphemes(true).count()
}

fn chunks_bounded(chunks: &[String], max_len: usize) -> bool {
    chunks.iter().all(|c| glen(c) <= max_len)
}

// =============================================================================
// ScoredSplitter
// =============================================================================

proptest! {
    #[test]
    fn scored_split_is_lossless(text in comment_text(), max_len in 2usize..60) {
        let splitter = ScoredSplitter::new(max_len);
        prop_assert_eq!(splitter.split(&text).concat(), text);
    }

    #[test]
    fn scored_chunks_respect_cap(text in comment_text(), max_len in 2usize..60) {
        let splitter = ScoredSplitter::new(max_len);
        let chunks = splitter.split(&text);
        prop_assert!(
            glen(&text) <= max_len || chunks_bounded(&chunks, max_len),
            "oversized chunk from cap {}: {:?}",
            max_len,
            chunks
        );
    }

    #[test]
    fn scored_split_is_deterministic(text in comment_text()) {
        let splitter = ScoredSplitter::new(24);
        prop_assert_eq!(splitter.split(&text), splitter.split(&text));
    }
}

// =============================================================================
// PunctSplitter
// =============================================================================

proptest! {
    #[test]
    fn punct_split_is_lossless(text in comment_text(), max_len in 2usize..60) {
        let splitter = PunctSplitter::new(max_len);
        prop_assert_eq!(splitter.split(&text).concat(), text);
    }

    #[test]
    fn punct_chunks_respect_cap(text in comment_text(), max_len in 2usize..60) {
        let splitter = PunctSplitter::new(max_len);
        let chunks = splitter.split(&text);
        prop_assert!(glen(&text) <= max_len || chunks_bounded(&chunks, max_len));
    }
}

// =============================================================================
// Absorption
// =============================================================================

proptest! {
    #[test]
    fn absorb_is_lossless(chunks in chunk_lists(), min_len in 0usize..30) {
        let joined: String = chunks.concat();
        prop_assert_eq!(absorb_short(chunks, min_len).concat(), joined);
    }

    #[test]
    fn absorb_floors_everything_behind_the_first(
        chunks in chunk_lists(),
        min_len in 0usize..30
    ) {
        let merged = absorb_short(chunks, min_len);
        // The first chunk may legitimately stay short (nothing precedes
        // it); every later chunk must reach the floor.
        for chunk in merged.iter().skip(1) {
            prop_assert!(glen(chunk) >= min_len, "short chunk survived: {:?}", chunk);
        }
    }

    #[test]
    fn absorb_after_split_keeps_text(text in comment_text(), min_len in 0usize..20) {
        let splitter = ScoredSplitter::new(40);
        let merged = absorb_short(splitter.split(&text), min_len);
        prop_assert_eq!(merged.concat(), text);
    }
}

// =============================================================================
// Reordering
// =============================================================================

proptest! {
    #[test]
    fn reorganize_emits_each_comment_exactly_once(table in anchor_tables()) {
        let ordered = reorganize(&table);
        prop_assert_eq!(ordered.len(), table.len());

        let mut ids: Vec<u64> = ordered.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), table.len());
        prop_assert!(ids.iter().all(|id| table.contains_key(id)));
    }

    #[test]
    fn reorganize_starts_at_the_lowest_id(table in anchor_tables()) {
        let ordered = reorganize(&table);
        if let (Some(first), Some(lowest)) = (ordered.first(), table.keys().next()) {
            prop_assert_eq!(first.id, *lowest);
        }
    }
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn tiny_cap_still_terminates() {
    let splitter = ScoredSplitter::new(1);
    let text = "は。はは、はははは";
    let chunks = splitter.split(text);
    assert_eq!(chunks.concat(), text);
    assert!(chunks_bounded(&chunks, 1));
}

#[test]
fn marker_free_text_degrades_to_hard_cuts() {
    let splitter = ScoredSplitter::new(10);
    let text = "ア".repeat(95);
    let chunks = splitter.split(&text);
    assert_eq!(chunks.concat(), text);
    assert!(chunks_bounded(&chunks, 10));
    assert_eq!(chunks.len(), 10); // nine full cuts plus the remainder
}

#[test]
fn absorb_of_nothing_is_nothing() {
    assert!(absorb_short(Vec::new(), 30).is_empty());
}

#[test]
fn two_comment_cycle_terminates() {
    let mut table = CommentTable::new();
    table.insert(1, Comment::new(1, "先攻").with_anchors([2]));
    table.insert(2, Comment::new(2, "後攻").with_anchors([1]));

    let order: Vec<u64> = reorganize(&table).iter().map(|c| c.id).collect();
    assert_eq!(order, vec![1, 2]);
}
