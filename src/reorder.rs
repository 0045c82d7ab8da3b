//! Anchor-following comment reordering.
//!
//! A board thread is stored flat, in posting order. Reading it aloud
//! that way separates every reply from the post it answers. This pass
//! reorders so each comment is performed immediately followed by the
//! thread of posts it anchors to:
//!
//! ```text
//! posting order:  1   2(>>1)   3   4(>>2, >>3)
//! narration:      1, 2? — no: roots ascend, anchors expand depth-first
//!
//! root 1: emit 1
//! root 2: emit 2, expand >>1 — already emitted, skip
//! root 3: emit 3
//! root 4: emit 4, expand >>2 (skip), >>3 (skip)
//! ```
//!
//! The interesting case is a late root pulling earlier posts forward:
//! with `{10: [>>3], 3: [>>1]}`, visiting 3 first emits `3, 1`, and by
//! the time 10 comes up both are spoken for.
//!
//! One visited set spans the whole traversal, so a comment reachable
//! through two different anchor chains is narrated once, and cycles
//! (`A >>B`, `B >>A`) terminate. Anchors pointing at ids that were
//! never scraped are skipped without comment — deleted posts and
//! cross-thread references are routine.
//!
//! The expansion runs on an explicit stack. Anchor chains as long as
//! the thread itself are legal, and the call stack is not the place to
//! bet on that.

use std::collections::BTreeSet;

use log::debug;

use crate::comment::{Comment, CommentTable};

/// Linearize a comment table by ascending-id roots with depth-first
/// anchor expansion.
///
/// Emits each reachable comment exactly once. Every comment in the
/// table is a root candidate, so the output covers the whole table —
/// never more, and fewer only in the degenerate sense that the output
/// of an empty table is empty.
///
/// ```rust
/// use serifu::{reorganize, Comment, CommentTable};
///
/// let mut table = CommentTable::new();
/// table.insert(1, Comment::new(1, "最初"));
/// table.insert(2, Comment::new(2, "三に同意").with_anchors([3]));
/// table.insert(3, Comment::new(3, "本題"));
///
/// let order: Vec<u64> = reorganize(&table).iter().map(|c| c.id).collect();
/// assert_eq!(order, vec![1, 2, 3]);
/// ```
#[must_use]
pub fn reorganize(table: &CommentTable) -> Vec<&Comment> {
    let mut ordered: Vec<&Comment> = Vec::with_capacity(table.len());
    let mut visited: BTreeSet<u64> = BTreeSet::new();
    let mut stack: Vec<u64> = Vec::new();

    for (&id, comment) in table {
        if !visited.insert(id) {
            continue;
        }
        ordered.push(comment);

        // Pre-order expansion; reversed push so anchors pop in
        // declaration order.
        stack.extend(comment.anchors.iter().rev());
        while let Some(next) = stack.pop() {
            if visited.contains(&next) {
                continue;
            }
            let Some(anchored) = table.get(&next) else {
                continue;
            };
            visited.insert(next);
            ordered.push(anchored);
            stack.extend(anchored.anchors.iter().rev());
        }
    }

    debug!("reorganized {} comments into {} blocks", table.len(), ordered.len());
    ordered
}
