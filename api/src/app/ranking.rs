//! Feed ranking
//!
//! Boost-aware total order over display posts. A boost pins a post near the
//! top of the feed for one hour from its boost timestamp; among actively
//! boosted posts only boost recency matters, everything else ranks by
//! creation recency.
//!
//! "Now" is threaded in by the caller so a feed assembled twice against the
//! same data and clock comes out identical.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};

use super::feed_service::DisplayPost;

/// Boosts placed after this instant are still active.
pub fn boost_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::hours(1)
}

/// Compare two posts, most-preferred first.
///
/// 1. Actively boosted posts before everything else.
/// 2. Among boosted posts: newer boost first, ignoring creation time.
/// 3. Otherwise: newer creation time first.
///
/// The store leaves ties on identical timestamps undefined, so post id
/// (descending) is applied as a deterministic secondary key.
pub fn compare_posts(a: &DisplayPost, b: &DisplayPost, cutoff: DateTime<Utc>) -> Ordering {
    let a_boost = a.boosted_at.filter(|t| *t > cutoff);
    let b_boost = b.boosted_at.filter(|t| *t > cutoff);

    match (a_boost, b_boost) {
        (Some(ta), Some(tb)) => tb.cmp(&ta).then_with(|| b.id.cmp(&a.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)),
    }
}
