use uuid::Uuid;

use shaadi_shared::errors::AppResult;

use crate::models::{Like, Profile};
use crate::store::Store;

/// Appends a like edge. The target is not checked, duplicates are kept and
/// liking yourself is allowed.
pub fn record_like(store: &dyn Store, liker_id: Uuid, target_id: Uuid) -> AppResult<Like> {
    let like = store.insert_like(&Like::new(liker_id, target_id))?;

    tracing::info!(
        like_id = %like.id,
        liker_id = %liker_id,
        liked_profile_id = %target_id,
        "like recorded"
    );

    Ok(like)
}

/// Profiles the liker has liked, one entry per edge, in edge order.
/// Edges pointing at profiles that no longer exist are skipped.
pub fn list_liked_profiles(store: &dyn Store, liker_id: Uuid) -> AppResult<Vec<Profile>> {
    let edges = store.likes_by(liker_id)?;
    let mut liked = Vec::with_capacity(edges.len());

    for edge in &edges {
        match store.find_profile(edge.liked_profile_id)? {
            Some(profile) => liked.push(profile),
            None => tracing::debug!(
                like_id = %edge.id,
                liked_profile_id = %edge.liked_profile_id,
                "skipping like with dangling target"
            ),
        }
    }

    Ok(liked)
}
