//! Persistence seam. Handlers and services only see [`Store`]; the backend
//! is picked at startup.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use uuid::Uuid;

use shaadi_shared::errors::AppResult;

use crate::models::{Like, Profile};
use crate::services::match_service::MatchCriteria;

/// Profile records. Listing order is storage (insertion) order.
pub trait ProfileStore: Send + Sync {
    fn insert_profile(&self, profile: &Profile) -> AppResult<Profile>;

    fn list_profiles(&self) -> AppResult<Vec<Profile>>;

    fn find_profile(&self, id: Uuid) -> AppResult<Option<Profile>>;

    /// First profile with this username, oldest first. Usernames are not unique.
    fn find_profile_by_username(&self, username: &str) -> AppResult<Option<Profile>>;

    /// Overwrites every column of an existing profile.
    fn save_profile(&self, profile: &Profile) -> AppResult<Profile>;

    /// Returns `false` when nothing was deleted.
    fn delete_profile(&self, id: Uuid) -> AppResult<bool>;

    /// Full scan with the match filter applied. Does not exclude anyone.
    fn find_matching_profiles(&self, criteria: &MatchCriteria) -> AppResult<Vec<Profile>>;
}

/// Like edges. Append-only.
pub trait LikeStore: Send + Sync {
    fn insert_like(&self, like: &Like) -> AppResult<Like>;

    /// Edges whose liker is `profile_id`, in insertion order.
    fn likes_by(&self, profile_id: Uuid) -> AppResult<Vec<Like>>;
}

pub trait Store: ProfileStore + LikeStore {
    /// Round trip used by the health check.
    fn ping(&self) -> AppResult<()>;

    fn backend(&self) -> &'static str;
}
