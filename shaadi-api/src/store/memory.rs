use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use shaadi_shared::errors::{AppError, AppResult};

use super::{LikeStore, ProfileStore, Store};
use crate::models::{Like, Profile};
use crate::services::match_service::MatchCriteria;

/// Process-local backend. Vectors keep insertion order, which stands in for
/// storage order.
#[derive(Default)]
pub struct MemoryStore {
    profiles: RwLock<Vec<Profile>>,
    likes: RwLock<Vec<Like>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn profiles(&self) -> AppResult<RwLockReadGuard<'_, Vec<Profile>>> {
        self.profiles.read().map_err(|_| AppError::internal("profile store lock poisoned"))
    }

    fn profiles_mut(&self) -> AppResult<RwLockWriteGuard<'_, Vec<Profile>>> {
        self.profiles.write().map_err(|_| AppError::internal("profile store lock poisoned"))
    }

    fn likes(&self) -> AppResult<RwLockReadGuard<'_, Vec<Like>>> {
        self.likes.read().map_err(|_| AppError::internal("like store lock poisoned"))
    }

    fn likes_mut(&self) -> AppResult<RwLockWriteGuard<'_, Vec<Like>>> {
        self.likes.write().map_err(|_| AppError::internal("like store lock poisoned"))
    }
}

impl ProfileStore for MemoryStore {
    fn insert_profile(&self, profile: &Profile) -> AppResult<Profile> {
        let mut profiles = self.profiles_mut()?;
        if profiles.iter().any(|p| p.id == profile.id) {
            return Err(AppError::Validation(format!("duplicate profile id {}", profile.id)));
        }
        profiles.push(profile.clone());
        Ok(profile.clone())
    }

    fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        Ok(self.profiles()?.clone())
    }

    fn find_profile(&self, id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.profiles()?.iter().find(|p| p.id == id).cloned())
    }

    fn find_profile_by_username(&self, username: &str) -> AppResult<Option<Profile>> {
        Ok(self.profiles()?.iter().find(|p| p.username == username).cloned())
    }

    fn save_profile(&self, profile: &Profile) -> AppResult<Profile> {
        let mut profiles = self.profiles_mut()?;
        let slot = profiles
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or_else(AppError::profile_not_found)?;
        *slot = profile.clone();
        Ok(profile.clone())
    }

    fn delete_profile(&self, id: Uuid) -> AppResult<bool> {
        let mut profiles = self.profiles_mut()?;
        let before = profiles.len();
        profiles.retain(|p| p.id != id);
        Ok(profiles.len() != before)
    }

    fn find_matching_profiles(&self, criteria: &MatchCriteria) -> AppResult<Vec<Profile>> {
        Ok(self
            .profiles()?
            .iter()
            .filter(|candidate| criteria.accepts(candidate))
            .cloned()
            .collect())
    }
}

impl LikeStore for MemoryStore {
    fn insert_like(&self, like: &Like) -> AppResult<Like> {
        self.likes_mut()?.push(like.clone());
        Ok(like.clone())
    }

    fn likes_by(&self, profile_id: Uuid) -> AppResult<Vec<Like>> {
        Ok(self
            .likes()?
            .iter()
            .filter(|l| l.profile_id == profile_id)
            .cloned()
            .collect())
    }
}

impl Store for MemoryStore {
    fn ping(&self) -> AppResult<()> {
        self.profiles().map(|_| ())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
