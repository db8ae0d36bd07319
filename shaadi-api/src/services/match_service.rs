use uuid::Uuid;

use shaadi_shared::errors::{AppError, AppResult};

use crate::models::{PartnerPreferences, Profile};
use crate::store::Store;

/// Equality filter derived from the requesting profile.
///
/// A candidate passes when its preferred partner gender is the requester's
/// own gender and at least one of its partner preferences equals the
/// requester's corresponding preference. Unset values compare equal to
/// each other, the way a document store treats missing fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCriteria {
    pub gender: Option<String>,
    pub preferences: PartnerPreferences,
}

impl MatchCriteria {
    pub fn for_requester(requester: &Profile) -> Self {
        Self {
            gender: requester.gender.clone(),
            preferences: requester.preferences(),
        }
    }

    pub fn accepts(&self, candidate: &Profile) -> bool {
        if candidate.p_gender != self.gender {
            return false;
        }

        let mine = &self.preferences;
        let theirs = candidate.preferences();

        theirs.gender == mine.gender
            || theirs.age == mine.age
            || theirs.height == mine.height
            || theirs.religion == mine.religion
            || theirs.occupation == mine.occupation
            || theirs.qualification == mine.qualification
            || theirs.marital_status == mine.marital_status
            || theirs.place == mine.place
    }
}

/// Unranked candidate list for `requester_id`, never including the
/// requester, in storage order.
pub fn compute_matches(store: &dyn Store, requester_id: Uuid) -> AppResult<Vec<Profile>> {
    let requester = store
        .find_profile(requester_id)?
        .ok_or_else(AppError::profile_not_found)?;

    let criteria = MatchCriteria::for_requester(&requester);
    let mut matches = store.find_matching_profiles(&criteria)?;
    matches.retain(|candidate| candidate.id != requester.id);

    tracing::debug!(
        profile_id = %requester.id,
        matches = matches.len(),
        "matches computed"
    );

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::profile;
    use crate::store::{MemoryStore, ProfileStore};
    use shaadi_shared::ErrorCode;

    #[test]
    fn candidate_must_prefer_requesters_gender() {
        let mut a = profile("a", "M", "F");
        a.p_religion = Some("Sikh".into());
        let mut b = profile("b", "F", "F");
        b.p_religion = Some("Sikh".into());

        assert!(!MatchCriteria::for_requester(&a).accepts(&b));

        b.p_gender = Some("M".into());
        assert!(MatchCriteria::for_requester(&a).accepts(&b));
    }

    #[test]
    fn any_single_shared_preference_is_enough() {
        let mut a = profile("a", "M", "F");
        a.p_age = Some(27);
        a.p_place = Some("Pune".into());
        let mut b = profile("b", "F", "M");
        b.p_age = Some(32);
        b.p_place = Some("Pune".into());
        // give b a set value everywhere a is unset so only p_place can match
        b.p_height = Some(160.0);
        b.p_religion = Some("Hindu".into());
        b.p_occupation = Some("Doctor".into());
        b.p_qualification = Some("MBBS".into());
        b.p_marital_status = Some("Never married".into());

        assert!(MatchCriteria::for_requester(&a).accepts(&b));

        b.p_place = Some("Delhi".into());
        assert!(!MatchCriteria::for_requester(&a).accepts(&b));
    }

    #[test]
    fn requester_is_never_in_own_matches() {
        let store = MemoryStore::new();
        // prefers own gender, so the filter alone would select it
        let me = store.insert_profile(&profile("me", "F", "F")).unwrap();
        let other = store.insert_profile(&profile("other", "M", "F")).unwrap();

        let matches = compute_matches(&store, me.id).unwrap();
        assert!(matches.iter().all(|p| p.id != me.id));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, other.id);
    }

    #[test]
    fn no_shared_preferences_yields_empty() {
        let store = MemoryStore::new();
        let mut a = profile("a", "M", "F");
        a.p_age = Some(25);
        a.p_height = Some(160.0);
        a.p_religion = Some("Jain".into());
        a.p_occupation = Some("Teacher".into());
        a.p_qualification = Some("BEd".into());
        a.p_marital_status = Some("Never married".into());
        a.p_place = Some("Surat".into());
        let a = store.insert_profile(&a).unwrap();

        let mut b = profile("b", "F", "M");
        b.p_age = Some(30);
        b.p_height = Some(175.0);
        b.p_religion = Some("Hindu".into());
        b.p_occupation = Some("Engineer".into());
        b.p_qualification = Some("BTech".into());
        b.p_marital_status = Some("Divorced".into());
        b.p_place = Some("Mumbai".into());
        store.insert_profile(&b).unwrap();

        assert!(compute_matches(&store, a.id).unwrap().is_empty());
    }

    #[test]
    fn unknown_requester_is_not_found() {
        let store = MemoryStore::new();
        let err = compute_matches(&store, Uuid::now_v7()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ProfileNotFound);
    }
}
