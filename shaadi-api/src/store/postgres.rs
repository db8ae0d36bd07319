use diesel::dsl::{Find, Update};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

use shaadi_shared::clients::db::DbPool;
use shaadi_shared::errors::{AppError, AppResult, ErrorCode};

use super::{LikeStore, ProfileStore, Store};
use crate::models::{Like, Profile};
use crate::schema::{likes, profiles};
use crate::services::match_service::MatchCriteria;

type PooledConn = diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<PgConnection>>;

/// Postgres backend over an r2d2 pool.
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> AppResult<PooledConn> {
        self.pool.get().map_err(|e| AppError::internal(e.to_string()))
    }
}

/// Constraint violations on write are reported as validation errors.
fn write_error(err: DieselError) -> AppError {
    match err {
        DieselError::DatabaseError(
            kind @ (DatabaseErrorKind::NotNullViolation
            | DatabaseErrorKind::CheckViolation
            | DatabaseErrorKind::UniqueViolation),
            info,
        ) => AppError::with_details(
            ErrorCode::ValidationError,
            info.message().to_string(),
            serde_json::json!({ "kind": format!("{kind:?}") }),
        ),
        other => AppError::Database(other),
    }
}

/// Full-row update keyed by id. Unset attributes are left out of the
/// `SET` list, so they never clear a stored value.
fn save_statement(profile: &Profile) -> Update<Find<profiles::table, Uuid>, &Profile> {
    diesel::update(profiles::table.find(profile.id)).set(profile)
}

/// Candidates for `criteria`, in storage order.
fn match_query(criteria: &MatchCriteria) -> profiles::BoxedQuery<'static, Pg> {
    let prefs = &criteria.preferences;

    // IS NOT DISTINCT FROM so that unset attributes compare equal.
    profiles::table
        .filter(profiles::p_gender.is_not_distinct_from(criteria.gender.clone()))
        .filter(
            profiles::p_gender
                .is_not_distinct_from(prefs.gender.clone())
                .or(profiles::p_age.is_not_distinct_from(prefs.age))
                .or(profiles::p_height.is_not_distinct_from(prefs.height))
                .or(profiles::p_religion.is_not_distinct_from(prefs.religion.clone()))
                .or(profiles::p_occupation.is_not_distinct_from(prefs.occupation.clone()))
                .or(profiles::p_qualification.is_not_distinct_from(prefs.qualification.clone()))
                .or(profiles::p_marital_status.is_not_distinct_from(prefs.marital_status.clone()))
                .or(profiles::p_place.is_not_distinct_from(prefs.place.clone())),
        )
        .order((profiles::created_at.asc(), profiles::id.asc()))
        .into_boxed()
}

impl ProfileStore for PgStore {
    fn insert_profile(&self, profile: &Profile) -> AppResult<Profile> {
        let mut conn = self.conn()?;
        diesel::insert_into(profiles::table)
            .values(profile)
            .returning(Profile::as_returning())
            .get_result(&mut conn)
            .map_err(write_error)
    }

    fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        let mut conn = self.conn()?;
        Ok(profiles::table
            .order((profiles::created_at.asc(), profiles::id.asc()))
            .select(Profile::as_select())
            .load(&mut conn)?)
    }

    fn find_profile(&self, id: Uuid) -> AppResult<Option<Profile>> {
        let mut conn = self.conn()?;
        Ok(profiles::table
            .find(id)
            .select(Profile::as_select())
            .first(&mut conn)
            .optional()?)
    }

    fn find_profile_by_username(&self, username: &str) -> AppResult<Option<Profile>> {
        let mut conn = self.conn()?;
        Ok(profiles::table
            .filter(profiles::username.eq(username))
            .order((profiles::created_at.asc(), profiles::id.asc()))
            .select(Profile::as_select())
            .first(&mut conn)
            .optional()?)
    }

    fn save_profile(&self, profile: &Profile) -> AppResult<Profile> {
        let mut conn = self.conn()?;
        save_statement(profile)
            .returning(Profile::as_returning())
            .get_result(&mut conn)
            .map_err(|e| match e {
                DieselError::NotFound => AppError::profile_not_found(),
                other => write_error(other),
            })
    }

    fn delete_profile(&self, id: Uuid) -> AppResult<bool> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(profiles::table.find(id)).execute(&mut conn)?;
        Ok(deleted > 0)
    }

    fn find_matching_profiles(&self, criteria: &MatchCriteria) -> AppResult<Vec<Profile>> {
        let mut conn = self.conn()?;
        Ok(match_query(criteria)
            .select(Profile::as_select())
            .load(&mut conn)?)
    }
}

impl LikeStore for PgStore {
    fn insert_like(&self, like: &Like) -> AppResult<Like> {
        let mut conn = self.conn()?;
        diesel::insert_into(likes::table)
            .values(like)
            .returning(Like::as_returning())
            .get_result(&mut conn)
            .map_err(write_error)
    }

    fn likes_by(&self, profile_id: Uuid) -> AppResult<Vec<Like>> {
        let mut conn = self.conn()?;
        Ok(likes::table
            .filter(likes::profile_id.eq(profile_id))
            .order((likes::created_at.asc(), likes::id.asc()))
            .select(Like::as_select())
            .load(&mut conn)?)
    }
}

impl Store for PgStore {
    fn ping(&self) -> AppResult<()> {
        let mut conn = self.conn()?;
        diesel::sql_query("SELECT 1").execute(&mut conn)?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn match_query_compares_every_preference_null_safely() {
        let mut requester = fixtures::profile("asha", "F", "M");
        requester.p_religion = Some("Hindu".into());
        let criteria = MatchCriteria::for_requester(&requester);

        let sql = diesel::debug_query::<Pg, _>(&match_query(&criteria)).to_string();

        // p_gender twice, then the seven remaining preferences.
        assert_eq!(sql.matches(" IS NOT DISTINCT FROM ").count(), 9, "{sql}");
        assert_eq!(sql.matches(" OR ").count(), 7, "{sql}");
        assert!(!sql.contains("\"p_gender\" = "), "{sql}");
        assert!(sql.contains("ORDER BY \"profiles\".\"created_at\" ASC, \"profiles\".\"id\" ASC"), "{sql}");
        assert!(sql.contains("\"Hindu\""), "{sql}");
    }

    #[test]
    fn save_statement_skips_unset_attributes() {
        let mut profile = fixtures::profile("ravi", "M", "F");
        profile.age = None;
        profile.religion = Some("Sikh".into());

        let sql = diesel::debug_query::<Pg, _>(&save_statement(&profile)).to_string();

        assert!(sql.starts_with("UPDATE \"profiles\" SET "), "{sql}");
        assert!(sql.contains("\"religion\" = $"), "{sql}");
        assert!(sql.contains("\"password_hash\" = $"), "{sql}");
        assert!(!sql.contains("\"age\" = $"), "{sql}");
        assert!(sql.contains(" WHERE \"profiles\".\"id\" = $"), "{sql}");
    }
}
