pub mod health;
pub mod likes;
pub mod login;
pub mod matches;
pub mod me;
pub mod profile;

use uuid::Uuid;

use shaadi_shared::errors::{AppError, AppResult};

/// Path ids that are not well-formed cannot name a profile.
fn profile_id_from_path(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::profile_not_found())
}
