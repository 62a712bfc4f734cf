use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

const POSTS_SLUG_UNIQUE: &str = "posts_slug_key";
const USERS_USERNAME_UNIQUE: &str = "users_username_key";
const CREDENTIALS_USER_FK: &str = "crosspost_credentials_user_id_fkey";

/// Translate a driver error into the domain vocabulary. A violation of the
/// post slug constraint becomes `SlugTaken` so callers can retry assignment.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    let sqlx::Error::Database(db_err) = &err else {
        return DomainError::Persistence(err.to_string());
    };

    match db_err.constraint() {
        Some(POSTS_SLUG_UNIQUE) => return DomainError::SlugTaken,
        Some(USERS_USERNAME_UNIQUE) => {
            return DomainError::Conflict("username already exists".into());
        }
        Some(CREDENTIALS_USER_FK) => return DomainError::NotFound("user not found".into()),
        _ => {}
    }

    match db_err.kind() {
        ErrorKind::UniqueViolation if db_err.table() == Some("posts") => DomainError::SlugTaken,
        ErrorKind::UniqueViolation => DomainError::Conflict("unique constraint violated".into()),
        ErrorKind::ForeignKeyViolation => {
            DomainError::NotFound("referenced record not found".into())
        }
        ErrorKind::CheckViolation => DomainError::Validation("check constraint violated".into()),
        _ => DomainError::Persistence(db_err.message().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_persistence_failures() {
        let mapped = map_sqlx(sqlx::Error::RowNotFound);
        assert!(matches!(mapped, DomainError::Persistence(_)));
    }
}
