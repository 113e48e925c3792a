/// Name of the unique constraint Postgres creates for `urls.code`.
const CODE_UNIQUE_CONSTRAINT: &str = "urls_code_key";

/// Returns true when `e` is a unique violation on the short code column.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(CODE_UNIQUE_CONSTRAINT))
}
