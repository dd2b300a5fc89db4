// sqlx::Error -> AppError mapping
//
// Orphan rules prevent `impl From<sqlx::Error> for AppError` here, so every
// call site goes through `map_sqlx_error`.

use jobboard_core::error::AppError;
use sqlx::error::ErrorKind;

/// Convert sqlx::Error to AppError, separating constraint violations
pub fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            // SQLite extended result codes: https://www.sqlite.org/rescode.html
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                match code_str {
                    "1299" => AppError::Constraint(format!(
                        "NOT NULL constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "275" => AppError::Constraint(format!(
                        "CHECK constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "2067" | "1555" => AppError::Constraint(format!(
                        "Unique constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "787" | "3850" => AppError::Constraint(format!(
                        "Foreign key constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "5" => AppError::Database(format!(
                        "Database locked (SQLITE_BUSY): {}",
                        db_err.message()
                    )),
                    "13" => AppError::Database(format!("Database full: {}", db_err.message())),
                    _ if !matches!(db_err.kind(), ErrorKind::Other) => AppError::Constraint(
                        format!("Constraint violation: {} ({})", db_err.message(), code_str),
                    ),
                    _ => AppError::Database(format!(
                        "Database error [{}]: {}",
                        code_str,
                        db_err.message()
                    )),
                }
            } else {
                AppError::Database(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::RowNotFound => AppError::NotFound("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("Column not found: {}", col))
        }
        sqlx::Error::Configuration(e) => AppError::Config(e.to_string()),
        _ => AppError::Database(err.to_string()),
    }
}
