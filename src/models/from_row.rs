use rusqlite::Row;

/// Build a model from a row selected with named columns.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}
