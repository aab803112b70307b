/// Asset owner as stored in the `users` table.
///
/// The id is read as text so the record does not depend on the column's
/// concrete key type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub id: String,
    pub name: String,
}
