//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes the table.

diesel::table! {
    /// Registered accounts keyed by username.
    accounts (username) {
        /// Primary key: username exactly as submitted.
        username -> Text,
        /// Plaintext password exactly as submitted.
        password -> Text,
        /// Destination names in insertion order.
        want_to_go -> Array<Text>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
