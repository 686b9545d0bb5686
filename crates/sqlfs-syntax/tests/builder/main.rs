//! Statement tree builder tests
//!
//! These tests verify that query text is split into statements and that
//! the projection, `WHERE` clause and comparisons are grouped correctly.

mod statements;
mod where_clause;
