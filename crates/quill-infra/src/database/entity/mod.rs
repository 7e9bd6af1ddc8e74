//! BSON document shapes stored in the document database.

pub mod post;
