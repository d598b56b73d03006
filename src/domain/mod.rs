//! Display records exchanged with the poetry backend.

pub mod poem;
pub mod tag;
pub mod types;
