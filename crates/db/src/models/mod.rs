//! Row structs and insert DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the query shape
//! - A `Deserialize` + `Validate` create DTO used by seeding and tests

pub mod look;
pub mod product;
