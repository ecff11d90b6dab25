//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod look_repo;
pub mod product_repo;

pub use look_repo::LookRepo;
pub use product_repo::ProductRepo;
