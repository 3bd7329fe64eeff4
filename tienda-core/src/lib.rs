// Public modules
pub mod colors;
pub mod filtering;
pub mod io;
pub mod models;
pub mod options;
pub mod schema;
pub mod schema_validation;
pub mod sizes;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use colors::primary_color;
pub use filtering::{apply_filters, has_filters, matches_filters};
pub use io::{load_catalog, save_catalog};
pub use models::{Catalog, FilterOptions, Filters, Product};
pub use options::derive_options;
pub use schema::catalog_schema;
pub use schema_validation::{validate_against_schema, validate_catalog_json};
pub use sizes::parse_sizes;
pub use sorting::{compare_alpha, compare_numeric, compare_size_tokens, sort_key};
pub use validation::validate_catalog;
