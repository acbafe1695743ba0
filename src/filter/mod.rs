//! Filters for narrowing an index down to a result set
//!
//! The engine runs the three term passes in a fixed order; the class filter
//! is an optional post-filter that consults the live filesystem. All filters
//! implement [`Filter`] and [`PathFilter`] for composability and testability.

pub mod class;
pub mod engine;
pub mod passes;
pub mod traits;

pub use class::{ClassFilter, FileClass, filter_by_class};
pub use engine::{FilterRequest, IndexSource, filter, filter_to_file};
pub use passes::{ExcludeAny, MatchOptions, RequireAll, RequireAny};
pub use traits::{Filter, FilterDecision, PathFilter};
