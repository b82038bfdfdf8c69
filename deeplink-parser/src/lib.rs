//! # deeplink
//!
//! Matches an already-decomposed link (path segments plus query pairs) against a
//! grammar assembled from small parsers, yielding typed navigation values.
//!
//! Layout
//!
//!     src/deeplink
//!       ├── cursor        Consumption state of one link
//!       ├── matching      Pattern adapter over the regex engine
//!       ├── parser        The single-component parser contract
//!       ├── parsers       Primitive parsers (exact, enum, pattern, no-op)
//!       ├── combinators   Optional, Repeated, Group, Atomic, Map
//!       ├── parsing       Top-level orchestration and ParsedLink
//!       ├── preprocess    Cursor filters driven by configuration
//!       └── error         ParseError
//!
//! A typical grammar:
//!
//! ```text
//! let parsed = cursor
//!     .without_leading_slash()
//!     .parse((
//!         PatternPathMatch::new(letters),
//!         EnumPathMatch::<Page>::new().optional(),
//!     ))?
//!     .ensure_fully_parsed()?;
//! ```

pub mod deeplink;

pub use deeplink::*;
