//! Combinators
//!
//!     Combinators build parsers out of parsers. Each one lives in its own module and is
//!     usually reached through [ParserExt](super::parser::ParserExt):
//!
//!         let page = EnumPathMatch::<Page>::new().optional();
//!         let words = PatternPathMatch::new(letters).repeated();
//!         let pair = Group::new((ExactMatch::new("user"), PatternPathMatch::new(digits)));
//!
//!     Unlike primitives, combinators may leave partial consumption behind when they fail.
//!     [Group] and [Repeated] keep whatever their inner parsers consumed; wrap them in
//!     [Atomic] to get all-or-nothing behaviour.

pub mod atomic;
pub mod group;
pub mod map;
pub mod optional;
pub mod repeated;
pub mod set;

pub use atomic::Atomic;
pub use group::Group;
pub use map::Map;
pub use optional::Optional;
pub use repeated::Repeated;
pub use set::ParserSet;
