/// Hierarchy domain layer
///
/// Pure business logic: the parent/children relation, the bounded
/// breadth-first expansion around a focal person, merging and the layered
/// layout. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
