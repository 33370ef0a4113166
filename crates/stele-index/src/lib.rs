//! Fast, memory-lean lookup of values keyed by their object id.
//!
//! [`ObjectIdMap`] is a hash index specialized for values that *are* object
//! ids: the digest itself is the key, the stored hash is a word of the
//! digest, and growth splits existing chains one hash bit at a time instead
//! of rehashing the table.

mod map;

pub use map::{EntryId, HasObjectId, Iter, ObjectIdMap};
