//! File I/O, the JSON note store, password hashing

mod fs;
mod password;
mod store;

pub use fs::{FsError, read_file, write_atomic};
pub use password::{digests_match, hash_password};
pub use store::{CachedStore, NoteStore, StoreError};
