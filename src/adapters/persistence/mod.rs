pub mod json_seed;
pub mod memory_source;
pub mod sqlite_repo;

pub use json_seed::JsonSeedFile;
pub use memory_source::MemorySource;
pub use sqlite_repo::SqliteRepo;
