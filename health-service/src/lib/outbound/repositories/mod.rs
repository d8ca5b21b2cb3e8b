pub mod entry;
pub mod memory;
pub mod user;

pub use entry::PostgresEntryRepository;
pub use memory::InMemoryEntryRepository;
pub use memory::InMemoryUserRepository;
pub use user::PostgresUserRepository;
