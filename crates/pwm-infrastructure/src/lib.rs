pub mod async_dir_magician_repository;
pub mod async_dir_routine_repository;
pub mod bcrypt_hasher;
pub mod memory_magician_repository;
pub mod memory_routine_repository;
pub mod paths;

pub use crate::async_dir_magician_repository::AsyncDirMagicianRepository;
pub use crate::async_dir_routine_repository::AsyncDirRoutineRepository;
pub use crate::bcrypt_hasher::BcryptHasher;
pub use crate::memory_magician_repository::MemoryMagicianRepository;
pub use crate::memory_routine_repository::MemoryRoutineRepository;
