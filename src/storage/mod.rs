mod storage_driver;
pub use self::storage_driver::StorageDriver;

pub mod fs;
pub mod memory;

mod error;
pub use error::Error;
pub use error::Result;
