mod store_trait;
pub use store_trait::*;

mod file;
pub use file::*;

mod memory;
pub use memory::*;
