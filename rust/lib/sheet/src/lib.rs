pub mod error;
pub mod memory;
pub mod redb;
pub mod traits;

pub use error::SheetError;
pub use memory::MemorySheet;
pub use crate::redb::RedbSheet;
pub use traits::{validate_worksheet_name, SheetStore};
