pub mod sheets;
pub mod traits;

pub use sheets::SheetsRowStore;
pub use traits::{CellWrite, RowStore};
