//! The control-center widget list: where it is stored, how it is edited and
//! how it is packed into rows.

pub mod ops;
pub mod rows;
pub mod store;

pub use rows::{pack_rows, Row, RowLayout, RowPacker};
pub use store::{ConfigStore, MemoryStore, WidgetStore};
