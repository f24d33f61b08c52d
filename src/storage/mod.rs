pub mod frame;
pub mod page_index;

pub use frame::{Frame, FrameId, FrameTable, PageId};
pub use page_index::PageIndex;
