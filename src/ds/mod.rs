pub mod frame_set;
pub mod recency;

pub use frame_set::FrameSet;
pub use recency::RecencyTable;
