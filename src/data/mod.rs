//! Core value holders: numeric buffer, bounded counter and player record.

pub mod buffer;
pub mod counter;
pub mod player;

pub use buffer::{find_max, BufferStore};
pub use counter::{BoundedCounter, RankUpdate, RejectReason};
pub use player::Player;
