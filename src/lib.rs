#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod frames;
pub mod indicator;
pub mod player;
pub mod render;
pub mod table;

pub use error::{Error, Result};
pub use frames::Frame;
pub use player::{Playback, Player};
pub use table::{Animation, AnimationId, FrameTable};
