#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("unknown animation")]
	UnknownAnimation,
	#[error("frame {index} out of range for an animation of {len} frames")]
	IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
