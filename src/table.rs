use core::{fmt, str::FromStr};

use crate::{
	error::{Error, Result},
	frames::{self, Frame},
	player::{Playback, Player},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnimationId {
	Static  = 0,
	Beating = 1,
}

impl AnimationId {
	pub const ALL: [AnimationId; 2] = [AnimationId::Static, AnimationId::Beating];

	pub const fn name(self) -> &'static str {
		match self {
			AnimationId::Static => "static",
			AnimationId::Beating => "beating",
		}
	}

	pub const fn frames(self) -> &'static [Frame] {
		match self {
			AnimationId::Static => frames::HEART_STATIC,
			AnimationId::Beating => frames::HEART_ANIM,
		}
	}

	pub const fn animation(self) -> Animation<'static> {
		Animation::new(self.name(), self.frames())
	}
}

impl FromStr for AnimationId {
	type Err = Error;

	fn from_str(name: &str) -> Result<Self> {
		AnimationId::ALL
			.into_iter()
			.find(|id| id.name() == name)
			.ok_or(Error::UnknownAnimation)
	}
}

impl fmt::Display for AnimationId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animation<'a> {
	name:   &'a str,
	frames: &'a [Frame],
}

impl<'a> Animation<'a> {
	/// Panics on an empty frame slice, which fails the build in a `const`.
	pub const fn new(name: &'a str, frames: &'a [Frame]) -> Self {
		assert!(!frames.is_empty(), "animation has no frames");
		Self { name, frames }
	}

	pub const fn name(&self) -> &'a str {
		self.name
	}

	pub const fn frames(&self) -> &'a [Frame] {
		self.frames
	}

	pub const fn frame_count(&self) -> usize {
		self.frames.len()
	}

	pub fn frame(&self, index: usize) -> Result<Frame> {
		self.frames
			.get(index)
			.copied()
			.ok_or(Error::IndexOutOfRange {
				index,
				len: self.frames.len(),
			})
	}

	pub fn play(&self, playback: Playback) -> Player<'a> {
		Player::new(self.frames, playback)
	}
}

#[derive(Clone, Copy, Debug)]
pub struct FrameTable<'a> {
	animations: &'a [Animation<'a>],
}

const BUILTIN_ANIMATIONS: &[Animation<'static>] = &[
	AnimationId::Static.animation(),
	AnimationId::Beating.animation(),
];

impl FrameTable<'static> {
	pub const BUILTIN: FrameTable<'static> = FrameTable::new(BUILTIN_ANIMATIONS);

	pub const fn builtin() -> Self {
		Self::BUILTIN
	}
}

impl<'a> FrameTable<'a> {
	/// Panics if two animations share a name.
	pub const fn new(animations: &'a [Animation<'a>]) -> Self {
		let mut i = 0;
		while i < animations.len() {
			let mut j = i + 1;
			while j < animations.len() {
				assert!(
					!str_eq(animations[i].name, animations[j].name),
					"duplicate animation name"
				);
				j += 1;
			}
			i += 1;
		}
		Self { animations }
	}

	fn find(&self, name: &str) -> Result<&Animation<'a>> {
		self.animations
			.iter()
			.find(|animation| animation.name == name)
			.ok_or(Error::UnknownAnimation)
	}

	pub fn get_animation(&self, name: &str) -> Result<&'a [Frame]> {
		self.find(name).map(|animation| animation.frames)
	}

	pub fn frame_count(&self, name: &str) -> Result<usize> {
		self.find(name).map(Animation::frame_count)
	}

	pub fn get_frame(&self, name: &str, index: usize) -> Result<Frame> {
		self.find(name)?.frame(index)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.find(name).is_ok()
	}

	pub fn names(&self) -> impl Iterator<Item = &'a str> + 'a {
		let animations = self.animations;
		animations.iter().map(|animation| animation.name)
	}
}

const fn str_eq(a: &str, b: &str) -> bool {
	let (a, b) = (a.as_bytes(), b.as_bytes());
	if a.len() != b.len() {
		return false;
	}
	let mut i = 0;
	while i < a.len() {
		if a[i] != b[i] {
			return false;
		}
		i += 1;
	}
	true
}

#[cfg(test)]
mod tests {
	use super::*;

	const BLINK: &[Frame] = &[Frame::BLANK, Frame::new([u32::MAX, u32::MAX, u32::MAX, 0xff])];

	#[test]
	fn builtin_names_in_order() {
		let names: Vec<_> = FrameTable::builtin().names().collect();
		assert_eq!(names, vec!["static", "beating"]);
	}

	#[test]
	fn ids_round_trip_through_names() {
		for id in AnimationId::ALL {
			assert_eq!(id.name().parse::<AnimationId>(), Ok(id));
			assert_eq!(id.to_string(), id.name());
			assert_eq!(FrameTable::BUILTIN.get_animation(id.name()), Ok(id.frames()));
		}
	}

	#[test]
	fn lookup_is_exact() {
		let table = FrameTable::builtin();
		for name in ["", "Static", "beat", "beating ", "beating-heart"] {
			assert_eq!(table.get_animation(name), Err(Error::UnknownAnimation), "{name:?}");
			assert!(!table.contains(name));
		}
		assert_eq!("STATIC".parse::<AnimationId>(), Err(Error::UnknownAnimation));
	}

	#[test]
	fn custom_table() {
		const ANIMATIONS: &[Animation<'static>] = &[Animation::new("blink", BLINK)];
		const TABLE: FrameTable<'static> = FrameTable::new(ANIMATIONS);

		assert_eq!(TABLE.frame_count("blink"), Ok(2));
		assert_eq!(TABLE.get_frame("blink", 0), Ok(Frame::BLANK));
		assert_eq!(
			TABLE.get_frame("blink", 2),
			Err(Error::IndexOutOfRange { index: 2, len: 2 })
		);
		assert_eq!(TABLE.frame_count("static"), Err(Error::UnknownAnimation));
	}

	#[test]
	#[should_panic(expected = "duplicate animation name")]
	fn duplicate_names_rejected() {
		let animations = [Animation::new("blink", BLINK), Animation::new("blink", BLINK)];
		FrameTable::new(&animations);
	}

	#[test]
	#[should_panic(expected = "animation has no frames")]
	fn empty_animation_rejected() {
		Animation::new("empty", &[]);
	}

	#[test]
	fn error_messages() {
		assert_eq!(Error::UnknownAnimation.to_string(), "unknown animation");
		assert_eq!(
			Error::IndexOutOfRange { index: 8, len: 8 }.to_string(),
			"frame 8 out of range for an animation of 8 frames"
		);
	}
}
