use crate::frames::Frame;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Playback {
	#[default]
	Loop     = 0,
	Once     = 1,
	PingPong = 2,
}

#[derive(Clone, Debug)]
pub struct Player<'a> {
	frames:   &'a [Frame],
	playback: Playback,
	next:     Option<usize>,
	forward:  bool,
}

impl<'a> Player<'a> {
	pub fn new(frames: &'a [Frame], playback: Playback) -> Self {
		Self {
			frames,
			playback,
			next: (!frames.is_empty()).then_some(0),
			forward: true,
		}
	}

	pub fn position(&self) -> Option<usize> {
		self.next
	}

	pub fn is_finished(&self) -> bool {
		self.next.is_none()
	}

	pub fn reset(&mut self) {
		self.next = (!self.frames.is_empty()).then_some(0);
		self.forward = true;
	}

	fn following(&mut self, index: usize) -> Option<usize> {
		let last = self.frames.len() - 1;

		match self.playback {
			Playback::Loop => Some(if index == last { 0 } else { index + 1 }),
			Playback::Once => (index < last).then_some(index + 1),
			Playback::PingPong if last == 0 => Some(0),
			Playback::PingPong => {
				if self.forward && index == last {
					self.forward = false;
				} else if !self.forward && index == 0 {
					self.forward = true;
				}

				Some(if self.forward { index + 1 } else { index - 1 })
			}
		}
	}
}

impl<'a> Iterator for Player<'a> {
	type Item = &'a Frame;

	fn next(&mut self) -> Option<&'a Frame> {
		let index = self.next?;
		let frame = self.frames.get(index)?;
		self.next = self.following(index);
		Some(frame)
	}
}
