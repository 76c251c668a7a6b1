pub const WIDTH: usize = 13;
pub const HEIGHT: usize = 8;
pub const PIXELS: usize = WIDTH * HEIGHT;
pub const WORD_COUNT: usize = 4;

const WORD_BITS: usize = u32::BITS as usize;

/// Pixel `(x, y)` is bit `y * WIDTH + x` counted from bit 0 of word 0.
/// Bits from `PIXELS` upwards are padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Frame {
	words: [u32; WORD_COUNT],
}

impl Frame {
	pub const BLANK: Frame = Frame::new([0; WORD_COUNT]);

	pub const fn new(words: [u32; WORD_COUNT]) -> Self {
		Self { words }
	}

	/// Bit `x` of `rows[y]` is pixel `(x, y)`.
	pub const fn from_rows(rows: [u16; HEIGHT]) -> Self {
		let mut words = [0; WORD_COUNT];
		let mut y = 0;
		while y < HEIGHT {
			let mut x = 0;
			while x < WIDTH {
				if (rows[y] >> x) & 1 == 1 {
					let bit = y * WIDTH + x;
					words[bit / WORD_BITS] |= 1 << (bit % WORD_BITS);
				}
				x += 1;
			}
			y += 1;
		}
		Self { words }
	}

	pub const fn words(&self) -> [u32; WORD_COUNT] {
		self.words
	}

	pub const fn pixel(&self, x: usize, y: usize) -> bool {
		if x >= WIDTH || y >= HEIGHT {
			return false;
		}
		let bit = y * WIDTH + x;
		(self.words[bit / WORD_BITS] >> (bit % WORD_BITS)) & 1 == 1
	}

	pub const fn row(&self, y: usize) -> u16 {
		let mut row = 0;
		let mut x = 0;
		while x < WIDTH {
			if self.pixel(x, y) {
				row |= 1 << x;
			}
			x += 1;
		}
		row
	}

	pub const fn lit_count(&self) -> u32 {
		let mut count = 0;
		let mut i = 0;
		while i < WORD_COUNT {
			count += (self.words[i] & used_mask(i)).count_ones();
			i += 1;
		}
		count
	}

	pub const fn padding_is_clear(&self) -> bool {
		let mut i = 0;
		while i < WORD_COUNT {
			if self.words[i] & !used_mask(i) != 0 {
				return false;
			}
			i += 1;
		}
		true
	}

	pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
		(0..HEIGHT).flat_map(move |y| (0..WIDTH).map(move |x| (x, y, self.pixel(x, y))))
	}

	pub fn lit(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
		self.pixels().filter(|&(_, _, on)| on).map(|(x, y, _)| (x, y))
	}
}

const fn used_mask(word: usize) -> u32 {
	let first = word * WORD_BITS;
	if first >= PIXELS {
		0
	} else if first + WORD_BITS <= PIXELS {
		u32::MAX
	} else {
		(1 << (PIXELS - first)) - 1
	}
}

macro_rules! frames {
	($id:ident = [$($frame_name:ident),* $(,)?]) => {
		$(
			pub mod $frame_name;
		)*

		pub const $id: &[Frame] = &[
			$(
				Frame::new($frame_name::WORDS),
			)*
		];
	};
}

frames!(HEART_STATIC = [little_heart]);
frames!(
	HEART_ANIM = [heart_1, heart_2, heart_3, heart_4, heart_5, heart_6, heart_7, heart_8]
);
