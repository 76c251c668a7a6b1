use embedded_graphics::{Pixel, pixelcolor::BinaryColor, prelude::*};

use crate::frames::{Frame, HEIGHT, WIDTH};

impl OriginDimensions for Frame {
	fn size(&self) -> Size {
		Size::new(WIDTH as u32, HEIGHT as u32)
	}
}

// Dark pixels are drawn too.
impl Drawable for Frame {
	type Color = BinaryColor;
	type Output = ();

	fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
	where
		D: DrawTarget<Color = BinaryColor>,
	{
		target.draw_iter(self.pixels().map(|(x, y, on)| {
			let color = if on { BinaryColor::On } else { BinaryColor::Off };
			Pixel(Point::new(x as i32, y as i32), color)
		}))
	}
}
