use embassy_futures::select::{Either, select};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Timer};
use embedded_graphics::{Drawable, pixelcolor::BinaryColor, prelude::DrawTarget};

use crate::{
	frames::Frame,
	player::{Playback, Player},
	table::{AnimationId, FrameTable},
};

pub static INDICATOR_STATE: Signal<CriticalSectionRawMutex, IndicatorState> = Signal::new();

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum IndicatorState {
	#[default]
	Off     = 0,
	Static  = 1,
	Beating = 2,
}

impl IndicatorState {
	pub const fn animation(self) -> Option<AnimationId> {
		match self {
			IndicatorState::Off => None,
			IndicatorState::Static => Some(AnimationId::Static),
			IndicatorState::Beating => Some(AnimationId::Beating),
		}
	}
}

#[derive(Clone, Copy, Debug)]
pub struct IndicatorConfig {
	pub frame_interval: Duration,
	pub playback:       Playback,
}

impl Default for IndicatorConfig {
	fn default() -> Self {
		Self {
			frame_interval: Duration::from_millis(100),
			playback:       Playback::Loop,
		}
	}
}

pub fn set_state(state: IndicatorState) {
	INDICATOR_STATE.signal(state);
}

pub async fn run_indicator<D>(display: &mut D, table: &FrameTable<'_>, config: IndicatorConfig) -> !
where
	D: DrawTarget<Color = BinaryColor>,
{
	let mut state = IndicatorState::Off;
	loop {
		log::debug!("indicator: {:?}", state);

		let frames = match state.animation() {
			None => None,
			Some(id) => match table.get_animation(id.name()) {
				Ok(frames) => Some(frames),
				Err(err) => {
					log::warn!("indicator: {} `{}`", err, id);
					None
				}
			},
		};

		state = match (state, frames) {
			(IndicatorState::Beating, Some(frames)) => {
				let Either::Second(r) =
					select(play(display, frames, config), INDICATOR_STATE.wait()).await;
				r
			}
			(_, Some(frames)) => {
				if let Some(frame) = frames.first() {
					show(display, frame);
				}
				INDICATOR_STATE.wait().await
			}
			(_, None) => {
				if display.clear(BinaryColor::Off).is_err() {
					log::warn!("indicator: failed to clear display");
				}
				INDICATOR_STATE.wait().await
			}
		}
	}
}

async fn play<D>(display: &mut D, frames: &[Frame], config: IndicatorConfig) -> !
where
	D: DrawTarget<Color = BinaryColor>,
{
	for frame in Player::new(frames, config.playback) {
		show(display, frame);
		Timer::after(config.frame_interval).await;
	}

	// `Once` holds the last frame.
	loop {
		core::future::pending::<()>().await;
	}
}

fn show<D>(display: &mut D, frame: &Frame)
where
	D: DrawTarget<Color = BinaryColor>,
{
	if frame.draw(display).is_err() {
		log::warn!("indicator: failed to draw frame");
	}
}
