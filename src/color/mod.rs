mod note;
mod utils;

use smart_leds::RGB8;

pub use note::{NOTE_COLORS, NOTE_COUNT, Note};
pub use utils::{BLACK, rgb_from_u32, with_red_only};

pub type Rgb = RGB8;
