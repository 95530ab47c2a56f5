//! Full-screen pages other than the clock face.

mod debug;

pub use debug::draw_debug_page;
