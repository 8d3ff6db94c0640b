// Per-tick simulation systems, run in order: motion, collision, resolution, win.

pub mod collision;
pub mod motion;
pub mod resolution;
pub mod win;
