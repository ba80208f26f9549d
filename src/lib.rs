pub mod camera;
pub mod cell;
pub mod config;
pub mod events;
pub mod grid;
pub mod io;
pub mod pattern;
pub mod ticker;
pub mod world;

pub type ScreenSize = u16;
