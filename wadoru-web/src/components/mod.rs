pub mod keyboard;
pub mod nav_controls;
pub mod puzzle_link;
pub mod title;
