pub mod about;
pub mod game;
pub mod settings;
