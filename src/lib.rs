pub mod apple;
pub mod canvas;
pub mod config;
pub mod game;
pub mod geometry;
pub mod input;
pub mod snake;
