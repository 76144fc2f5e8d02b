pub mod game;
pub mod objective;
pub mod producer;
pub mod template;
