pub mod osu_api;
pub mod tmux;
