mod color;

pub use color::{Color, PLAYER_PALETTE, TEAM_PALETTE};
