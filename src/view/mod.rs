// Terminal presentation of the journey: map, step detail, progress header

pub mod detail;
pub mod map;

pub use detail::{render_blocks, render_detail, KEEPER_NOTE, KEEPER_NOTE_TITLE};
pub use map::{render_map, render_progress_header, MapOptions};

pub const JOURNEY_TITLE: &str = "Cloud Zoo Adventure";
pub const JOURNEY_SUBTITLE: &str = "Onboarding Guide";
