pub mod desk;
pub mod dispatch;
pub mod export;
pub mod inspect;
pub mod parse;
pub mod presets;
pub mod reset;
pub mod review;
pub mod reviewer;
pub mod schema;
pub mod shared;
pub mod stats;
pub mod status;
