pub mod contact;
pub mod easter_egg;
pub mod effects;
pub mod modal;
pub mod navbar;
pub mod network_background;
pub mod particles;
pub mod typing;
