// Reusable components live here.

pub mod loading_spinner;
pub mod modal;
pub mod navbar;
pub mod pagination;
pub mod search_box;
pub mod sidebar;
pub mod skeleton;
pub mod stats_card;
pub mod status_chip;
