pub mod menu;
pub mod selection;
