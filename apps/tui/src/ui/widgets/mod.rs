pub mod cards;
pub mod charts;
pub mod popup;
pub mod slot;
pub mod theme;
