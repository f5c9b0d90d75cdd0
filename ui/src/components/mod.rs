//! Shared components: the building blocks screens are assembled from.
pub mod coin_row;
pub mod common;
pub mod pico;
pub mod search_bar;
