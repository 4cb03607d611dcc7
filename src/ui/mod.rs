pub mod result_card;
pub mod results;
pub mod search_input;
pub mod skeleton;
pub mod theme;
