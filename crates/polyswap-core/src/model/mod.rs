pub mod card;
pub mod deck;
pub mod schedule;
pub mod toss;
