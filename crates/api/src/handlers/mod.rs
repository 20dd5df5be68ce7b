pub mod artist;
pub mod drink;
pub mod fallback;
pub mod quiz;
pub mod show;
pub mod trivia;
pub mod venue;
