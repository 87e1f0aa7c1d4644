pub mod card;
pub mod deck;
pub mod import;
pub mod stats;
pub mod validation;

pub use card::*;
pub use deck::*;
pub use import::*;
pub use stats::*;
pub use validation::*;
