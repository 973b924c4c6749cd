pub mod gameplay;
pub mod session;

pub use gameplay::place_piece;
pub use session::{connect, disconnect};
