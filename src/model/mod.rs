pub mod chronicle;
pub mod officeholder;
pub mod rank;
pub mod republic;

pub use chronicle::YearRecord;
pub use officeholder::Officeholder;
pub use rank::Rank;
pub use republic::{INITIAL_PSI, Republic};
