pub mod flush;
pub mod model;
pub mod report;
pub mod sim;
pub mod testutil;

pub use model::{Officeholder, Rank, Republic, YearRecord};
pub use report::{OfficeReport, Report};
