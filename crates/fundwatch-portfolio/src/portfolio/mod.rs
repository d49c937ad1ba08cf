//! Portfolio snapshot types.

mod builder;
#[allow(clippy::module_inception)]
mod portfolio;
mod status;

pub use builder::PortfolioBuilder;
pub use portfolio::Portfolio;
pub use status::StatusLine;
