mod entry;
mod error;
mod ids;
mod project;
mod range;
mod summary;
mod timer;

pub use entry::*;
pub use error::*;
pub use ids::*;
pub use project::*;
pub use range::*;
pub use summary::*;
pub use timer::*;
