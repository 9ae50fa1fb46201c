pub mod analysis_result;
pub mod errors;
pub mod provider;
pub mod recommendation;

pub use analysis_result::*;
pub use errors::*;
pub use provider::*;
pub use recommendation::*;
