pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod model;
pub mod pipeline;
pub mod registry;

pub use error::{IdentifierKind, TranslateError};
pub use io::network::ContactNetwork;
pub use io::rates::RateTable;
pub use io::status::InitialStatus;
pub use model::para::TransitionMatrices;
pub use registry::Registry;
