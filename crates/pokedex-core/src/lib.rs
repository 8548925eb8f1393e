pub mod error;
pub mod format;
pub mod traits;
pub mod types;

pub use error::Error;
pub use traits::PokemonApi;
pub use types::{ErrorResult, PokemonSummary, TypeQueryResult};
