pub mod error;

// Portal domain modules
pub mod case;
pub mod config;
pub mod role;
pub mod source;
pub mod view_config;
pub mod visibility;

pub use error::*;

pub use case::*;
pub use config::*;
pub use role::*;
pub use source::*;
pub use view_config::*;
pub use visibility::*;
