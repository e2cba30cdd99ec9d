pub mod codegen;
pub mod config;
pub mod convert;
pub mod debug;
pub mod document;
pub mod error;
pub mod outline;
pub mod resolver;
pub mod session;

pub use codegen::*;
pub use config::*;
pub use convert::*;
pub use document::*;
pub use outline::*;
pub use resolver::*;
pub use session::*;
