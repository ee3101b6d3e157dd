//! Startup asset loaders.
//!
//! - `remote`: fetch the Lottie JSON document over HTTP
//! - `style`: read the local stylesheet

mod error;
mod payload;
mod remote;
mod style;

pub use error::{AssetError, DecodeError, FetchError, StyleError};
pub use payload::{AssetPayload, PayloadKind};
pub use remote::{fetch_asset, load_asset};
pub use style::{load_style, StyleText};
