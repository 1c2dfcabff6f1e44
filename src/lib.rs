#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod canon;
mod character_sets;
mod checkers;
mod component;
mod error;
mod helpers;
mod input;
mod ipv4;
mod ipv6;
mod parsed;
mod query;
mod replace;
mod resolve;
mod scheme;
mod types;
mod unicode;
mod url;

// Public API
pub use canon::canonicalize;
pub use component::Component;
pub use input::UrlInput;
pub use parsed::Parsed;
pub use query::{QueryMap, QueryPairs};
pub use replace::{Replacement, Replacements};
pub use scheme::is_standard_scheme;
pub use url::{PORT_INVALID, PORT_UNSPECIFIED, Url};
