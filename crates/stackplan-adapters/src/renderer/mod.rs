//! Template renderers.

mod simple;

pub use simple::{PlaceholderError, SimpleRenderer};
