//! Configuration Provider Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`StaticConfigProvider`] | Fixed path/value pairs, for embedding hosts and tests |

pub mod static_values;

pub use static_values::StaticConfigProvider;
