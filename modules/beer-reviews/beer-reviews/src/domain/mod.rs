//! Domain layer: pure query logic, repository ports and services.
//!
//! - `pagination` - page request to row-number window
//! - `filter` - statistics filter acceptance and clamping
//! - `flatten` - fan-out row collapse for joined listings
//! - `average` - fixed-point average rendering
//! - `repos` - repository traits implemented by `infra::storage`
//! - `service` - services composed in `module`

pub mod average;
pub mod error;
pub mod filter;
pub mod flatten;
pub mod pagination;
pub mod repos;
pub mod service;
