//! Client library for the Tado smart-thermostat cloud API.
//!
//! Tado serves two API generations: the legacy zone model on `my.tado.com`
//! and the room/device model of X-line homes on `hops.tado.com`. The
//! [`Tado`] facade logs in once, detects which generation the account uses
//! and forwards every call to the matching backend, normalizing zone state
//! into one uniform record either way.
//!
//! ```no_run
//! use tado_client::{Tado, models::ZoneId};
//!
//! let tado = Tado::new("user@example.com", "password")?;
//! let state = tado.get_zone_state(ZoneId(1))?;
//! println!("{:?} at {:?} °C", state.current_hvac_action, state.current_temp);
//! # Ok::<(), tado_client::error::TadoApiError>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod interface;
pub mod models;
pub mod utils;
pub mod zone_state;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::error::TadoApiError;
pub use crate::interface::Tado;
pub use crate::zone_state::ZoneState;
