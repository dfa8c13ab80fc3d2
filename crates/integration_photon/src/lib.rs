//! Photon geocoding gateway
//!
//! Forward and reverse geocoding through a single
//! [Photon](https://photon.komoot.io) instance, translated into the
//! provider-independent result shape from the `domain` crate.
//!
//! # Architecture
//!
//! [`GeocodingGateway`] runs each lookup as a fixed pipeline:
//!
//! 1. validate the raw parameters into a `GeocodingQuery`,
//! 2. build the provider URL ([`build_url`]),
//! 3. fetch it once through an [`UpstreamClient`] ([`HttpUpstreamClient`] by default),
//! 4. translate the body ([`translate`]).
//!
//! Any failure is a [`GeocodingError`] whose [`ErrorKind`] fixes the status
//! code and public message.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::GeocodingParams;
//! use integration_photon::{GeocodingGateway, PhotonConfig};
//!
//! let gateway = GeocodingGateway::from_config(&PhotonConfig::default())?;
//! let reply = gateway
//!     .respond(&GeocodingParams::forward("Brandenburger Tor").with_limit(3))
//!     .await;
//! println!("{} {}", reply.status, reply.body);
//! ```

mod client;
mod config;
mod error;
mod gateway;
mod request;
mod translator;

pub use client::{HttpUpstreamClient, UpstreamClient, UpstreamResponse};
pub use config::PhotonConfig;
pub use error::{ErrorKind, GeocodingError};
pub use gateway::{GatewayReply, GeocodingGateway};
pub use request::build_url;
pub use translator::{COPYRIGHTS, translate};
