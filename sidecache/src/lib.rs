#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod cache;
pub mod client;
pub mod error;
mod service;

pub use builder::SidecacheBuilder;
pub use cache::Sidecache;
pub use client::HttpClient;
pub use error::{BoxError, Error, Result};
pub use service::{CacheService, DEFAULT_BASE_URL, TTL_HEADER, ttl_header_value};
