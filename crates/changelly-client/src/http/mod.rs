/*
[INPUT]:  Credentials, client configuration and RPC parameters
[OUTPUT]: Signed JSON-RPC calls and typed API results
[POS]:    HTTP layer - JSON-RPC over HTTPS communication
[UPDATE]: When adding new RPC methods or changing client behavior
*/

pub mod client;
pub mod currencies;
pub mod error;
pub mod exchange;
pub mod id;
pub mod signature;
pub mod transactions;

pub use error::{ChangellyError, Result};
pub use id::{IdGenerator, UuidV4Generator};
pub use signature::RequestSigner;

pub use client::{ChangellyClient, ClientConfig, Credentials, DEFAULT_HOST};
