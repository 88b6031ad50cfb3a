/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Changelly client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Typed async client for the Changelly exchange JSON-RPC API.
//!
//! Every call is a JSON-RPC 2.0 envelope signed with HMAC-SHA512 over the
//! exact body bytes and posted to a single endpoint.

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ChangellyClient,
    ChangellyError,
    ClientConfig,
    Credentials,
    IdGenerator,
    RequestSigner,
    Result,
    UuidV4Generator,
};

// Re-export all types
pub use types::*;
