// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary to the external coaching-text collaborator.
//!
//! The engine never generates coaching prose itself. It derives a compact
//! context profile from the active [`promo_master_domain::UserIdentity`],
//! sends it with the member's question to a remote service, and keeps an
//! ordered conversation transcript. Any collaborator failure resolves to a
//! fixed fallback message so a session never crashes over a flaky upstream.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod client;
mod error;
mod profile;
mod transcript;

#[cfg(test)]
mod tests;

pub use client::{
    CoachClient, CoachRequest, CoachResponse, FALLBACK_MESSAGE, resolve_reply,
};
pub use error::CoachError;
pub use profile::context_profile;
pub use transcript::{ChatMessage, ChatRole, Transcript};
