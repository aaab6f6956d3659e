//! LiteSVM harness shared by the program integration tests.
//!
//! Tests load the built programs from `target/deploy` and talk to them
//! through raw instructions: Anchor discriminator plus Borsh arguments.

pub mod common;
