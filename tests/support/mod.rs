//! Shared helpers for the conformance tests.

#![allow(dead_code)]

pub mod parse;
pub mod synthetic;
