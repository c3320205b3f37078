//! Command-line bootstrap for the `spark-class` and `spark-submit` wrapper
//! scripts.
//!
//! The binary does not execute anything itself. It composes the full JVM
//! invocation for a requested class (java path, classpath, memory, program
//! arguments, extra child environment) and writes it to stdout in a form the
//! calling script can execute directly:
//!
//! - on Unix-like systems, a NUL-delimited token stream, optionally prefixed
//!   with an `env NAME=VALUE ...` wrapper;
//! - on Windows, a single quoted batch command line.
//!
//! stderr carries human diagnostics only and is never part of the protocol.

pub mod args;
pub mod builder;
pub mod config;
pub mod error;
pub mod launch;
pub mod platform;
pub mod render;
