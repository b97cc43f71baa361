//! SSM Output CLI Library
//!
//! This crate provides the command-line interface for ssm-output, which prints
//! the per-instance output of a command previously run through AWS Systems
//! Manager.
//!
//! # Examples
//!
//! ```bash
//! # Plain text report
//! ssmo --commandId 0b8f6d1e-0000-4c6e-9d3f-example
//!
//! # HTML fragment, without the comment and progress lines
//! ssmo --region us-east-1 --commandId 0b8f6d1e-0000-4c6e-9d3f-example --html --quiet
//!
//! # Report every instance that has output, then fail if any did not
//! ssmo --commandId 0b8f6d1e-0000-4c6e-9d3f-example --keep-going
//! ```

pub mod cli_args;
