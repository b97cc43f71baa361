//! SSM Output Core Library
//!
//! This crate reads back the results of a command previously sent through AWS
//! Systems Manager and renders each targeted instance's standard output as
//! plain text or an HTML fragment.
//!
//! # Key Features
//!
//! - **Command Resolution**: Look up a command's comment and target groups by ID
//! - **Invocation Fetching**: Fetch each instance's captured output, one at a time
//! - **Report Rendering**: Plain text or HTML with an index of instances
//! - **Error Policy**: Stop at the first missing invocation, or keep going
//!
//! # Examples
//!
//! ```no_run
//! use ssm_output_core::config::Settings;
//! use ssm_output_core::report;
//! use ssm_output_core::service::SsmService;
//!
//! let settings = Settings::new("0b8f6d1e-0000-4c6e-9d3f-example", "ap-southeast-2");
//! let service = SsmService::connect(&settings.region, None)?;
//! report::run(&settings, &service, std::io::stdout())?;
//! # Ok::<(), ssm_output_core::error::Error>(())
//! ```

pub mod command_records;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod render;
pub mod report;
pub mod resolver;
pub mod service;
