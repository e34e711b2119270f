//! FlowGen - pipeline skeleton generator
//!
//! Copies a fixed set of flow templates into a target project, replacing the
//! placeholder type names with user-supplied identifiers and optionally
//! rewriting the package declaration.
//!
//! # Layout
//!
//! ```text
//! <source>/                 <output>/
//! ├── go_flow.go     ──►    ├── go_flow.go     (_Data → MyData, ...)
//! └── structure.go   ──►    └── structure.go
//! ```
//!
//! # Example
//!
//! ```ignore
//! use flowgen::{Config, GenerateOptions, Names, generate};
//!
//! let names = Names::from_options(Some("MyData"), Some("MyResult"), Some("MyPrep"))?;
//! let opts = GenerateOptions::new(".", "out", names, Config::default()).package("pipeline");
//! let report = generate(&opts)?;
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod generate;
pub mod locator;
pub mod plan;

pub use config::{Config, NamespaceConfig, TemplateDef};
pub use engine::{transform, write};
pub use error::{GenError, Result};
pub use generate::{GenerateOptions, GenerationReport, TemplateOutcome, generate};
pub use locator::{TemplateSpec, locate};
pub use plan::{Names, SubstitutionPlan};

/// Namespace declaration shipped in the stock templates
pub const DEFAULT_DECLARATION: &str = "package goflow";

/// Prefix used to build the overriding declaration
pub const DEFAULT_DECLARATION_PREFIX: &str = "package ";

/// Extension of the stock templates
pub const DEFAULT_EXTENSION: &str = "go";
