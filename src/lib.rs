//! Preview documents as Markdown by running them through pandoc.
//!
//! [`preview::detect_format`] picks the pandoc reader from the file
//! extension, [`preview::PandocConverter`] runs the conversion and
//! [`viewer::present`] puts the result into a read-only surface of a
//! [`host::Host`].

pub mod config;
pub mod editor;
pub mod error;
pub mod health;
pub mod host;
pub mod preview;
pub mod viewer;

pub use config::Config;
pub use error::{ConfigError, ConversionError, PreviewError};
pub use health::{check_tool_availability, HealthReport};
pub use host::{Host, Session};
pub use preview::{detect_format, Converter, InputFormat, PandocConverter, Previewer};
pub use viewer::{present, SurfaceFlags, SurfaceId, ViewerSurface};
