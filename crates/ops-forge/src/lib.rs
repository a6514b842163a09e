//! `ops-forge` — scaffold a new op from the bundled templates.
//!
//! ```rust,ignore
//! use ops_forge::{init, InitOptions};
//!
//! let mut opts = InitOptions::new("./my-op", "my-op");
//! opts.from = "golang".into();
//! opts.kind = "service".into();
//! let out = init(&opts)?;
//! println!("wrote {} files to {}", out.files.len(), out.dir.display());
//! ```

pub mod error;
pub mod init;
pub mod kind;
pub mod template;

pub use error::{ForgeError, Result};
pub use init::{init, InitOptions, Initialized};
pub use kind::{match_target, Kind, Target};
pub use template::{render, RenderedFile, TemplateVars};
