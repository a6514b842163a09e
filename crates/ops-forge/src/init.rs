use crate::error::{ForgeError, Result};
use crate::kind::{match_target, Kind, Target};
use crate::template::{render, TemplateVars};
use regex::Regex;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::NamedTempFile;

pub const DEFAULT_FROM: &str = "node";
pub const DEFAULT_KIND: &str = "command";
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Options for scaffolding a new op.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Template target, loosely matched ("node", "Golang", ...).
    pub from: String,
    /// `command` or `service`.
    pub kind: String,
    /// Destination directory. Created if missing; must be empty if present.
    pub to: PathBuf,
    pub name: String,
    pub description: String,
    pub version: String,
}

impl InitOptions {
    pub fn new(to: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            from: DEFAULT_FROM.to_string(),
            kind: DEFAULT_KIND.to_string(),
            to: to.into(),
            name: name.into(),
            description: String::new(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

/// Result of a successful [`init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initialized {
    pub dir: PathBuf,
    pub kind: Kind,
    pub target: Target,
    /// Written paths relative to `dir`, sorted.
    pub files: Vec<String>,
}

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid regex"))
}

fn version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]{0,127}$").expect("valid regex"))
}

pub fn validate_name(name: &str) -> Result<()> {
    if name_re().is_match(name) {
        Ok(())
    } else {
        Err(ForgeError::NameInvalid(name.to_string()))
    }
}

pub fn validate_version(version: &str) -> Result<()> {
    if version_re().is_match(version) {
        Ok(())
    } else {
        Err(ForgeError::VersionInvalid(version.to_string()))
    }
}

/// Scaffold a new op from the bundled template matching `opts.kind` and
/// `opts.from`, with name, version and description filled in.
pub fn init(opts: &InitOptions) -> Result<Initialized> {
    let kind: Kind = opts.kind.parse()?;
    let target = match_target(&opts.from)?;
    validate_name(&opts.name)?;
    validate_version(&opts.version)?;
    ensure_empty_dir(&opts.to)?;

    let vars = TemplateVars::new(&opts.name, &opts.version, &opts.description);
    let rendered = render(kind, target, &vars)?;

    let mut files = Vec::with_capacity(rendered.len());
    for file in rendered {
        atomic_write(&opts.to.join(&file.path), file.contents.as_bytes())?;
        files.push(file.path);
    }

    tracing::info!(
        dir = %opts.to.display(),
        %kind,
        %target,
        files = files.len(),
        "op initialized"
    );

    Ok(Initialized {
        dir: opts.to.clone(),
        kind,
        target,
        files,
    })
}

fn ensure_empty_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        if std::fs::read_dir(dir)?.next().is_some() {
            return Err(ForgeError::DestinationNotEmpty(dir.to_path_buf()));
        }
    } else {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write `data` to `path` through a tempfile in the same directory so a
/// failed write never leaves a partial file behind.
fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
