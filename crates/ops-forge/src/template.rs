use crate::error::{ForgeError, Result};
use crate::kind::{Kind, Target};
use rust_embed::Embed;

/// Bundled template trees, laid out as `<kind>/<target>/<file>`.
///
/// Files whose name starts with `_` are written out with a leading `.`
/// instead (`_gitignore` becomes `.gitignore`).
#[derive(Embed)]
#[folder = "templates/"]
struct Templates;

/// Values substituted into template files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    /// Bare op name, used for package and module names.
    pub pkg: String,
    /// `name:version`, as referenced from `ops.yml`.
    pub name: String,
    pub version: String,
    pub description: String,
}

impl TemplateVars {
    pub fn new(name: &str, version: &str, description: &str) -> Self {
        Self {
            pkg: name.to_string(),
            name: format!("{name}:{version}"),
            version: version.to_string(),
            description: description.to_string(),
        }
    }

    fn context(&self) -> tera::Context {
        let mut ctx = tera::Context::new();
        ctx.insert("pkg", &self.pkg);
        ctx.insert("name", &self.name);
        ctx.insert("version", &self.version);
        ctx.insert("description", &self.description);
        ctx
    }
}

/// One rendered file, ready to be written relative to the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: String,
    pub contents: String,
}

/// Render every file of the `kind`/`target` template, sorted by output path.
pub fn render(kind: Kind, target: Target, vars: &TemplateVars) -> Result<Vec<RenderedFile>> {
    let prefix = format!("{kind}/{target}/");
    let ctx = vars.context();

    let mut files = Vec::new();
    for source in Templates::iter() {
        let Some(relative) = source.strip_prefix(&prefix) else {
            continue;
        };
        let Some(file) = Templates::get(&source) else {
            continue;
        };
        let raw = String::from_utf8_lossy(&file.data);
        let contents =
            tera::Tera::one_off(&raw, &ctx, false).map_err(|source| ForgeError::Render {
                file: relative.to_string(),
                source,
            })?;
        files.push(RenderedFile {
            path: output_path(relative),
            contents,
        });
    }

    if files.is_empty() {
        return Err(ForgeError::TemplateNotFound(format!("{kind}/{target}")));
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn output_path(relative: &str) -> String {
    relative
        .split('/')
        .map(|part| match part.strip_prefix('_') {
            Some(rest) => format!(".{rest}"),
            None => part.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}
