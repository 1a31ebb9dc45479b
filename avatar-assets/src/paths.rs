use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

pub const WWWROOT_DIR_NAME: &str = "wwwroot";
pub const MODELS_DIR_NAME: &str = "models";
pub const SHAPE_KEYS_FILE_NAME: &str = "avatar_shape_keys.glb";

/// Url prefix under which the backend serves `wwwroot/models`.
pub const MODELS_URL_PREFIX: &str = "/models";

/// Project root, two levels above this crate's manifest.
pub fn resolve_root() -> Result<PathBuf> {
    resolve_root_from(&Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml"))
}

/// Returns the grandparent directory of `location`, saturating at the filesystem root.
///
/// Relative locations are taken relative to the current directory. Symlinks are resolved when
/// `location` exists, otherwise the path is used as-is.
pub fn resolve_root_from(location: &Path) -> Result<PathBuf> {
    let location = if location.is_absolute() {
        location.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to query the current directory")?
            .join(location)
    };
    let location = std::fs::canonicalize(&location).unwrap_or(location);

    let root = location
        .ancestors()
        .nth(2)
        .or_else(|| location.ancestors().last())
        .unwrap_or(location.as_path())
        .to_path_buf();

    log::debug!("resolved project root {}", root.display());
    Ok(root)
}

pub fn output_dir(root: &Path) -> PathBuf {
    root.join(WWWROOT_DIR_NAME).join(MODELS_DIR_NAME)
}

/// Creates `<root>/wwwroot/models` including all missing parents and returns it.
///
/// An already existing directory is not an error. A file occupying any segment of the path is.
pub fn ensure_output_dir(root: &Path) -> Result<PathBuf> {
    let dir = output_dir(root);

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    log::debug!("ensured {}", dir.display());
    Ok(dir)
}

pub fn compute_output_path(output_dir: &Path) -> PathBuf {
    output_dir.join(SHAPE_KEYS_FILE_NAME)
}

/// Maps `path` inside `output_dir` to the url it is served at,
/// e.g. `/models/avatar_shape_keys.glb`.
///
/// Components are joined with `/` regardless of platform. Returns `None` for paths outside of
/// `output_dir`, paths containing `..` and paths that are not valid UTF-8.
pub fn public_url(output_dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(output_dir).ok()?;

    let mut url = MODELS_URL_PREFIX.to_owned();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                url.push('/');
                url.push_str(part.to_str()?);
            }
            Component::CurDir => {}
            _ => return None,
        }
    }

    Some(url)
}

/// Locations handed to the shape-key generator.
///
/// Only constructed after the output directory has been created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeKeyPaths {
    root: PathBuf,
    output_dir: PathBuf,
    output_path: PathBuf,
}

impl ShapeKeyPaths {
    pub fn resolve() -> Result<Self> {
        Self::from_root(resolve_root()?)
    }

    pub fn from_root(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let output_dir = ensure_output_dir(&root)?;
        let output_path = compute_output_path(&output_dir);

        log::info!("Project root: {}", root.display());
        log::info!("Output directory: {}", output_dir.display());

        Ok(Self {
            root,
            output_dir,
            output_path,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn public_url(&self) -> String {
        public_url(&self.output_dir, &self.output_path)
            .unwrap_or_else(|| format!("{}/{}", MODELS_URL_PREFIX, SHAPE_KEYS_FILE_NAME))
    }
}
