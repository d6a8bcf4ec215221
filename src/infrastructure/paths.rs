use std::path::PathBuf;

/// Resolved location of the config file. Computed from the store root;
/// `exists` reflects the filesystem at resolution time.
#[derive(Debug, Clone)]
pub struct ConfigLocation {
    pub file: PathBuf,
    pub dir: PathBuf,
    pub exists: bool,
}
