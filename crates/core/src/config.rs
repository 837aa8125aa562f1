//! Viewer configuration.
//!
//! Built once at startup and passed by reference to the server; nothing in
//! the workspace mutates it afterwards.

use crate::error::{Result, ViewerError};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 5735;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    assets_dir: PathBuf,
    host: IpAddr,
    port: u16,
    open: bool,
    cors_origin: Option<String>,
}

impl ViewerConfig {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            open: false,
            cors_origin: None,
        }
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn with_cors_origin(mut self, origin: Option<String>) -> Self {
        self.cors_origin = origin;
        self
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn host(&self) -> IpAddr {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn open(&self) -> bool {
        self.open
    }

    pub fn cors_origin(&self) -> Option<&str> {
        self.cors_origin.as_deref()
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Address a browser on this machine should open.
    pub fn url(&self) -> String {
        if self.host.is_loopback() || self.host.is_unspecified() {
            format!("http://localhost:{}", self.port)
        } else {
            format!("http://{}", self.socket_addr())
        }
    }
}

/// Resolve the assets directory given on the command line.
///
/// `raw` is taken relative to `cwd`. When it names a project root that
/// contains `public/assets`, that sub-folder is used instead. The result is
/// canonical so that served paths can be derived by prefix stripping.
pub fn resolve_assets_dir(cwd: &Path, raw: &Path) -> Result<PathBuf> {
    let candidate = cwd.join(raw);
    if !candidate.is_dir() {
        return Err(ViewerError::DirectoryNotFound(candidate));
    }

    let nested = candidate.join("public").join("assets");
    let chosen = if nested.is_dir() { nested } else { candidate };

    chosen.canonicalize().map_err(|source| ViewerError::Io {
        path: chosen.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::new("/tmp/assets");

        assert_eq!(config.port(), 5735);
        assert!(!config.open());
        assert_eq!(config.cors_origin(), None);
        assert_eq!(config.url(), "http://localhost:5735");
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5735");
    }

    #[test]
    fn test_builder() {
        let config = ViewerConfig::new("/tmp/assets")
            .with_port(8080)
            .with_open(true)
            .with_host("192.168.1.20".parse().unwrap())
            .with_cors_origin(Some("http://localhost:5173".to_string()));

        assert_eq!(config.url(), "http://192.168.1.20:8080");
        assert!(config.open());
        assert_eq!(config.cors_origin(), Some("http://localhost:5173"));
    }

    #[test]
    fn test_resolve_relative_dir() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("art")).unwrap();

        let resolved = resolve_assets_dir(temp.path(), Path::new("art")).unwrap();
        assert_eq!(resolved, temp.path().join("art").canonicalize().unwrap());
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_resolve_prefers_public_assets() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("game/public/assets");
        fs::create_dir_all(&nested).unwrap();

        let resolved = resolve_assets_dir(temp.path(), Path::new("game")).unwrap();
        assert_eq!(resolved, nested.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_missing_dir() {
        let temp = tempfile::tempdir().unwrap();

        let err = resolve_assets_dir(temp.path(), Path::new("missing")).unwrap_err();
        assert!(matches!(err, ViewerError::DirectoryNotFound(p) if p == temp.path().join("missing")));
    }

    #[test]
    fn test_resolve_file_rejected() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("model.glb"), b"glTF").unwrap();

        assert!(resolve_assets_dir(temp.path(), Path::new("model.glb")).is_err());
    }
}
