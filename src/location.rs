//! Store sources and the page location derived from them.
//!
//! A store is either a directory on disk (or the descriptor file inside it)
//! or an `http(s)://` location. Both resolve the descriptor relative to the
//! store base, the same way a page resolves `gstore.json` next to itself.

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// Where the store descriptor is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSource {
    /// Store directory on the local file system
    Local(PathBuf),
    /// Store published over HTTP(S); the string is the page or store URL
    Remote(String),
}

impl StoreSource {
    /// Parses a user-supplied store location.
    ///
    /// `http://` and `https://` inputs are remote. Anything else is a path:
    /// a directory is the store itself, a file is taken as the descriptor and
    /// its parent directory becomes the store.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            anyhow::bail!("Store location cannot be empty");
        }

        if is_http_url(input) {
            Url::parse(input).with_context(|| format!("Invalid store URL: {input}"))?;
            return Ok(Self::Remote(input.to_string()));
        }

        let path = PathBuf::from(input);
        if path.is_file() {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            return Ok(Self::Local(dir));
        }

        Ok(Self::Local(path))
    }

    /// Location of the descriptor for this store.
    #[must_use]
    pub fn descriptor_location(&self, descriptor_file: &str) -> String {
        match self {
            Self::Local(dir) => dir.join(descriptor_file).display().to_string(),
            Self::Remote(url) => Url::parse(url)
                .and_then(|page| page.join(descriptor_file))
                .map_or_else(|_| format!("{url}{descriptor_file}"), String::from),
        }
    }

    /// Page location the store is browsed from.
    pub fn page_location(&self) -> Result<PageLocation> {
        match self {
            Self::Local(dir) => PageLocation::for_directory(dir),
            Self::Remote(url) => PageLocation::from_url(url),
        }
    }

    /// Store directory, for local stores.
    #[must_use]
    pub fn local_dir(&self) -> Option<&Path> {
        match self {
            Self::Local(dir) => Some(dir),
            Self::Remote(_) => None,
        }
    }
}

impl fmt::Display for StoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(dir) => write!(f, "{}", dir.display()),
            Self::Remote(url) => write!(f, "{url}"),
        }
    }
}

/// The parts of the page URL the renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// URL scheme without separator (e.g. "https")
    pub protocol: String,
    /// Host with optional port (empty for `file` locations)
    pub host: String,
    /// Directory URL of the page, always ending with `/`
    pub base_url: String,
}

impl PageLocation {
    /// Derives a location from an absolute URL.
    ///
    /// The base URL resolves `.` against the page URL, so dot segments are
    /// normalized and query and fragment are dropped. `host` is the
    /// lowercased host name plus any non-default port, without credentials.
    pub fn from_url(href: &str) -> Result<Self> {
        let url = Url::parse(href).with_context(|| format!("Not an absolute URL: {href}"))?;
        let base = url
            .join(".")
            .with_context(|| format!("URL cannot be used as a store base: {href}"))?;

        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };

        Ok(Self {
            protocol: url.scheme().to_string(),
            host,
            base_url: base.into(),
        })
    }

    /// Derives a `file://` location for a local store directory.
    pub fn for_directory(dir: &Path) -> Result<Self> {
        let absolute = dir
            .canonicalize()
            .with_context(|| format!("Store directory not found: {}", dir.display()))?;

        let base = Url::from_directory_path(&absolute)
            .map_err(|()| anyhow::anyhow!("Store directory is not absolute: {}", absolute.display()))?;

        Ok(Self {
            protocol: "file".to_string(),
            host: String::new(),
            base_url: base.into(),
        })
    }

    /// Absolute download link: `<protocol>://<host>/` followed by the path verbatim.
    #[must_use]
    pub fn download_link(&self, download_url: &str) -> String {
        format!("{}://{}/{}", self.protocol, self.host, download_url)
    }
}

fn is_http_url(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_url_page_in_directory() {
        let location = PageLocation::from_url("https://host/store/index.html?x=1#/app/Calc").unwrap();

        assert_eq!(location.protocol, "https");
        assert_eq!(location.host, "host");
        assert_eq!(location.base_url, "https://host/store/");
    }

    #[test]
    fn test_from_url_without_path() {
        let location = PageLocation::from_url("http://localhost:8080").unwrap();

        assert_eq!(location.host, "localhost:8080");
        assert_eq!(location.base_url, "http://localhost:8080/");
    }

    #[test]
    fn test_from_url_directory_is_kept() {
        let location = PageLocation::from_url("https://host/store/").unwrap();
        assert_eq!(location.base_url, "https://host/store/");
    }

    #[test]
    fn test_from_url_resolves_dot_segments_and_lowercases_host() {
        let location =
            PageLocation::from_url("https://Apps.Example.com/a/b/../store/index.html").unwrap();

        assert_eq!(location.host, "apps.example.com");
        assert_eq!(location.base_url, "https://apps.example.com/a/store/");
    }

    #[test]
    fn test_from_url_host_excludes_credentials() {
        let location = PageLocation::from_url("https://user:pw@host/store/").unwrap();

        assert_eq!(location.host, "host");
        assert_eq!(
            location.download_link("dl/x.zip"),
            "https://host/dl/x.zip"
        );
    }

    #[test]
    fn test_from_url_default_port_is_dropped() {
        let location = PageLocation::from_url("https://host:443/store/").unwrap();
        assert_eq!(location.host, "host");

        let location = PageLocation::from_url("https://host:8443/store/").unwrap();
        assert_eq!(location.host, "host:8443");
    }

    #[test]
    fn test_from_url_rejects_relative() {
        assert!(PageLocation::from_url("store/index.html").is_err());
    }

    #[test]
    fn test_download_link_is_verbatim() {
        let location = PageLocation::from_url("https://host/store/").unwrap();

        assert_eq!(
            location.download_link("downloads/calc.zip"),
            "https://host/downloads/calc.zip"
        );
        // No normalization of the joined path
        assert_eq!(
            location.download_link("/../calc.zip"),
            "https://host//../calc.zip"
        );
    }

    #[test]
    fn test_remote_descriptor_location() {
        let source = StoreSource::parse("https://host/store/index.html").unwrap();
        assert_eq!(
            source.descriptor_location("gstore.json"),
            "https://host/store/gstore.json"
        );

        let source = StoreSource::parse("https://host/store/gstore.json").unwrap();
        assert_eq!(
            source.descriptor_location("gstore.json"),
            "https://host/store/gstore.json"
        );
    }

    #[test]
    fn test_local_file_source_uses_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let descriptor = temp_dir.path().join("gstore.json");
        std::fs::write(&descriptor, "{}").unwrap();

        let source = StoreSource::parse(descriptor.to_str().unwrap()).unwrap();
        assert_eq!(source.local_dir(), Some(temp_dir.path()));
    }

    #[test]
    fn test_local_page_location() {
        let temp_dir = TempDir::new().unwrap();
        let location = PageLocation::for_directory(temp_dir.path()).unwrap();

        assert_eq!(location.protocol, "file");
        assert!(location.host.is_empty());
        assert!(location.base_url.starts_with("file:///"));
        assert!(location.base_url.ends_with('/'));
    }

    #[test]
    fn test_empty_source_rejected() {
        assert!(StoreSource::parse("  ").is_err());
    }
}
