//! One-time loading of the store descriptor.
//!
//! The descriptor is read exactly once per session. Local stores are read
//! from disk; remote stores are fetched with a single blocking GET. The
//! terminal browser runs the load on a background thread and polls for the
//! result so the UI can show a loading state meanwhile.

use anyhow::{Context, Result};
use std::fs;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use tracing::{debug, info};

use crate::location::StoreSource;
use crate::models::Catalog;

/// Reads and parses the store descriptor.
///
/// Any I/O error, non-success HTTP status or parse error is a load failure.
pub fn load_catalog(source: &StoreSource, descriptor_file: &str) -> Result<Catalog> {
    let location = source.descriptor_location(descriptor_file);
    info!("Loading store descriptor from {}", location);

    let content = match source {
        StoreSource::Local(_) => fs::read_to_string(&location)
            .with_context(|| format!("Could not load {descriptor_file} from {location}"))?,
        StoreSource::Remote(_) => fetch_remote(&location, descriptor_file)?,
    };

    let catalog = Catalog::from_json(&content)
        .with_context(|| format!("Could not load {descriptor_file}"))?;

    debug!(
        "Loaded store {:?} with {} apps",
        catalog.store_name,
        catalog.apps.len()
    );

    Ok(catalog)
}

fn fetch_remote(url: &str, descriptor_file: &str) -> Result<String> {
    let response = match ureq::get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => {
            anyhow::bail!("Could not load {descriptor_file}: server answered {code}")
        }
        Err(e) => {
            return Err(anyhow::Error::new(e))
                .with_context(|| format!("Could not load {descriptor_file} from {url}"))
        }
    };

    response
        .into_string()
        .with_context(|| format!("Could not read {descriptor_file} response body"))
}

/// Background descriptor load with polling.
///
/// The loader owns the receiving end of a one-shot channel. `poll` never
/// blocks and yields the result once.
pub struct CatalogLoader {
    receiver: Option<Receiver<Result<Catalog>>>,
}

impl CatalogLoader {
    /// Starts loading on a background thread.
    pub fn spawn(source: StoreSource, descriptor_file: String) -> Self {
        let (sender, receiver) = channel();

        thread::spawn(move || {
            let result = load_catalog(&source, &descriptor_file);
            // The receiver may be gone if the UI quit while loading
            let _ = sender.send(result);
        });

        Self {
            receiver: Some(receiver),
        }
    }

    /// Returns true while the load has not reported back.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }

    /// Checks for the load result without blocking.
    ///
    /// Returns `Some` exactly once, when the background thread has finished.
    pub fn poll(&mut self) -> Option<Result<Catalog>> {
        let receiver = self.receiver.as_ref()?;

        match receiver.try_recv() {
            Ok(result) => {
                self.receiver = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.receiver = None;
                Some(Err(anyhow::anyhow!(
                    "Store loader stopped before reporting a result"
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::PageLocation;
    use crate::session::{Session, SessionState};
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    /// Answers a single HTTP request with `status` and `body`.
    ///
    /// Returns the store URL and a handle yielding the request head.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}/store/index.html"), handle)
    }

    fn failed_session(url: &str, result: Result<Catalog>) -> SessionState {
        let mut session = Session::new(PageLocation::from_url(url).unwrap(), "gingee-cli", "#");
        session.finish_load(result);
        session.state().clone()
    }

    const DESCRIPTOR: &str = r#"{
        "storeName": "Demo",
        "storeLogo": "logo.png",
        "apps": []
    }"#;

    #[test]
    fn test_load_local_catalog() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("gstore.json"), DESCRIPTOR).unwrap();

        let source = StoreSource::Local(temp_dir.path().to_path_buf());
        let catalog = load_catalog(&source, "gstore.json").unwrap();

        assert_eq!(catalog.store_name, "Demo");
    }

    #[test]
    fn test_missing_descriptor_fails() {
        let temp_dir = TempDir::new().unwrap();
        let source = StoreSource::Local(temp_dir.path().to_path_buf());

        let err = load_catalog(&source, "gstore.json").unwrap_err();
        assert!(err.to_string().contains("Could not load gstore.json"));
    }

    #[test]
    fn test_malformed_descriptor_fails() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("gstore.json"), "{ \"storeName\": 1 }").unwrap();
        let source = StoreSource::Local(temp_dir.path().to_path_buf());

        assert!(load_catalog(&source, "gstore.json").is_err());
    }

    #[test]
    fn test_load_remote_catalog() {
        let (url, server) = serve_once("200 OK", DESCRIPTOR);

        let catalog = load_catalog(&StoreSource::parse(&url).unwrap(), "gstore.json").unwrap();

        assert_eq!(catalog.store_name, "Demo");
        let request = server.join().unwrap();
        assert!(request.starts_with("GET /store/gstore.json "));
    }

    #[test]
    fn test_remote_error_status_fails() {
        let (url, server) = serve_once("404 Not Found", "missing");

        let result = load_catalog(&StoreSource::parse(&url).unwrap(), "gstore.json");
        server.join().unwrap();

        let err = result.as_ref().unwrap_err();
        assert!(err.to_string().contains("server answered 404"));
        assert!(matches!(
            failed_session(&url, result),
            SessionState::LoadFailed(message) if message.contains("server answered 404")
        ));
    }

    #[test]
    fn test_remote_non_json_body_fails() {
        let (url, server) = serve_once("200 OK", "<html>not a store</html>");

        let result = load_catalog(&StoreSource::parse(&url).unwrap(), "gstore.json");
        server.join().unwrap();

        assert!(result.is_err());
        assert!(matches!(
            failed_session(&url, result),
            SessionState::LoadFailed(_)
        ));
    }

    #[test]
    fn test_background_loader_reports_once() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("gstore.json"), DESCRIPTOR).unwrap();

        let mut loader = CatalogLoader::spawn(
            StoreSource::Local(temp_dir.path().to_path_buf()),
            "gstore.json".to_string(),
        );

        let deadline = Instant::now() + Duration::from_secs(5);
        let result = loop {
            if let Some(result) = loader.poll() {
                break result;
            }
            assert!(Instant::now() < deadline, "loader did not finish");
            thread::sleep(Duration::from_millis(10));
        };

        assert!(result.is_ok());
        assert!(!loader.is_pending());
        assert!(loader.poll().is_none());
    }
}
