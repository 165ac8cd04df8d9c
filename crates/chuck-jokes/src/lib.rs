//! # chuck-jokes
//!
//! The numbered joke catalog and the one-time background fetch that fills it.

pub mod catalog;
pub mod fetch;

pub use catalog::{CatalogError, CatalogStatus, JokeCatalog};
pub use fetch::{extract_jokes, JokeFetcher};

use std::sync::Arc;
use tracing::{error, info};

/// Fetch the catalog once in the background.
///
/// Failure is logged and recorded on the catalog; lookups then report
/// `NotLoaded` instead of the process going down.
pub fn spawn_population(
    catalog: Arc<JokeCatalog>,
    fetcher: JokeFetcher,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match fetcher.fetch().await {
            Ok(jokes) => {
                let count = jokes.len();
                match catalog.populate(jokes) {
                    Ok(()) => info!("joke catalog loaded: {count} jokes"),
                    Err(e) => error!("joke catalog population rejected: {e}"),
                }
            }
            Err(e) => {
                error!("joke catalog population failed: {e}");
                catalog.mark_failed(&e.to_string());
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chuck_core::config::JokesConfig;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one HTTP response with `body`, returning the raw request it received.
    async fn serve_once(body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/jokes", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).to_lowercase()
        });
        (url, server)
    }

    #[tokio::test]
    async fn test_population_loads_catalog_from_page() {
        let page = r#"<html><body><div class="m-detail--body"><ul>
            <li>Chuck Norris counted to infinity. Twice.</li>
            <li>Chuck Norris can divide by zero.</li>
            </ul></div></body></html>"#;
        let (url, server) = serve_once(page).await;

        let catalog = Arc::new(JokeCatalog::new());
        let fetcher = JokeFetcher::new(JokesConfig {
            url,
            referer: "https://www.google.com/".to_string(),
            timeout_secs: 5,
            ..Default::default()
        });
        spawn_population(catalog.clone(), fetcher).await.unwrap();

        assert_eq!(catalog.status(), CatalogStatus::Loaded(2));
        assert_eq!(
            catalog.get(1),
            Ok("Chuck Norris counted to infinity. Twice.")
        );
        assert_eq!(catalog.get(2), Ok("Chuck Norris can divide by zero."));

        let request = server.await.unwrap();
        assert!(request.starts_with("get /jokes "));
        assert!(request.contains("referer: https://www.google.com/"));
        assert!(request.contains("user-agent: mozilla/5.0"));
    }

    #[tokio::test]
    async fn test_failed_population_marks_catalog() {
        let catalog = Arc::new(JokeCatalog::new());
        let fetcher = JokeFetcher::new(JokesConfig {
            url: "http://127.0.0.1:9/jokes".to_string(),
            timeout_secs: 2,
            ..Default::default()
        });
        spawn_population(catalog.clone(), fetcher).await.unwrap();
        assert!(!catalog.is_loaded());
        assert!(matches!(catalog.status(), CatalogStatus::Failed(_)));
        assert_eq!(catalog.get(5), Err(CatalogError::NotLoaded));
    }
}
