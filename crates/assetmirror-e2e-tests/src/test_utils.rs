//! Minimal HTTP/1.1 server plus manifest helpers for end-to-end tests.
//!
//! The server responds to GET with the registered body for the request path
//! (query string ignored) and 404 for anything else.

use eyre::Result;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

/// Starts a server in a background thread serving `files`, keyed by raw
/// (still percent-encoded) request path such as "/img/logo%20final.png".
/// Returns the base URL without a trailing slash, e.g. "http://127.0.0.1:12345".
/// The server runs until the process exits.
pub fn start_server(files: HashMap<String, Vec<u8>>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    let files = Arc::new(files);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let files = Arc::clone(&files);
            thread::spawn(move || handle(stream, &files));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, files: &HashMap<String, Vec<u8>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };

    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");
    let path = target.split('?').next().unwrap_or("/");

    match files.get(path) {
        Some(body) => {
            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(body);
        }
        None => {
            let _ = stream.write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        }
    }
}

/// Writes a manifest file into a fresh temp dir; returns the dir and path.
pub fn write_manifest(contents: &str) -> Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let manifest_path = temp_dir.path().join("metadata.json");
    std::fs::write(&manifest_path, contents)?;
    Ok((temp_dir, manifest_path))
}

/// Builds a manifest JSON body from (url, filename, type) triples; pass None
/// to omit a field.
pub fn manifest_json(entries: &[(Option<&str>, Option<&str>, Option<&str>)]) -> String {
    let assets: Vec<serde_json::Value> = entries
        .iter()
        .map(|(url, filename, kind)| {
            let mut entry = serde_json::Map::new();
            if let Some(url) = url {
                entry.insert("url".to_string(), serde_json::json!(url));
            }
            if let Some(filename) = filename {
                entry.insert("filename".to_string(), serde_json::json!(filename));
            }
            if let Some(kind) = kind {
                entry.insert("type".to_string(), serde_json::json!(kind));
            }
            serde_json::Value::Object(entry)
        })
        .collect();
    serde_json::json!({ "assets": assets }).to_string()
}
