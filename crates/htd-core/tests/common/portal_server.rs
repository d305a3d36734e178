//! Minimal HTTP/1.1 server imitating the exam portal for integration tests.
//!
//! Serves `GET /HallTicket/GetList?id=...` and `GET /HallTicket/Get?id=...`
//! from canned replies and records every request target. Unknown list ids
//! get an HTML page (as the real portal does); unknown ticket ids get 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const NOT_FOUND_PAGE: &str = "<!DOCTYPE html><html><body><h1>Error</h1></body></html>";

#[derive(Debug, Clone)]
struct Reply {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

/// Canned portal content.
#[derive(Debug, Clone, Default)]
pub struct Portal {
    lists: HashMap<String, Reply>,
    documents: HashMap<String, Reply>,
}

impl Portal {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON ticket list for `id`.
    pub fn list(mut self, id: &str, json: &str) -> Self {
        self.lists.insert(
            id.to_string(),
            Reply {
                status: 200,
                content_type: "application/json",
                body: json.as_bytes().to_vec(),
            },
        );
        self
    }

    /// Bare status (no JSON) for the list lookup of `id`.
    pub fn list_status(mut self, id: &str, status: u16) -> Self {
        self.lists.insert(
            id.to_string(),
            Reply {
                status,
                content_type: "text/plain",
                body: b"unavailable".to_vec(),
            },
        );
        self
    }

    pub fn document(mut self, ticket_id: &str, body: &[u8]) -> Self {
        self.documents.insert(
            ticket_id.to_string(),
            Reply {
                status: 200,
                content_type: "application/pdf",
                body: body.to_vec(),
            },
        );
        self
    }

    pub fn document_status(mut self, ticket_id: &str, status: u16) -> Self {
        self.documents.insert(
            ticket_id.to_string(),
            Reply {
                status,
                content_type: "text/plain",
                body: Vec::new(),
            },
        );
        self
    }

    fn reply(&self, target: &str) -> Reply {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        let id = query
            .split('&')
            .find_map(|pair| pair.strip_prefix("id="))
            .unwrap_or("");
        match path {
            "/HallTicket/GetList" => self.lists.get(id).cloned().unwrap_or(Reply {
                status: 200,
                content_type: "text/html",
                body: NOT_FOUND_PAGE.as_bytes().to_vec(),
            }),
            "/HallTicket/Get" => self.documents.get(id).cloned().unwrap_or(Reply {
                status: 404,
                content_type: "text/plain",
                body: Vec::new(),
            }),
            _ => Reply {
                status: 404,
                content_type: "text/plain",
                body: Vec::new(),
            },
        }
    }
}

/// Running server. Lives until the process exits.
pub struct PortalServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl PortalServer {
    pub fn start(portal: Portal) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let portal = Arc::new(portal);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let portal = Arc::clone(&portal);
                let log = Arc::clone(&log);
                thread::spawn(move || handle(stream, &portal, &log));
            }
        });
        Self {
            base_url: format!("http://127.0.0.1:{}/", port),
            requests,
        }
    }

    /// Request targets (path + query) in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn list_requests(&self) -> usize {
        self.count("/HallTicket/GetList?")
    }

    pub fn download_requests(&self) -> usize {
        self.count("/HallTicket/Get?")
    }

    fn count(&self, prefix: &str) -> usize {
        self.requests().iter().filter(|r| r.starts_with(prefix)).count()
    }
}

fn handle(mut stream: TcpStream, portal: &Portal, log: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
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
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let (method, target) = (parts.next().unwrap_or(""), parts.next().unwrap_or(""));
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nConnection: close\r\n\r\n");
        return;
    }
    log.lock().unwrap().push(target.to_string());

    let reply = portal.reply(target);
    let head = format!(
        "HTTP/1.1 {} Canned\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        reply.status,
        reply.content_type,
        reply.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&reply.body);
}
