//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed map of request paths to bodies; every other path gets 404.
//! Paths can also be given an explicit status, or made to close the connection
//! without any response. Request paths are recorded in
//! arrival order so tests can assert on fetch order.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
enum Route {
    Reply { status: u32, body: Vec<u8> },
    /// Close the socket after reading the request.
    Drop,
}

#[derive(Debug, Default)]
pub struct FileServerBuilder {
    routes: HashMap<String, Route>,
}

impl FileServerBuilder {
    /// Serve `body` with 200 at `path` (e.g. "/u/r/main/images/612x612/a_A_1.png").
    pub fn file(mut self, path: &str, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(
            path.to_string(),
            Route::Reply {
                status: 200,
                body: body.into(),
            },
        );
        self
    }

    /// Answer `path` with `status` and an empty body.
    pub fn status(mut self, path: &str, status: u32) -> Self {
        self.routes.insert(
            path.to_string(),
            Route::Reply {
                status,
                body: Vec::new(),
            },
        );
        self
    }

    /// Accept the request for `path`, then close the socket without replying.
    pub fn drop_connection(mut self, path: &str) -> Self {
        self.routes.insert(path.to_string(), Route::Drop);
        self
    }

    pub fn start(self) -> FileServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes = Arc::new(self.routes);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        thread::spawn(move || {
            // One request at a time, in arrival order.
            for stream in listener.incoming().flatten() {
                handle(stream, &routes, &log);
            }
        });
        FileServer {
            base_url: format!("http://127.0.0.1:{}", port),
            requests,
        }
    }
}

/// A running server. It lives until the test process exits.
pub struct FileServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FileServer {
    pub fn builder() -> FileServerBuilder {
        FileServerBuilder::default()
    }

    /// Request paths seen so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    log: &Mutex<Vec<String>>,
) {
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
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("")
        .to_string();
    log.lock().unwrap().push(path.clone());

    let (status, body) = match routes.get(&path) {
        Some(Route::Reply { status, body }) => (*status, body.as_slice()),
        Some(Route::Drop) => return,
        None => (404, &b""[..]),
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

fn reason(status: u32) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
