//! One-shot HTTP server standing in for the SPDX download endpoint

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Answer a single request with `status` and `body`.
///
/// Returns the URL to fetch and the server thread; join it after the run.
pub fn serve_once(status: &str, body: &'static str) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let url = format!(
        "http://{}/licenses.json",
        listener.local_addr().expect("Failed to read local addr")
    );
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nContent-Type: application/json\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("No request arrived");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("Failed to read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream
            .write_all(response.as_bytes())
            .expect("Failed to write response");
    });
    (url, handle)
}
