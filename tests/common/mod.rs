#![allow(dead_code)]

use rigaudchat::services::backend_client::BackendClient;

/// Base URL of a local port nothing listens on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn client_for(base_url: &str) -> BackendClient {
    BackendClient::new(base_url, None).unwrap()
}
