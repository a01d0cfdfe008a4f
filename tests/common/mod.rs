//! Shared utilities for integration tests.

use std::net::SocketAddr;

use hyper::body::Incoming;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Start a mock backend that answers every request with the given
/// `Keep-Alive` header lines.
pub async fn start_keep_alive_backend(keep_alive: &'static [&'static str]) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;

                        let mut response = String::from("HTTP/1.1 200 OK\r\n");
                        for value in keep_alive {
                            response.push_str(&format!("Keep-Alive: {}\r\n", value));
                        }
                        response.push_str("Content-Length: 2\r\n\r\nok");

                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Issue one GET over a fresh HTTP/1.1 connection and return the response head.
pub async fn fetch(addr: SocketAddr) -> Response<Incoming> {
    let stream = TcpStream::connect(addr).await.unwrap();
    let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
        .await
        .unwrap();
    tokio::spawn(conn);

    let request = Request::builder()
        .uri("/")
        .header("host", addr.to_string())
        .body(String::new())
        .unwrap();
    sender.send_request(request).await.unwrap()
}
