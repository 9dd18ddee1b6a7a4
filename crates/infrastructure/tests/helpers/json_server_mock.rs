#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

/// Plain HTTP/1.1 stand-in for a DoH JSON endpoint.
///
/// Every request gets the same status and body, optionally after a delay.
/// The request head (request line plus headers) is kept for inspection.
pub struct MockJsonServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockJsonServer {
    pub async fn start(status: u16, body: &str) -> Result<Self, std::io::Error> {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn start_with_delay(
        status: u16,
        body: &str,
        delay: Duration,
    ) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let seen = requests.clone();
        let body = body.to_string();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    accepted = listener.accept() => {
                        if let Ok((stream, _)) = accepted {
                            let seen = seen.clone();
                            let body = body.clone();
                            tokio::spawn(async move {
                                let _ = Self::serve(stream, status, &body, delay, seen).await;
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/resolve", self.addr)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    async fn serve(
        mut stream: TcpStream,
        status: u16,
        body: &str,
        delay: Duration,
        seen: Arc<Mutex<Vec<String>>>,
    ) -> Result<(), std::io::Error> {
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await?;
            if n == 0 {
                return Ok(());
            }
            head.extend_from_slice(&buf[..n]);
        }
        seen.lock()
            .unwrap()
            .push(String::from_utf8_lossy(&head).into_owned());

        tokio::time::sleep(delay).await;

        let response = format!(
            "HTTP/1.1 {} Mock\r\nContent-Type: application/dns-json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await?;
        stream.shutdown().await
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockJsonServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
