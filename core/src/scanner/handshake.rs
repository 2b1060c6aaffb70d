//! Liveness via TCP handshake.
//!
//! Used where ICMP sockets are unavailable or filtered. A completed handshake
//! and an active refusal (RST) both prove that something is listening at the
//! address; only silence means the host is absent.

use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use findpi_common::scanning::Prober;
use tokio::net::TcpStream;
use tokio::time::{Instant, timeout};
use tracing::trace;

const DEFAULT_PORTS: [u16; 2] = [443, 80];

pub struct HandshakeProber {
    ports: Vec<u16>,
}

impl Default for HandshakeProber {
    fn default() -> Self {
        Self::new(DEFAULT_PORTS.to_vec())
    }
}

impl HandshakeProber {
    pub fn new(ports: Vec<u16>) -> Self {
        Self { ports }
    }
}

#[async_trait]
impl Prober for HandshakeProber {
    async fn probe(&self, addr: Ipv4Addr, probe_timeout: Duration) -> bool {
        let deadline: Instant = Instant::now() + probe_timeout;

        for &port in &self.ports {
            let remaining: Duration = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }

            let socket_addr: SocketAddr = SocketAddr::new(IpAddr::V4(addr), port);
            match timeout(remaining, TcpStream::connect(socket_addr)).await {
                Ok(Ok(_)) => return true,
                Ok(Err(e)) if e.kind() == ErrorKind::ConnectionRefused => return true,
                Ok(Err(e)) => trace!("{socket_addr}: {e}"),
                Err(_elapsed) => break,
            }
        }
        false
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
