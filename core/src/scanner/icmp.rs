//! Unprivileged ICMP echo.
//!
//! Uses datagram ICMP sockets, so no root or `CAP_NET_RAW` is needed on
//! systems that allow them (macOS, and Linux within `net.ipv4.ping_group_range`).

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use findpi_common::scanning::Prober;
use surge_ping::{Client, Config, ICMP, PingIdentifier, PingSequence};
use tracing::trace;

const PAYLOAD: [u8; 56] = [0; 56];

pub struct IcmpProber {
    client: Client,
    count: u16,
}

impl IcmpProber {
    /// Opens the shared ICMP socket. Must be called inside a tokio runtime.
    pub fn new(count: u16) -> anyhow::Result<Self> {
        let config: Config = Config::builder().kind(ICMP::V4).build();
        let client: Client = Client::new(&config).context("opening ICMP socket")?;
        Ok(Self {
            client,
            count: count.max(1),
        })
    }
}

#[async_trait]
impl Prober for IcmpProber {
    async fn probe(&self, addr: Ipv4Addr, timeout: Duration) -> bool {
        let mut pinger = self
            .client
            .pinger(IpAddr::V4(addr), PingIdentifier(rand::random()))
            .await;
        pinger.timeout(timeout / u32::from(self.count));

        for seq in 0..self.count {
            match pinger.ping(PingSequence(seq), &PAYLOAD).await {
                Ok((_packet, rtt)) => {
                    trace!("{addr} replied in {rtt:?}");
                    return true;
                }
                Err(e) => trace!("{addr}: {e}"),
            }
        }
        false
    }
}
