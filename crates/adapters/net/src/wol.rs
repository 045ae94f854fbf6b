//! Wake-on-LAN — magic packet construction and UDP transmission.

use tokio::net::UdpSocket;

use wakehub_app::ports::WakeSender;
use wakehub_domain::mac::MacAddr;

/// Magic packet length: 6 sync bytes + 16 MAC repetitions.
const MAGIC_PACKET_LEN: usize = 6 + 16 * 6;

/// Build the magic packet for `mac`: six `0xFF` bytes followed by the
/// hardware address repeated sixteen times.
fn magic_packet(mac: MacAddr) -> [u8; MAGIC_PACKET_LEN] {
    let mut packet = [0xFF_u8; MAGIC_PACKET_LEN];
    let octets = mac.octets();
    for repetition in packet[6..].chunks_exact_mut(6) {
        repetition.copy_from_slice(&octets);
    }
    packet
}

/// Sends magic packets over an ephemeral UDP socket.
///
/// The socket has broadcast enabled so the same sender serves both the
/// unicast and subnet-broadcast emissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UdpWakeSender;

impl WakeSender for UdpWakeSender {
    async fn send(&self, mac: MacAddr, dest: &str, port: u16) -> std::io::Result<()> {
        let socket = UdpSocket::bind(("0.0.0.0", 0)).await?;
        socket.set_broadcast(true)?;
        let packet = magic_packet(mac);
        let sent = socket.send_to(&packet, (dest, port)).await?;
        tracing::debug!(%mac, dest, port, bytes = sent, "magic packet transmitted");
        Ok(())
    }
}
