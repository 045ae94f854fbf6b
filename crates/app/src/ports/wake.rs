//! Wake port — emit one magic packet toward a destination address.

use std::future::Future;

use wakehub_domain::mac::MacAddr;

/// Emits wake packets. One call, one packet: the dispatcher decides about
/// secondary broadcast emissions and never waits on a device response.
pub trait WakeSender: Send + Sync {
    /// Send one magic packet for `mac` to `dest:port`.
    ///
    /// Fails only when packet construction or local transmission errors —
    /// delivery is never confirmed at this level.
    fn send(
        &self,
        mac: MacAddr,
        dest: &str,
        port: u16,
    ) -> impl Future<Output = std::io::Result<()>> + Send;
}
