// Listener module
// Builds the TCP listener through socket2 so socket options are set
// before bind.

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create a `TcpListener` bound to `addr`
///
/// `SO_REUSEADDR` is enabled so a quick restart can bind a port still
/// in TIME_WAIT. Bind failure propagates to the caller; the process
/// exits rather than serving without a listener.
pub fn create_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode is required for tokio
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let listener =
            create_listener("127.0.0.1:0".parse().expect("valid address")).expect("bind");
        let addr = listener.local_addr().expect("local addr");
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn test_bind_conflict_is_an_error() {
        let first = create_listener("127.0.0.1:0".parse().expect("valid address")).expect("bind");
        let addr = first.local_addr().expect("local addr");
        // Second listener on the same port must fail while the first is alive
        assert!(std::net::TcpListener::bind(addr).is_err());
    }
}
