//! Request helpers shared by handlers.
//!
//! - [`client_ip`] - Client address resolution from proxy headers or the peer socket

pub mod client_ip;
