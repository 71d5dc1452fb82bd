//! Nameserver endpoint addresses.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::config::DEFAULT_DNS_PORT;
use crate::error_handling::InitializationError;

/// A nameserver queried directly, bypassing the system resolver configuration.
///
/// Keeps the address exactly as the user typed it as its label, so reports
/// name the server the way the command line did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    label: String,
    address: SocketAddr,
}

impl Endpoint {
    /// Parses `IP`, `IP:port` or `[IPv6]:port`. A bare IP uses port 53.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::EndpointAddressError` for anything else,
    /// including hostnames.
    pub fn parse(input: &str) -> Result<Self, InitializationError> {
        let label = input.trim();
        let address = label
            .parse::<SocketAddr>()
            .or_else(|_| {
                label
                    .parse::<IpAddr>()
                    .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
            })
            .map_err(|_| InitializationError::EndpointAddressError {
                address: input.to_string(),
            })?;
        Ok(Self {
            label: label.to_string(),
            address,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }
}

impl FromStr for Endpoint {
    type Err = InitializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::parse(s)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
