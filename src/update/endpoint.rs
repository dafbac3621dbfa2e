//! Provider update endpoints and URL construction.

use url::Url;

/// A ddnss.de update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `ddnss.de` - resolves over IPv4 or IPv6, whichever the client's
    /// connectivity provides.
    DualStack,

    /// `ip4.ddnss.de` - forces the update over IPv4.
    Ipv4Only,
}

impl Endpoint {
    /// Host name of the endpoint.
    #[must_use]
    pub const fn authority(self) -> &'static str {
        match self {
            Self::DualStack => "ddnss.de",
            Self::Ipv4Only => "ip4.ddnss.de",
        }
    }

    /// Endpoints to query for a request, in request order.
    ///
    /// Exactly one endpoint per mode: the IPv4-only endpoint when the
    /// request forces IPv4, the dual-stack endpoint otherwise.
    #[must_use]
    pub const fn select(ipv4_only: bool) -> &'static [Self] {
        if ipv4_only {
            &[Self::Ipv4Only]
        } else {
            &[Self::DualStack]
        }
    }

    /// Builds the update URL for `host` and `key`.
    ///
    /// Both values are percent-encoded into the query string.
    #[must_use]
    pub fn update_url(self, host: &str, key: &str) -> Url {
        let mut url = Url::parse(&format!("https://{}/upd.php", self.authority()))
            .expect("endpoint URLs are statically valid");

        url.query_pairs_mut()
            .append_pair("host", host)
            .append_pair("key", key);

        url
    }
}
