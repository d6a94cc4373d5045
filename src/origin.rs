//! Page origins (`scheme://host[:port]`) and navigation context.

use std::fmt;

/// The origin of a URL.
///
/// Scheme and host are lowercased and the scheme's default port is
/// dropped, so `HTTPS://Example.com:443/a` and `https://example.com/b`
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl Origin {
    /// Parse the origin out of an absolute URL. Returns `None` for relative
    /// or malformed input.
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();
        let (scheme, rest) = url.split_once("://")?;
        if scheme.is_empty()
            || !scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        {
            return None;
        }
        let scheme = scheme.to_ascii_lowercase();

        let authority = rest
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();
        // Drop userinfo
        let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);

        let (host, port) = match host_port.rsplit_once(':') {
            // Bracketed IPv6 without a port contains ':' but ends with ']'
            // An empty port means the scheme's default
            Some((host, "")) => (host, None),
            Some((host, port)) if !port.contains(']') => (host, Some(port.parse::<u16>().ok()?)),
            _ => (host_port, None),
        };
        if host.is_empty() {
            return None;
        }

        let port = port.filter(|p| Some(*p) != default_port(&scheme));

        Some(Self {
            scheme,
            host: host.to_ascii_lowercase(),
            port,
        })
    }
}

fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" | "ws" => Some(80),
        "https" | "wss" => Some(443),
        _ => None,
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

/// Where the current page load came from and where it is.
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    /// URL of the referring page, if any
    pub referrer: Option<String>,
    /// URL (or origin) of the current page
    pub current: String,
}

impl Navigation {
    pub fn new(referrer: Option<String>, current: impl Into<String>) -> Self {
        Self {
            referrer,
            current: current.into(),
        }
    }

    /// True when the referrer shares the current page's origin.
    ///
    /// A missing or unparseable referrer is never same-origin.
    pub fn is_same_origin(&self) -> bool {
        let Some(referrer) = self.referrer.as_deref().and_then(Origin::parse) else {
            return false;
        };
        Origin::parse(&self.current).is_some_and(|current| current == referrer)
    }
}
