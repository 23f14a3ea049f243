//! Registrable-domain extraction from URLs.
//!
//! Turns a page URL into the short site name used as a default tag:
//! `https://accounts.example.co.uk/login` becomes `example`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::net::Ipv4Addr;

static SCHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("static regex is valid")
});

static PORT: Lazy<Regex> = Lazy::new(|| Regex::new(r":\d*$").expect("static regex is valid"));

/// Generic second-level labels that sit under a country-code TLD, as in
/// `co.uk` or `com.au`.
const SECOND_LEVEL_LABELS: &[&str] = &[
    "ac", "co", "com", "edu", "gen", "gov", "ltd", "me", "mod", "net", "nhs", "org", "plc",
    "police", "sch",
];

/// Extract the registrable label of a URL's host.
///
/// - IPv4 hosts are returned unchanged.
/// - Hosts under a two-label suffix such as `co.uk` yield the label in front
///   of the suffix.
/// - Other hosts yield their second-level label, so any `www.` or other
///   subdomain is dropped.
///
/// Malformed input never fails; the result is a best-effort guess.
pub fn registrable_domain(url: &str) -> String {
    let host = host_of(url);

    if host.parse::<Ipv4Addr>().is_ok() {
        return host;
    }

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    match labels.len() {
        0 => host,
        1 => labels[0].to_string(),
        n => {
            let suffix_owner = labels[n - 2];
            let top = labels[n - 1];
            if n >= 3 && top.len() == 2 && SECOND_LEVEL_LABELS.contains(&suffix_owner) {
                labels[n - 3].to_string()
            } else {
                suffix_owner.to_string()
            }
        }
    }
}

/// Lowercased host part of a URL, without scheme, credentials or port.
fn host_of(url: &str) -> String {
    let rest = SCHEME.replace(url.trim(), "");
    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    PORT.replace(host, "").trim_end_matches('.').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_domain() {
        assert_eq!(registrable_domain("http://foo.com"), "foo");
        assert_eq!(registrable_domain("https://foo.com"), "foo");
    }

    #[test]
    fn test_standard_domain() {
        assert_eq!(registrable_domain("http://www.foo.com"), "foo");
        assert_eq!(registrable_domain("https://www.foo.com"), "foo");
    }

    #[test]
    fn test_ip_addresses() {
        assert_eq!(registrable_domain("http://1.1.1.1"), "1.1.1.1");
        assert_eq!(registrable_domain("http://111.111.111.111"), "111.111.111.111");
        assert_eq!(registrable_domain("http://10.0.0.1:8080/admin"), "10.0.0.1");
    }

    #[test]
    fn test_sub_domains() {
        assert_eq!(registrable_domain("http://www2.foo.com"), "foo");
        assert_eq!(registrable_domain("http://test.foo.com"), "foo");
        assert_eq!(registrable_domain("https://a.b.c.foo.org/x"), "foo");
    }

    #[test]
    fn test_uk_domains() {
        assert_eq!(registrable_domain("http://www.foo.co.uk"), "foo");
        assert_eq!(registrable_domain("http://test.foo.co.uk"), "foo");
        assert_eq!(registrable_domain("https://shop.foo.com.au/cart"), "foo");
    }

    #[test]
    fn test_url_noise() {
        assert_eq!(registrable_domain("https://user:pw@Login.Foo.COM:443/path?q=1#top"), "foo");
        assert_eq!(registrable_domain("foo.com/path"), "foo");
        assert_eq!(registrable_domain("http://foo.com."), "foo");
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(registrable_domain("http://localhost:3000"), "localhost");
        assert_eq!(registrable_domain(""), "");
        assert_eq!(registrable_domain("http://co.uk"), "co");
        assert_eq!(registrable_domain("http://blog.me.com"), "me");
    }
}
