use url::Url;

/// Public-suffix-aware split of a host into subdomain, registrable-domain
/// label, and suffix. `news.example.co.uk` splits into `news` / `example` /
/// `co.uk`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    pub subdomain: Option<String>,
    pub domain: Option<String>,
    pub suffix: Option<String>,
}

pub fn split(host: &str) -> DomainParts {
    let suffix = psl::suffix_str(host);
    let registrable = psl::domain_str(host);

    let domain = match (registrable, suffix) {
        (Some(d), Some(s)) => d
            .strip_suffix(s)
            .map(|p| p.trim_end_matches('.'))
            .filter(|p| !p.is_empty())
            .map(str::to_string),
        _ => None,
    };
    let subdomain = registrable
        .and_then(|d| host.strip_suffix(d))
        .map(|p| p.trim_end_matches('.'))
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    DomainParts {
        subdomain,
        domain,
        suffix: suffix.map(str::to_string),
    }
}

/// Coarse publisher identifier: the registrable-domain label of the host.
/// Pure function of the URL; independent of fetch success.
pub fn registrable_label(url: &Url) -> Option<String> {
    split(url.host_str()?).domain
}

/// Network-location portion of the URL: host plus any explicit port.
pub fn website(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}
