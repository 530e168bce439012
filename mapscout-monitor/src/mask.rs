//! Proxy display masking
//!
//! The status panel may be shown on a shared screen, so the egress address
//! is only partially revealed: `203.0.113.45:8080` becomes
//! `203.0.xx.xx:xxxx`. Anything that is not an IPv4 `host:port` pair is
//! shown as is.

const OCTET_MASK: &str = "xx";
const PORT_MASK: &str = "xxxx";

/// Masks the last two octets and the port of an `a.b.c.d:port` string
pub fn mask_proxy(raw: &str) -> String {
    let Some((host, port)) = raw.split_once(':') else {
        return raw.to_string();
    };

    let octets: Vec<&str> = host.split('.').collect();
    let is_ipv4 = octets.len() == 4 && octets.iter().all(|o| is_octet(o));
    let has_port = !port.is_empty() && port.chars().all(|c| c.is_ascii_digit());

    if !is_ipv4 || !has_port {
        return raw.to_string();
    }

    format!(
        "{}.{}.{}.{}:{}",
        octets[0], octets[1], OCTET_MASK, OCTET_MASK, PORT_MASK
    )
}

fn is_octet(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()) && part.parse::<u8>().is_ok()
}
