mod fields;
mod filter_form;
mod patterns;

pub use fields::{
    answer, bigger_or_equal_zero, domain, filter_url, ip, ipv4, ipv6, is_positive, is_safe_port,
    mac, port, port_tls, required, to_number, validate, Validator,
};
pub use filter_form::{FieldState, NewFilterForm};
pub use patterns::{is_host, is_ipv4, is_ipv6, is_mac, is_url_with_protocol, UNSAFE_PORTS};
