mod address;
mod context;
mod datetime;
mod numbers;
mod text;

pub use address::{
    get_dns_address, get_interface_ip, get_ip_list, get_secure_web_address, get_web_address,
};
pub use context::DisplayContext;
pub use datetime::{day_label, format_date_time, format_time, hour_label, parse_timestamp};
pub use numbers::{get_percent, round_to, seconds_to_milliseconds};
pub use text::{
    capitalize_words, get_path_with_query_string, normalize_rules_textarea, normalize_textarea,
};
