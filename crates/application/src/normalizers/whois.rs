use guardview_domain::{NormalizedWhois, WhoisInfo};

/// Folds `city` and `country` into `location` ("country, city"); other keys pass through.
pub fn normalize_whois(whois: &WhoisInfo) -> NormalizedWhois {
    let mut fields = whois.0.clone();
    let city = fields.remove("city").filter(|c| !c.is_empty());
    let country = fields.remove("country").filter(|c| !c.is_empty());

    let location = match (country, city) {
        (Some(country), Some(city)) => Some(format!("{}, {}", country, city)),
        (Some(country), None) => Some(country),
        (None, Some(city)) => Some(city),
        (None, None) => None,
    };

    NormalizedWhois { location, fields }
}
