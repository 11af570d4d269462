use guardview_application::formatting::{
    get_dns_address, get_interface_ip, get_ip_list, get_percent, get_secure_web_address,
    get_web_address,
};
use guardview_domain::NetworkInterface;
use serde::Serialize;
use std::collections::BTreeMap;

use super::print_json;

#[derive(Serialize)]
struct InterfaceSummary {
    addresses: BTreeMap<String, Option<String>>,
    all: Vec<String>,
}

pub fn interfaces(json: &str) -> anyhow::Result<()> {
    let interfaces: BTreeMap<String, NetworkInterface> = serde_json::from_str(json)?;
    let addresses = interfaces
        .iter()
        .map(|(name, iface)| (name.clone(), get_interface_ip(iface).map(str::to_string)))
        .collect();

    print_json(&InterfaceSummary {
        addresses,
        all: get_ip_list(&interfaces),
    })
}

pub fn percent(amount: f64, number: f64) -> anyhow::Result<()> {
    println!("{}", get_percent(amount, number));
    Ok(())
}

pub fn dns_address(ip: &str, port: Option<u16>) -> anyhow::Result<()> {
    println!("{}", get_dns_address(ip, port));
    Ok(())
}

pub fn web_address(ip: &str, port: Option<u16>, https: bool) -> anyhow::Result<()> {
    let address = if https {
        get_secure_web_address(ip, port)
    } else {
        get_web_address(ip, port)
    };
    println!("{}", address);
    Ok(())
}
