pub mod url_probe;

pub use url_probe::ReqwestUrlProbe;
