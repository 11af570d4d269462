use guardview_domain::{DomainError, ErrorKind, MessageCatalog};

#[test]
fn test_english_covers_every_error_kind() {
    let catalog = MessageCatalog::english();

    assert_eq!(catalog.len(), ErrorKind::ALL.len());
    for kind in ErrorKind::ALL {
        assert_ne!(catalog.resolve(kind), kind.translation_key());
    }
    assert_eq!(catalog.resolve(ErrorKind::Required), "Required field");
}

#[test]
fn test_unknown_key_falls_back_to_key() {
    let catalog = MessageCatalog::new();

    assert!(catalog.is_empty());
    assert_eq!(catalog.translate("form_error_mac_format"), "form_error_mac_format");
    assert_eq!(catalog.resolve(ErrorKind::PortRange), "form_error_port_range");
}

#[test]
fn test_merge_prefers_overlay() {
    let overlay =
        MessageCatalog::from_json(r#"{"form_error_required": "Pflichtfeld", "extra": "x"}"#)
            .unwrap();
    let catalog = MessageCatalog::english().merge(overlay);

    assert_eq!(catalog.resolve(ErrorKind::Required), "Pflichtfeld");
    assert_eq!(catalog.resolve(ErrorKind::InvalidUrl), "Invalid URL format");
    assert_eq!(catalog.translate("extra"), "x");
}

#[test]
fn test_from_json_rejects_non_string_values() {
    let result = MessageCatalog::from_json(r#"{"form_error_required": 1}"#);
    assert!(matches!(result, Err(DomainError::InvalidPayload(_))));
}

#[test]
fn test_from_file_missing_is_catalog_error() {
    let result = MessageCatalog::from_file("/nonexistent/messages.json");
    assert!(matches!(result, Err(DomainError::CatalogLoad(_, _))));
}

#[test]
fn test_error_kind_serializes_as_key() {
    let json = serde_json::to_string(&ErrorKind::UnsafePort).unwrap();
    assert_eq!(json, "\"form_error_port_unsafe\"");
    assert_eq!(ErrorKind::InvalidIpv4.to_string(), "form_error_ip4_format");
}
