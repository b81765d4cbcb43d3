use statuslens::catalog;
use statuslens::types::*;

#[test]
fn status_class_from_leading_digit() {
    assert_eq!(catalog::lookup("100").unwrap().class(), Some(StatusClass::Informational));
    assert_eq!(catalog::lookup("204").unwrap().class(), Some(StatusClass::Success));
    assert_eq!(catalog::lookup("307").unwrap().class(), Some(StatusClass::Redirection));
    assert_eq!(catalog::lookup("426").unwrap().class(), Some(StatusClass::ClientError));
    assert_eq!(catalog::lookup("502").unwrap().class(), Some(StatusClass::ServerError));
}

#[test]
fn status_class_from_digit_out_of_range() {
    assert!(StatusClass::from_digit(0).is_none());
    assert!(StatusClass::from_digit(6).is_none());
    assert_eq!(StatusClass::ClientError.as_str(), "client_error");
}

#[test]
fn reference_type_labels_and_indices() {
    assert_eq!(ReferenceType::default(), ReferenceType::Rfc);
    assert_eq!(ReferenceType::Rfc.label(), "RFC");
    assert_eq!(ReferenceType::Mdn.label(), "MDN");
    for r in [ReferenceType::Rfc, ReferenceType::Mdn] {
        assert_eq!(ReferenceType::from_index(r.as_index()), Some(r));
    }
}

#[test]
fn query_scoping() {
    assert!(Query::global("404").is_global());
    assert!(!Query::scoped("http", "404").is_global());

    let parsed: Query = serde_json::from_str(r#"{"search":"404"}"#).unwrap();
    assert!(parsed.is_global());
}

#[test]
fn theme_deserializes_from_name() {
    let theme: Theme = serde_json::from_str("\"HighContrastWhite\"").unwrap();
    assert_eq!(theme, Theme::HighContrastWhite);
    assert_eq!(Theme::default(), Theme::Light);
}
