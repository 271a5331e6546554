#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::Path;

use finsight_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "127.0.0.1:5000"
  debgu: true # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG_ERROR");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "127.0.0.1:5000");
    assert!(cfg.gateway.debug);
    assert!(cfg.cors.enabled);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
gateway:
  listen: "0.0.0.0:8080"
  debug: false
cors:
  enabled: false
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.gateway.listen_addr().unwrap().port(), 8080);
    assert!(!cfg.gateway.debug);
    assert!(!cfg.cors.enabled);
}

#[test]
fn version_is_checked() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.to_string(), "unsupported config version: 2");
    assert_eq!(err.client_code().as_str(), "CONFIG_ERROR");
}

#[test]
fn listen_must_be_socket_addr() {
    let bad = r#"
version: 1
gateway:
  listen: "localhost"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("gateway.listen"), "{err}");
}

#[test]
fn missing_file_means_defaults() {
    let path = Path::new("tests/no-such-finsight.yaml");
    assert!(config::load_optional(path).unwrap().is_none());
    assert!(config::load_from_file(path).is_err());

    let cfg = config::GatewayConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.gateway.listen_addr().unwrap().port(), 5000);
}
