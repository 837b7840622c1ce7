//! Tests for declarative config decoding and encoding

use serde_json::json;

use super::*;
use crate::error::DeclcfgError;
use crate::meta::Meta;

const ETCD_STREAM: &str = r#"{"schema":"olm.package","name":"etcd","defaultChannel":"singlenamespace-alpha","description":"A message about etcd operator"}
{"schema":"olm.channel","package":"etcd","name":"singlenamespace-alpha","entries":[{"name":"etcdoperator.v0.9.0"},{"name":"etcdoperator.v0.9.2","replaces":"etcdoperator.v0.9.0"}]}
{"schema":"olm.bundle","name":"etcdoperator.v0.9.0","package":"etcd","image":"quay.io/operatorhubio/etcd:v0.9.0","properties":[{"type":"olm.package","value":{"packageName":"etcd","version":"0.9.0"}}]}
{"schema":"olm.bundle","name":"etcdoperator.v0.9.2","package":"etcd","image":"quay.io/operatorhubio/etcd:v0.9.2","relatedImages":[{"name":"etcd","image":"quay.io/coreos/etcd:v3.4"}]}
{"schema":"custom.deprecations","package":"etcd","entries":[{"reference":{"schema":"olm.bundle","name":"etcdoperator.v0.9.0"}}]}
"#;

#[test]
fn test_from_slice_routes_by_schema() {
    let config = DeclarativeConfig::from_slice(ETCD_STREAM.as_bytes()).unwrap();
    assert_eq!(config.packages.len(), 1);
    assert_eq!(config.channels.len(), 1);
    assert_eq!(config.bundles.len(), 2);
    assert_eq!(config.others.len(), 1);
    assert_eq!(config.len(), 5);

    assert_eq!(config.packages[0].default_channel, "singlenamespace-alpha");
    assert_eq!(
        config.channels[0].entries[1].replaces,
        "etcdoperator.v0.9.0"
    );
    assert_eq!(config.bundles[0].name, "etcdoperator.v0.9.0");
    assert_eq!(config.bundles[1].name, "etcdoperator.v0.9.2");
    assert_eq!(config.others[0].schema(), "custom.deprecations");
    assert_eq!(config.others[0].package(), "etcd");
}

#[test]
fn test_from_slice_empty_input() {
    let config = DeclarativeConfig::from_slice(b"  \n").unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_push_meta_accepts_any_identity_casing() {
    let meta =
        Meta::decode(br#"{"Schema":"olm.bundle","NAME":"etcdoperator.v0.9.2","Package":"etcd","image":"img"}"#)
            .unwrap();
    let mut config = DeclarativeConfig::new();
    config.push_meta(meta).unwrap();

    let bundle = &config.bundles[0];
    assert_eq!(bundle.schema, SCHEMA_BUNDLE);
    assert_eq!(bundle.name, "etcdoperator.v0.9.2");
    assert_eq!(bundle.package, "etcd");
    assert_eq!(bundle.image, "img");
}

#[test]
fn test_from_slice_accepts_upper_camel_case_fields() {
    let data = br#"{"schema":"olm.package","name":"etcd","DefaultChannel":"stable"}
{"Schema":"olm.channel","Package":"etcd","Name":"stable","Entries":null}"#;
    let config = DeclarativeConfig::from_slice(data).unwrap();
    assert_eq!(config.packages[0].default_channel, "stable");
    assert_eq!(config.channels[0].name, "stable");
    assert!(config.channels[0].entries.is_empty());
}

#[test]
fn test_push_meta_keeps_unknown_schema() {
    let meta = Meta::decode(br#"{"name":"no-schema"}"#).unwrap();
    let mut config = DeclarativeConfig::new();
    config.push_meta(meta.clone()).unwrap();
    assert_eq!(config.others, vec![meta]);
}

#[test]
fn test_push_meta_reports_typed_decode_failure() {
    let meta = Meta::decode(br#"{"schema":"olm.channel","name":"alpha","entries":"oops"}"#).unwrap();
    let err = DeclarativeConfig::new().push_meta(meta).unwrap_err();
    let DeclcfgError::InvalidEntity {
        schema,
        name,
        diagnostic,
    } = err
    else {
        panic!("expected invalid entity error");
    };
    assert_eq!(schema, SCHEMA_CHANNEL);
    assert_eq!(name, "alpha");
    assert!(diagnostic.contains("(indicated by <==)"), "got: {diagnostic}");
    assert!(diagnostic.contains(r#""entries": "oops" <== "#), "got: {diagnostic}");
}

#[test]
fn test_from_slice_reports_offset_in_stream() {
    let data = b"{\"schema\":\"olm.package\",\"name\":\"a\"}\n{\"schema\":\"olm.bundle\",\"name\":}";
    let err = DeclarativeConfig::from_slice(data).unwrap_err();
    assert!(matches!(err, DeclcfgError::MalformedJson { .. }));
    // offset of the stray `}` on the second line
    assert_eq!(err.offset(), Some(data.len() - 1));
    assert!(err.render(data).ends_with("\"name\": <== }"));
}

#[test]
fn test_from_slice_rejects_duplicate_keys() {
    let data = br#"{"schema":"olm.package","name":"a","Name":"b"}"#;
    let err = DeclarativeConfig::from_slice(data).unwrap_err();
    assert!(matches!(err, DeclcfgError::DuplicateKeys { .. }));
}

#[test]
fn test_json_output_excludes_legacy_fields() {
    let mut config = DeclarativeConfig::from_slice(ETCD_STREAM.as_bytes()).unwrap();
    config.bundles[0].csv_json = Some("{}".to_string());
    config.bundles[0].objects = vec!["{}".to_string()];

    let out = config.to_json().unwrap();
    assert!(!out.contains("csv"));
    assert!(!out.contains("objects"));
    assert!(out.starts_with("{\n    \"schema\": \"olm.package\",\n"));
}

#[test]
fn test_json_output_decodes_back() {
    let config = DeclarativeConfig::from_slice(ETCD_STREAM.as_bytes()).unwrap();
    let out = config.to_json().unwrap();
    let again = DeclarativeConfig::from_slice(out.as_bytes()).unwrap();
    assert_eq!(config, again);
}

#[test]
fn test_yaml_input_matches_json_input() {
    let yaml = r"
schema: olm.package
name: etcd
defaultChannel: singlenamespace-alpha
---
Schema: olm.channel
package: etcd
name: singlenamespace-alpha
entries:
  - name: etcdoperator.v0.9.0
---
---
schema: custom.thing
name: x
value: 3
";
    let json = concat!(
        r#"{"schema":"olm.package","name":"etcd","defaultChannel":"singlenamespace-alpha"}"#,
        r#"{"Schema":"olm.channel","package":"etcd","name":"singlenamespace-alpha","entries":[{"name":"etcdoperator.v0.9.0"}]}"#,
        r#"{"schema":"custom.thing","name":"x","value":3}"#,
    );

    let from_yaml = DeclarativeConfig::from_yaml(yaml).unwrap();
    let from_json = DeclarativeConfig::from_slice(json.as_bytes()).unwrap();
    assert_eq!(from_yaml, from_json);
    assert_eq!(from_yaml.channels[0].schema, SCHEMA_CHANNEL);
}

#[test]
fn test_yaml_rejects_non_mapping_document() {
    let err = DeclarativeConfig::from_yaml("- a\n- b\n").unwrap_err();
    assert!(matches!(err, DeclcfgError::YamlFailed { .. }));
    assert!(err.to_string().contains("document 1 is not a mapping"));
}

#[test]
fn test_yaml_output_decodes_back() {
    let config = DeclarativeConfig::from_slice(ETCD_STREAM.as_bytes()).unwrap();
    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("\n---\n"));
    let again = DeclarativeConfig::from_yaml(&yaml).unwrap();
    assert_eq!(config, again);
}

#[test]
fn test_properties_survive_round_trip() {
    let config = DeclarativeConfig::from_slice(ETCD_STREAM.as_bytes()).unwrap();
    assert_eq!(
        config.bundles[0].properties,
        vec![Property::new(
            "olm.package",
            json!({"packageName": "etcd", "version": "0.9.0"})
        )]
    );
}
