//! Common fixtures for declcfg integration tests

#![allow(dead_code)]

/// A small catalog for the etcd operator, one JSON object per record
pub const ETCD_CATALOG: &str = r#"{
    "schema": "olm.package",
    "name": "etcd",
    "defaultChannel": "singlenamespace-alpha",
    "icon": {
        "base64data": "PHN2Zy8+",
        "mediatype": "image/svg+xml"
    }
}
{
    "schema": "olm.channel",
    "package": "etcd",
    "name": "singlenamespace-alpha",
    "entries": [
        {"name": "etcdoperator.v0.9.0"},
        {"name": "etcdoperator.v0.9.2", "replaces": "etcdoperator.v0.9.0"},
        {"name": "etcdoperator.v0.9.4", "replaces": "etcdoperator.v0.9.2", "skipRange": ">=0.9.0 <0.9.4"}
    ]
}
{
    "schema": "olm.bundle",
    "name": "etcdoperator.v0.9.4",
    "package": "etcd",
    "image": "quay.io/operatorhubio/etcd:v0.9.4",
    "properties": [
        {"type": "olm.package", "value": {"packageName": "etcd", "version": "0.9.4"}},
        {"type": "olm.gvk", "value": {"group": "etcd.database.coreos.com", "kind": "EtcdCluster", "version": "v1beta2"}}
    ],
    "relatedImages": [
        {"name": "etcdv0.9.4", "image": "quay.io/operatorhubio/etcd:v0.9.4"}
    ]
}
{
    "Schema": "olm.deprecations",
    "Package": "etcd",
    "entries": [
        {"reference": {"schema": "olm.bundle", "name": "etcdoperator.v0.9.0"}, "message": "use 0.9.4"}
    ]
}
"#;

/// Strip every space and newline outside of string literals
pub fn compact(json: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(json).expect("fixture is valid JSON");
    serde_json::to_string(&value).expect("value serializes")
}
