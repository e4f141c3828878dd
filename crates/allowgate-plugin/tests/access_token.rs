#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use allowgate_core::authz::{Decision, RequestHeaders};
use allowgate_plugin::app_state::AppState;
use allowgate_plugin::config;
use allowgate_plugin::plugin::{AuthService, CheckRequest, ExtAuthPlugin, PluginConfig, PluginRegistry};
use allowgate_plugin::services::{AccessTokenPlugin, ACCESS_TOKEN_SYMBOL};

fn service(yaml: &str) -> Arc<dyn AuthService> {
    let plugin = AccessTokenPlugin::new();
    let raw: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
    let pc = plugin.new_config(raw).expect("config must decode");
    plugin.get_service(pc).expect("service must build")
}

fn req(pairs: &[(&str, &str)]) -> CheckRequest {
    CheckRequest::with_headers(pairs.iter().copied().collect::<RequestHeaders>())
}

const API_KEY_CFG: &str = r#"
accessToken: X-Api-Key
allowedValues: [secret1, secret2]
"#;

#[tokio::test]
async fn scenario_allowed_with_marker() {
    let svc = service(API_KEY_CFG);
    svc.start().await.expect("start never fails");

    let d = svc.authorize(&req(&[("X-Api-Key", "secret1")])).await;
    assert!(d.is_allowed());
    assert_eq!(d.response_headers()[0].key, "matched-allowed-headers");
    assert_eq!(d.response_headers()[0].value, "true");
}

#[tokio::test]
async fn scenario_wrong_value_and_missing_header() {
    let svc = service(API_KEY_CFG);
    assert_eq!(svc.authorize(&req(&[("X-Api-Key", "wrong")])).await, Decision::Denied);
    assert_eq!(svc.authorize(&req(&[])).await, Decision::Denied);
}

#[tokio::test]
async fn scenario_empty_allowlist() {
    let svc = service("accessToken: Auth\nallowedValues: []\n");
    assert_eq!(svc.authorize(&req(&[("Auth", "")])).await, Decision::Denied);
}

#[test]
fn registered_under_well_known_name() {
    let reg = PluginRegistry::with_builtin();
    assert_eq!(reg.registered(), vec![ACCESS_TOKEN_SYMBOL]);
    assert!(reg.get("AccessToken").is_some());
    assert!(reg.get("accesstoken").is_none());
}

#[test]
fn foreign_config_kind_rejected() {
    struct OtherPluginConfig;

    let plugin = AccessTokenPlugin::new();
    let err = plugin
        .get_service(PluginConfig::new(OtherPluginConfig))
        .err()
        .expect("must fail");
    assert_eq!(err.kind().as_str(), "INVALID_CONFIG_KIND");
    assert!(err.to_string().contains("OtherPluginConfig"));
}

#[test]
fn wrong_shape_raw_config_rejected() {
    let plugin = AccessTokenPlugin::new();
    let cases = [
        ("[X-Api-Key, secret1]", "sequence"),
        ("just-a-string", "string"),
        ("42", "number"),
        ("allowedValues: secret1", "mapping"),
    ];
    for (bad, shape) in cases {
        let raw: serde_yaml::Value = serde_yaml::from_str(bad).unwrap();
        let err = plugin.new_config(raw).expect_err("must fail");
        assert_eq!(err.kind().as_str(), "INVALID_CONFIG_KIND", "raw={bad}");
        let msg = err.to_string();
        assert!(
            msg.starts_with(&format!("unexpected config type {shape} (")),
            "raw={bad} msg={msg}"
        );
        assert!(!msg.contains("AccessTokenConfig ("), "raw={bad} msg={msg}");
    }
}

#[tokio::test]
async fn missing_config_block_denies_everything() {
    let plugin = AccessTokenPlugin::new();
    let svc = plugin
        .get_service(plugin.new_config(serde_yaml::Value::Null).unwrap())
        .unwrap();
    assert_eq!(svc.authorize(&req(&[("X-Api-Key", "secret1")])).await, Decision::Denied);
}

#[tokio::test]
async fn concurrent_checks_share_one_service() {
    let svc = service(API_KEY_CFG);

    let mut handles = Vec::new();
    for i in 0..64 {
        let svc = Arc::clone(&svc);
        handles.push(tokio::spawn(async move {
            let value = if i % 2 == 0 { "secret2" } else { "nope" };
            let d = svc.authorize(&req(&[("X-Api-Key", value)])).await;
            (i, d)
        }));
    }

    for h in handles {
        let (i, d) = h.await.unwrap();
        assert_eq!(d.is_allowed(), i % 2 == 0, "task={i}");
    }
}

#[tokio::test]
async fn app_state_builds_and_routes_by_instance_name() {
    let cfg = config::load_from_str(
        r#"
version: 1
plugins:
  - name: api-key
    exported_symbol: AccessToken
    config:
      accessToken: X-Api-Key
      allowedValues: [secret1]
  - name: tenant
    exported_symbol: AccessToken
    config:
      accessToken: X-Tenant
      allowedValues: [acme]
"#,
    )
    .unwrap();

    let state = AppState::new(cfg, &PluginRegistry::with_builtin()).unwrap();
    state.start_all().await.unwrap();
    assert_eq!(state.cfg().version, 1);
    assert_eq!(state.plugin_names(), vec!["api-key", "tenant"]);
    assert!(state.service("api-key").is_some());
    assert!(state.service("missing").is_none());

    let direct = state.service("tenant").unwrap();
    assert!(direct.authorize(&req(&[("X-Tenant", "acme")])).await.is_allowed());

    let r = req(&[("X-Api-Key", "secret1"), ("X-Tenant", "globex")]);
    assert!(state.authorize("api-key", &r).await.is_allowed());
    assert_eq!(state.authorize("tenant", &r).await, Decision::Denied);
    assert_eq!(state.authorize("missing", &r).await, Decision::Denied);
}

#[test]
fn app_state_rejects_unknown_symbol() {
    let cfg = config::load_from_str(
        "version: 1\nplugins:\n  - name: x\n    exported_symbol: JwtPlugin\n",
    )
    .unwrap();
    let err = AppState::new(cfg, &PluginRegistry::with_builtin())
        .err()
        .expect("must fail");
    assert_eq!(err.kind().as_str(), "BAD_CONFIG");
}

#[test]
fn app_state_rejects_wrong_shape_plugin_config() {
    let cfg = config::load_from_str(
        "version: 1\nplugins:\n  - name: x\n    exported_symbol: AccessToken\n    config: [1, 2]\n",
    )
    .unwrap();
    let err = AppState::new(cfg, &PluginRegistry::with_builtin())
        .err()
        .expect("must fail");
    assert_eq!(err.kind().as_str(), "INVALID_CONFIG_KIND");
}
