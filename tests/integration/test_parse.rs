//! Integration tests for configuration merging

use crate::helpers::{RecordingCheck, TestGraph, new_log, passing};
use preflight_gate::{PreflightError, Registry};

#[test]
fn test_empty_document_changes_nothing() {
  let log = new_log();
  let mut registry = Registry::new();
  registry.add_check("a", passing("a", true, &log));
  registry.add_check("b", passing("b", false, &log));

  registry.parse("{}").unwrap();

  assert_eq!(registry.render(), "a=true,b=false");
}

#[test]
fn test_unknown_name_is_atomic() {
  let (check, configs) = RecordingCheck::new(false);
  let mut registry = Registry::new();
  registry.add_check("a", Box::new(check));

  // "a" sorts before the unknown name, so a merge that interleaved
  // validation and application would flip "a" before noticing "zz"
  let err = registry
    .parse(r#"{"a":{"enabled":"true"},"zz":{"enabled":"true"}}"#)
    .unwrap_err();

  assert!(matches!(err, PreflightError::UnknownCheck { name } if name == "zz"));
  assert!(!registry.check("a").unwrap().enabled());
  assert!(configs.lock().unwrap().is_empty());
  assert!(registry.pending_config().is_none());
}

#[test]
fn test_malformed_enabled_is_atomic() {
  let (check, configs) = RecordingCheck::new(false);
  let mut registry = Registry::new();
  registry.add_check("a", Box::new(check));

  let err = registry.parse(r#"{"a":{"enabled":"maybe"}}"#).unwrap_err();

  assert!(matches!(err, PreflightError::MalformedConfig { ref check, .. } if check == "a"));
  assert!(!registry.check("a").unwrap().enabled());
  assert!(configs.lock().unwrap().is_empty());
}

#[test]
fn test_full_config_reaches_the_check() {
  let (check, configs) = RecordingCheck::new(false);
  let mut registry = Registry::new();
  registry.add_check("a", Box::new(check));

  registry
    .parse(r#"{"a":{"enabled":"true","allowedGroups":["apps"],"strict":false}}"#)
    .unwrap();

  let received = configs.lock().unwrap();
  assert_eq!(received.len(), 1);
  // The payload is forwarded wholesale, enabled field included
  assert_eq!(received[0].enabled.as_deref(), Some("true"));
  assert_eq!(
    received[0].get("allowedGroups"),
    Some(&serde_json::json!(["apps"]))
  );
  assert_eq!(received[0].get("strict"), Some(&serde_json::json!(false)));
}

#[test]
fn test_config_without_enabled_still_forwarded() {
  let (check, configs) = RecordingCheck::new(true);
  let mut registry = Registry::new();
  registry.add_check("a", Box::new(check));

  registry.parse(r#"{"a":{"threshold":10}}"#).unwrap();

  assert!(registry.check("a").unwrap().enabled(), "enabled state untouched");
  let received = configs.lock().unwrap();
  assert_eq!(received.len(), 1);
  assert_eq!(received[0].enabled, None);
  assert_eq!(received[0].get("threshold"), Some(&serde_json::json!(10)));
}

#[test]
fn test_overlay_leaves_absent_checks_alone() {
  let log = new_log();
  let (touched, _) = RecordingCheck::new(false);
  let mut registry = Registry::new();
  registry.add_check("touched", Box::new(touched));
  registry.add_check("untouched", passing("untouched", true, &log));

  registry.parse(r#"{"touched":{"enabled":"true"}}"#).unwrap();

  assert!(registry.check("touched").unwrap().enabled());
  assert!(registry.check("untouched").unwrap().enabled());
}

#[test]
fn test_reparse_replaces_pending_config() {
  let log = new_log();
  let mut registry = Registry::new();
  registry.add_check("a", passing("a", false, &log));

  registry.parse(r#"{"a":{"enabled":"true","limit":1}}"#).unwrap();
  registry.parse(r#"{"a":{"limit":2}}"#).unwrap();

  let pending = registry.pending_config().unwrap();
  let config = pending.get("a").unwrap();
  assert_eq!(config.enabled, None);
  assert_eq!(config.get("limit"), Some(&serde_json::json!(2)));
  // The earlier override survives; the second document simply omitted it
  assert!(registry.check("a").unwrap().enabled());
}

#[test]
fn test_malformed_input_variants() {
  let log = new_log();
  let mut registry = Registry::new();
  registry.add_check("a", passing("a", true, &log));

  for bad in ["", "nonsense", "[]", "\"a\"", "17"] {
    let err = registry.parse(bad).unwrap_err();
    assert!(
      matches!(err, PreflightError::MalformedInput { .. }),
      "input {:?} should be rejected as malformed",
      bad
    );
  }
}

#[test]
fn test_render_stable_across_registration_order() {
  let log = new_log();
  let mut forward: Registry<TestGraph> = Registry::new();
  forward.add_check("labelCheck", passing("labelCheck", false, &log));
  forward.add_check("ownershipCheck", passing("ownershipCheck", true, &log));

  let mut reverse: Registry<TestGraph> = Registry::new();
  reverse.add_check("ownershipCheck", passing("ownershipCheck", true, &log));
  reverse.add_check("labelCheck", passing("labelCheck", false, &log));

  assert_eq!(forward.render(), reverse.render());
  assert_eq!(forward.render(), "labelCheck=false,ownershipCheck=true");
}
