//! Integration tests for the configuration store's access surface.

use conflayer::{Config, ConfigMap, KeyedAccess};
use serde_json::{Value, json};

fn map(value: Value) -> ConfigMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected mapping, got {other:?}"),
    }
}

fn seeded() -> Config {
    Config::from_map(map(json!({
        "app": {
            "name": "test",
            "mode": "testing"
        },
        "stack": ["entry_1", "entry_2"]
    })))
}

#[test]
fn all_exposes_the_whole_mapping() {
    let config = seeded();
    assert_eq!(
        Value::Object(config.all().clone()),
        json!({
            "app": {"name": "test", "mode": "testing"},
            "stack": ["entry_1", "entry_2"]
        })
    );
}

#[test]
fn push_appends_to_an_existing_sequence() {
    let mut config = seeded();
    config.push("stack", "entry_3");
    assert_eq!(config["stack"], json!(["entry_1", "entry_2", "entry_3"]));
}

#[test]
fn prepend_inserts_at_the_front() {
    let mut config = seeded();
    config.prepend("stack", "entry_0");
    assert_eq!(config["stack"], json!(["entry_0", "entry_1", "entry_2"]));
}

#[test]
fn forget_then_has_is_false() {
    let mut config = seeded();
    assert!(config.has("app.mode"));

    config.forget("app.mode");
    assert!(!config.has("app.mode"));
    assert_eq!(config.get("app.mode"), None);

    config.set("app.mode", "testing");
    assert_eq!(config["app.mode"], json!("testing"));
}

#[test]
fn set_reaches_into_new_depth() {
    let mut config = seeded();
    config.set("database.connections.primary.port", 5432);
    assert_eq!(config.get("database.connections.primary.port"), Some(&json!(5432)));
}

#[test]
fn get_or_returns_default_only_for_missing_paths() {
    let config = seeded();
    assert_eq!(config.get_or("app.name", json!("fallback")), json!("test"));
    assert_eq!(config.get_or("app.absent", json!("fallback")), json!("fallback"));
}

#[test]
fn get_many_resolves_each_path() {
    let config = seeded();
    let resolved = config.get_many(["app.name", "app.missing", "stack"]);

    assert_eq!(resolved["app.name"], json!("test"));
    assert_eq!(resolved["app.missing"], Value::Null);
    assert_eq!(resolved["stack"], json!(["entry_1", "entry_2"]));
}

#[test]
fn get_many_or_applies_per_path_defaults() {
    let config = seeded();
    let resolved = config.get_many_or(map(json!({
        "app.name": "default-name",
        "app.debug": false
    })));

    assert_eq!(resolved["app.name"], json!("test"));
    assert_eq!(resolved["app.debug"], json!(false));
}

#[test]
fn set_many_applies_pairs_in_iteration_order() {
    let mut config = Config::new();
    config.set_many(map(json!({
        "queue.driver": "redis",
        "queue.workers": 4,
        "queue": {"driver": "sync"}
    })));

    // The later plain "queue" pair replaces the whole mapping built by the
    // earlier dotted pairs.
    assert_eq!(config["queue.driver"], json!("sync"));
    assert!(!config.has("queue.workers"));
}

#[test]
fn index_access_mirrors_get_with_null_fallback() {
    let config = seeded();
    assert_eq!(config["app.name"], json!("test"));
    assert_eq!(config["nothing.here"], Value::Null);
}

#[test]
fn keyed_access_is_usable_through_a_generic_holder() {
    fn exercise<A: KeyedAccess>(holder: &mut A) {
        holder.write("feature.enabled", json!(true));
        assert!(holder.exists("feature.enabled"));
        assert_eq!(holder.read("feature.enabled"), Some(&json!(true)));
        holder.remove("feature.enabled");
        assert!(!holder.exists("feature.enabled"));
    }

    let mut config = seeded();
    exercise(&mut config);
}

#[test]
fn top_level_keys_keep_insertion_order() {
    let mut config = Config::new();
    config.set("zeta", 1);
    config.set("alpha", 2);
    config.set("mid.inner", 3);
    config.set("zeta", 4);

    let keys: Vec<&str> = config.all().keys().map(String::as_str).collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
    assert_eq!(config["zeta"], json!(4));
}
