//! Tests for the enhancer registry

use prompt_boost::config::Config;
use prompt_boost::enhancers::EnhancerRegistry;
use prompt_boost::EnhanceError;

#[test]
fn test_registry_lists_all_enhancers_in_order() {
    let registry = EnhancerRegistry::new();
    let names = registry.names();

    assert_eq!(
        names,
        vec!["context", "example", "instruction", "domain-knowledge"]
    );
}

#[test]
fn test_registry_resolve_every_listed_name() {
    let registry = EnhancerRegistry::new();

    for name in registry.names() {
        let enhancer = registry.resolve(name).unwrap();
        assert_eq!(enhancer.name(), name);
    }
}

#[test]
fn test_registry_resolve_unknown_strategy_fails() {
    let registry = EnhancerRegistry::new();
    let err = registry.resolve("nonexistent").unwrap_err();

    assert!(matches!(err, EnhanceError::UnknownStrategy(_)));
    assert!(err.to_string().contains("nonexistent"));
}

#[test]
fn test_registry_descriptions_not_empty() {
    let registry = EnhancerRegistry::new();

    for enhancer in registry.list() {
        assert!(!enhancer.description().is_empty());
    }
}

#[test]
fn test_registry_from_config_empty_list_enables_all() {
    let config = Config::default();
    let registry = EnhancerRegistry::from_config(&config);

    assert_eq!(registry.names().len(), 4);
}

#[test]
fn test_registry_from_config_filters_enhancers() {
    let config = Config {
        enabled_enhancers: vec!["context".to_string(), "example".to_string()],
        ..Config::default()
    };
    let registry = EnhancerRegistry::from_config(&config);

    assert_eq!(registry.names(), vec!["context", "example"]);
    assert!(registry.resolve("instruction").is_err());
}

#[test]
fn test_registry_from_config_preserves_insertion_order() {
    // filter order follows registry insertion order, not config order
    let config = Config {
        enabled_enhancers: vec!["domain-knowledge".to_string(), "context".to_string()],
        ..Config::default()
    };
    let registry = EnhancerRegistry::from_config(&config);

    assert_eq!(registry.names(), vec!["context", "domain-knowledge"]);
}

#[test]
fn test_registry_from_config_unknown_name_ignored() {
    let config = Config {
        enabled_enhancers: vec!["context".to_string(), "bogus".to_string()],
        ..Config::default()
    };
    let registry = EnhancerRegistry::from_config(&config);

    assert_eq!(registry.names(), vec!["context"]);
}
