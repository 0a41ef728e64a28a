use super::*;
use crate::foundation::core::Direction;

fn instance(selector: &str) -> AnimationInstance {
    AnimationInstance::new(selector.to_owned(), Vec::new(), Direction::Forward)
}

#[test]
fn register_and_unregister() {
    let mut registry = Registry::new();
    let a = registry.register(instance("#a"));
    let b = registry.register(instance("#b"));
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get(a).unwrap().selector(), "#a");

    let removed = registry.unregister(a).unwrap();
    assert_eq!(removed.selector(), "#a");
    assert!(!registry.contains(a));
    assert!(registry.unregister(a).is_none());
    assert_eq!(registry.ids(), vec![b]);
}

#[test]
fn for_each_live_visits_everything() {
    let mut registry = Registry::new();
    registry.register(instance("#a"));
    registry.register(instance("#b"));
    let mut seen = Vec::new();
    registry.for_each_live(|_, inst| seen.push(inst.selector().to_owned()));
    seen.sort();
    assert_eq!(seen, vec!["#a", "#b"]);
    assert!(!registry.is_empty());
}
