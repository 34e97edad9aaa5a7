use super::*;

#[test]
fn fresh_lifetime_applies() {
    let lifetime = ViewLifetime::new();
    let mut seen = None;
    assert!(lifetime.apply(5, |v| seen = Some(v)));
    assert_eq!(seen, Some(5));
}

#[test]
fn cancelled_lifetime_skips_apply() {
    let lifetime = ViewLifetime::new();
    lifetime.clone().cancel();
    let mut seen = None;
    assert!(!lifetime.apply(5, |v| seen = Some(v)));
    assert_eq!(seen, None);
}

#[test]
fn scoped_lifetime_cancels_on_owner_cleanup() {
    let owner = leptos::prelude::Owner::new();
    let lifetime = owner.with(ViewLifetime::scoped);
    assert!(!lifetime.is_cancelled());

    owner.cleanup();

    assert!(lifetime.is_cancelled());
}
