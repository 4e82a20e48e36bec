//! End-to-end scenarios over path hierarchies, the way a settings or
//! VCS-root registry would drive these maps.

use areamap::{AreaIndex, AreaMap, MembershipMap};

fn encloses(ancestor: &String, key: &String) -> bool {
    key.starts_with(ancestor.as_str())
        && (key.len() == ancestor.len() || key.as_bytes()[ancestor.len()] == b'/')
}

type Encloses = fn(&String, &String) -> bool;

fn s(v: &str) -> String {
    v.to_string()
}

#[test]
fn subsuming_insert_then_enclosing_query() {
    let mut map: MembershipMap<String, u32, Encloses> = MembershipMap::new(encloses);
    map.insert(s("a"), 0);
    map.insert(s("a/b"), 0);
    map.insert(s("a/b/c"), 0);
    map.insert(s("x"), 0);

    map.insert_optimal(s("a/b/c"), 1);
    map.insert_optimal(s("a"), 2);

    assert_eq!(map.keys(), [s("a"), s("x")]);
    assert_eq!(map.get_exact(&s("a")), Some(&2));
    assert_eq!(map.get_enclosing(&s("a/b/z")), Some((&s("a"), &2)));
}

#[test]
fn optimize_folds_children_into_parents() {
    let mut map: MembershipMap<String, u32, Encloses> = MembershipMap::new(encloses);
    map.insert(s("a"), 1);
    map.insert(s("a/b"), 2);
    map.insert(s("x"), 3);

    map.optimize(|_, _| true);

    assert_eq!(map.keys(), [s("a"), s("x")]);
    assert_eq!(map.get_exact(&s("a")), Some(&1));
    assert_eq!(map.get_exact(&s("x")), Some(&3));
}

#[test]
fn directory_settings_registry() {
    // A value applies to its directory and everything below it; the most
    // specific entry wins, falling back level by level.
    let mut settings: MembershipMap<String, &str, Encloses> = MembershipMap::new(encloses);
    settings.insert(s("repo"), "default");
    settings.insert(s("repo/vendor"), "ignore");
    settings.insert(s("repo/src/generated"), "ignore");

    assert_eq!(
        settings.get_enclosing(&s("repo/src/main.c")),
        Some((&s("repo"), &"default"))
    );
    assert_eq!(
        settings.get_enclosing(&s("repo/vendor/lib/x.c")),
        Some((&s("repo/vendor"), &"ignore"))
    );
    assert_eq!(settings.get_enclosing(&s("elsewhere")), None);

    // Collect the whole fallback chain for one file, nearest first.
    let mut chain = Vec::new();
    settings.get_similar(&s("repo/vendor/lib/x.c"), |k, v| {
        chain.push((k.clone(), *v));
        false
    });
    assert_eq!(
        chain,
        vec![(s("repo/vendor"), "ignore"), (s("repo"), "default")]
    );

    // Dropping a root by its value, as a de-registration pass would.
    assert_eq!(settings.remove_by_value(&"default"), Some(s("repo")));
    assert_eq!(settings.get_enclosing(&s("repo/src/main.c")), None);
}

fn load<M: AreaIndex<String, u32>>(index: &mut M, entries: &[(&str, u32)]) {
    for (key, value) in entries {
        index.insert(s(key), *value);
    }
}

#[test]
fn loading_through_the_shared_trait() {
    let entries = [("m", 1), ("m/n", 2), ("z", 3)];

    let mut plain: AreaMap<String, u32, Encloses> = AreaMap::new(encloses);
    let mut minimal: MembershipMap<String, u32, Encloses> = MembershipMap::new(encloses);
    load(&mut plain, &entries);
    load(&mut minimal, &entries);

    // Plain insertion never prunes, through the trait or otherwise.
    assert_eq!(plain.keys(), minimal.keys());
    assert_eq!(plain.keys(), [s("m"), s("m/n"), s("z")]);

    minimal.optimize(|_, _| true);
    assert_eq!(minimal.keys(), [s("m"), s("z")]);
}

#[test]
fn append_merges_order_compatible_maps() {
    let mut low: MembershipMap<String, u32, Encloses> = MembershipMap::new(encloses);
    low.insert_optimal(s("a"), 1);
    low.insert_optimal(s("b"), 2);

    let mut high: MembershipMap<String, u32, Encloses> = MembershipMap::new(encloses);
    high.insert_optimal(s("y"), 3);
    high.insert_optimal(s("z"), 4);

    low.append(high);
    assert_eq!(low.keys(), [s("a"), s("b"), s("y"), s("z")]);
    assert_eq!(low.get_exact(&s("z")), Some(&4));
    assert_eq!(low.get_enclosing(&s("b/deep")), Some((&s("b"), &2)));
}
