use super::*;

fn store_all<C, T>(container: &mut C, items: impl IntoIterator<Item = T>)
where
    C: Accumulator<T>,
{
    for item in items {
        container.store(item);
    }
}

#[test]
fn vec_appends_in_order() {
    let mut v = Vec::new();
    store_all(&mut v, [3, 1, 2]);
    assert_eq!(v, vec![3, 1, 2]);
}

#[test]
fn smallvec_appends_past_inline_capacity() {
    let mut v: SmallVec<[u8; 2]> = SmallVec::new();
    store_all(&mut v, [1, 2, 3]);
    assert_eq!(v.as_slice(), &[1, 2, 3]);
    assert!(v.spilled());
}

#[test]
fn string_appends_chars_and_strings() {
    let mut s = String::new();
    s.store('a');
    s.store(String::from("bc"));
    s.store("d");
    assert_eq!(s, "abcd");
}

#[test]
fn btree_map_keeps_first_value() {
    let mut map = BTreeMap::new();
    store_all(&mut map, [("k", 1), ("j", 2), ("k", 3)]);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("k"), Some(&1));
    assert_eq!(map.get("j"), Some(&2));
}

#[test]
fn hash_map_keeps_first_value() {
    let mut map: HashMap<String, u32> = HashMap::new();
    store_all(&mut map, [("a".to_owned(), 1), ("a".to_owned(), 2)]);
    assert_eq!(map.get("a"), Some(&1));
}

#[test]
fn nothing_accepts_anything() {
    let mut sink = Nothing;
    sink.store(1);
    sink.store("text");
    sink.store(('k', 'v'));
    assert_eq!(sink, Nothing);
}

// === Adaptors ===

struct Reversing;

impl ContainerAdaptor<Vec<u8>, u8> for Reversing {
    fn store(to: &mut Vec<u8>, value: u8) {
        to.insert(0, value);
    }
}

#[test]
fn default_adaptor_forwards_to_accumulator() {
    let mut v = Vec::new();
    <DefaultContainerAdaptor as ContainerAdaptor<Vec<u8>, u8>>::store(&mut v, 7);
    assert_eq!(v, vec![7]);
}

struct LastWins;

impl<K: Ord, V> ContainerAdaptor<BTreeMap<K, V>, (K, V)> for LastWins {
    fn store(to: &mut BTreeMap<K, V>, (key, value): (K, V)) {
        to.insert(key, value);
    }
}

#[test]
fn last_wins_adaptor_overrides_map_default() {
    let mut map = BTreeMap::new();
    LastWins::store(&mut map, ("k", 1));
    LastWins::store(&mut map, ("k", 2));
    assert_eq!(map.get("k"), Some(&2));
}

#[test]
fn custom_adaptor_replaces_storage_rule() {
    let mut v = Vec::new();
    Reversing::store(&mut v, 1);
    Reversing::store(&mut v, 2);
    assert_eq!(v, vec![2, 1]);
}
