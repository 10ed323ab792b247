use ordo_core::{EnumError, EnumSet};
use ordo_derive::Enumerable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumerable)]
enum Foo {
    None = 0,
    First = 1,
    Second = 2,
    Fifty = 5,
}

fn empty() -> EnumSet<Foo> {
    EnumSet::empty().expect("four-member domain fits the capacity")
}

#[test]
fn empty_set_has_nothing() {
    let set = empty();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.bits(), 0);
    assert!(!set.contains(Foo::None));
    assert_eq!(set.to_string(), "[]");
}

#[test]
fn include_adds_exactly_the_given_value() {
    let set = empty().include(Foo::First).unwrap().include(Foo::Fifty).unwrap();
    assert!(!set.contains(Foo::None));
    assert!(set.contains(Foo::First));
    assert!(!set.contains(Foo::Second));
    assert!(set.contains(Foo::Fifty));
    assert_eq!(set.len(), 2);
}

#[test]
fn exclude_removes_exactly_the_given_value() {
    let all = EnumSet::from_values(&[Foo::None, Foo::First, Foo::Second, Foo::Fifty]).unwrap();
    let set = all.exclude(Foo::First).unwrap().exclude(Foo::Fifty).unwrap();
    assert!(set.contains(Foo::None));
    assert!(!set.contains(Foo::First));
    assert!(set.contains(Foo::Second));
    assert!(!set.contains(Foo::Fifty));
}

#[test]
fn include_then_exclude_restores_the_bit_field() {
    let base = empty().include(Foo::Second).unwrap();
    let round = base.include(Foo::Fifty).unwrap().exclude(Foo::Fifty).unwrap();
    assert_eq!(round, base);
    assert_eq!(round.bits(), base.bits());
    assert_eq!(round.len(), base.len());
}

#[test]
fn duplicate_includes_do_not_inflate_cardinality() {
    let set = EnumSet::from_values(&[Foo::First, Foo::First, Foo::Second]).unwrap();
    assert_eq!(set.len(), 2);

    let again = set.include(Foo::First).unwrap();
    assert_eq!(again, set);
    assert_eq!(again.len(), 2);
}

#[test]
fn excluding_an_absent_value_is_a_no_op() {
    let set = empty().include(Foo::None).unwrap();
    let same = set.exclude(Foo::Fifty).unwrap();
    assert_eq!(same, set);
    assert_eq!(same.len(), 1);
}

#[test]
fn from_value_builds_a_singleton() {
    let set = EnumSet::from_value(Foo::None).unwrap();
    assert!(set.contains(Foo::None));
    assert_eq!(set.len(), 1);
}

#[test]
fn from_range_is_inclusive_on_both_ends() {
    let set = EnumSet::from_range(Foo::None, Foo::Fifty).unwrap();
    assert_eq!(set.len(), 4);
    for value in [Foo::None, Foo::First, Foo::Second, Foo::Fifty] {
        assert!(set.contains(value));
    }
}

#[test]
fn inverted_range_is_silently_empty() {
    let set = EnumSet::from_range(Foo::Fifty, Foo::None).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[test]
fn union_and_difference_operate_on_bit_fields() {
    let left = EnumSet::from_values(&[Foo::None, Foo::First]).unwrap();
    let right = EnumSet::from_values(&[Foo::First, Foo::Fifty]).unwrap();

    let union = left.union(right);
    assert_eq!(union.len(), 3);
    assert!(union.contains(Foo::None));
    assert!(union.contains(Foo::First));
    assert!(union.contains(Foo::Fifty));

    let difference = left.difference(right);
    assert_eq!(difference.len(), 1);
    assert!(difference.contains(Foo::None));
    assert!(!difference.contains(Foo::First));
}

#[test]
fn include_all_and_exclude_all_mirror_their_scalar_forms() {
    let set = empty().include_all(&[Foo::None, Foo::Second, Foo::Fifty]).unwrap();
    assert_eq!(set.len(), 3);

    let trimmed = set.exclude_all(&[Foo::Second, Foo::Fifty]).unwrap();
    assert_eq!(trimmed, EnumSet::from_value(Foo::None).unwrap());
}

#[test]
fn equality_ignores_construction_history() {
    let built = empty().include(Foo::First).unwrap().include(Foo::Second).unwrap();
    let listed = EnumSet::from_values(&[Foo::Second, Foo::First]).unwrap();
    assert_eq!(built, listed);
}

#[test]
fn display_lists_names_in_ordinal_order() {
    let set = empty().include(Foo::None).unwrap().include(Foo::Second).unwrap();
    assert_eq!(set.to_string(), "[None, Second]");

    let reversed = empty().include(Foo::Second).unwrap().include(Foo::None).unwrap();
    assert_eq!(reversed.to_string(), "[None, Second]");
}

#[test]
fn iteration_ascends_by_ordinal_and_restarts() {
    let set = EnumSet::from_values(&[Foo::Fifty, Foo::None, Foo::Second]).unwrap();

    let first: Vec<Foo> = set.iter().collect();
    assert_eq!(first, vec![Foo::None, Foo::Second, Foo::Fifty]);

    let second: Vec<Foo> = (&set).into_iter().collect();
    assert_eq!(first, second);

    assert_eq!(set.iter().len(), 3);
}

#[test]
fn sets_are_copy_and_hashable() {
    let set = EnumSet::from_values(&[Foo::First]).unwrap();
    let copy = set;
    assert_eq!(set, copy);

    let mut seen = std::collections::HashSet::new();
    assert!(seen.insert(set));
    assert!(!seen.insert(copy));
}

// 33 members: one past the bit field's capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumerable)]
enum Wide {
    M00,
    M01,
    M02,
    M03,
    M04,
    M05,
    M06,
    M07,
    M08,
    M09,
    M10,
    M11,
    M12,
    M13,
    M14,
    M15,
    M16,
    M17,
    M18,
    M19,
    M20,
    M21,
    M22,
    M23,
    M24,
    M25,
    M26,
    M27,
    M28,
    M29,
    M30,
    M31,
    M32,
}

#[test]
fn oversized_domains_fail_at_instantiation() {
    assert!(matches!(
        EnumSet::<Wide>::empty(),
        Err(EnumError::CapacityExceeded { len: 33, cap: 32, .. })
    ));
    assert!(matches!(
        EnumSet::from_value(Wide::M00),
        Err(EnumError::CapacityExceeded { .. })
    ));
    assert!(matches!(
        EnumSet::from_range(Wide::M00, Wide::M32),
        Err(EnumError::CapacityExceeded { .. })
    ));
}

#[test]
fn oversized_domains_still_have_metadata() {
    // The cap binds the set type, not introspection.
    let meta = ordo_core::DomainMeta::<Wide>::get().unwrap();
    assert_eq!(meta.len(), 33);
    assert_eq!(meta.ordinal_of(Wide::M32).unwrap(), 32);
}
