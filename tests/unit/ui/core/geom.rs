use super::*;

#[test]
fn contains_is_inclusive_on_both_ends() {
    let b = Bounds::new(10, 12, 20, 21);
    assert!(b.contains(10, 20));
    assert!(b.contains(12, 21));
    assert!(!b.contains(13, 20));
    assert!(!b.contains(12, 22));
    assert!(!b.contains(9, 20));
    assert!(!b.contains(10, 19));
    assert_eq!(b.width(), 3);
    assert_eq!(b.height(), 2);
}

#[test]
fn single_cell_box_contains_its_cell() {
    let b = Bounds::from_size(4, 5, 1, 1);
    assert_eq!(b, Bounds::new(4, 4, 5, 5));
    assert!(b.contains(4, 5));
    assert!(!b.is_empty());
}

#[test]
fn empty_box_never_contains() {
    let b = Bounds::empty();
    assert!(b.is_empty());
    assert!(!b.contains(0, 0));
    assert_eq!(b.width(), 0);
}

#[test]
fn intersection_and_union() {
    let a = Bounds::new(0, 9, 0, 4);
    let b = Bounds::new(5, 14, 2, 8);
    assert_eq!(a.intersection(b), Bounds::new(5, 9, 2, 4));
    assert_eq!(a.union(b), Bounds::new(0, 14, 0, 8));
    assert!(a.intersection(Bounds::new(20, 30, 0, 4)).is_empty());
    assert_eq!(Bounds::empty().union(b), b);
}

#[test]
fn bounds_cell_is_shared() {
    let cell = BoundsCell::new();
    let alias = cell.clone();
    alias.set(Bounds::new(1, 2, 3, 4));
    assert!(cell.contains(2, 4));
    assert_eq!(cell.get().translate(1, -1), Bounds::new(2, 3, 2, 3));
}

#[test]
fn fresh_bounds_cell_contains_nothing() {
    let cell = BoundsCell::new();
    assert!(cell.get().is_empty());
    assert!(!cell.contains(0, 0));
}
