use super::*;
use pretty_assertions::assert_eq;

fn interner() -> ByteInterner {
    ByteInterner::new(TwoTierConfig::new(16, 64, 4)).unwrap_or_else(|e| panic!("{e}"))
}

#[test]
fn equal_runs_share_one_allocation() {
    let mut i = interner();
    let a = i.intern(b"Type");
    let b = i.intern(b"Type");
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(&*a, b"Type");
}

#[test]
fn different_runs_stay_distinct() {
    let mut i = interner();
    let a = i.intern(b"Type");
    let b = i.intern(b"Page");
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(&*b, b"Page");
}

#[test]
fn forks_share_interned_runs() {
    let mut a = interner();
    let first = a.intern(b"MediaBox");
    let mut b = a.fork();
    let second = b.intern(b"MediaBox");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(b.stats().shared_hits, 1);
}

#[test]
fn attach_uses_the_given_tier() {
    let a = interner();
    let b = ByteInterner::attach(Arc::clone(a.shared()));
    assert!(Arc::ptr_eq(a.shared(), b.shared()));
}

#[test]
fn empty_run() {
    let mut i = interner();
    assert_eq!(&*i.intern(b""), b"");
}
