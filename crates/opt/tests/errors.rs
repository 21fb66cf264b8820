use std::collections::BTreeMap;
use std::fmt;

use anyhow::{Context, Result};
use opt::{AbsentValueError, Opt};

#[derive(Debug, PartialEq)]
enum LookupError {
    MissingKey(&'static str),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::MissingKey(key) => write!(f, "missing key: {}", key),
        }
    }
}

impl std::error::Error for LookupError {}

fn lookup(map: &BTreeMap<&'static str, u32>, key: &str) -> Opt<u32> {
    map.get(key).copied().into()
}

fn sum_keys(map: &BTreeMap<&'static str, u32>) -> Result<u32> {
    let a = lookup(map, "a").or_throw()?;
    let b = lookup(map, "b").or_throw_with(|| LookupError::MissingKey("b"))?;
    Ok(a + b)
}

#[test]
fn test_absent_value_error_display() {
    assert_eq!(AbsentValueError.to_string(), "value was absent");
}

#[test]
fn test_or_throw_propagates_through_anyhow() {
    println!("=== Testing or_throw through anyhow ===");
    let mut map = BTreeMap::new();
    map.insert("a", 1);
    map.insert("b", 2);
    assert_eq!(sum_keys(&map).unwrap(), 3);

    map.remove("a");
    let err = sum_keys(&map).unwrap_err();
    println!("Error: {}", err);
    assert!(err.downcast_ref::<AbsentValueError>().is_some());

    map.insert("a", 1);
    map.remove("b");
    let err = sum_keys(&map).unwrap_err();
    println!("Error: {}", err);
    let missing = err.downcast_ref::<LookupError>();
    assert_eq!(missing, Some(&LookupError::MissingKey("b")));
    println!("✓ absence surfaced as the expected error kind");
}

#[test]
fn test_or_throw_with_context() {
    let op: Opt<u32> = Opt::Absent;
    let err = op.or_throw().context("loading retry budget").unwrap_err();
    assert_eq!(err.to_string(), "loading retry budget");
    assert_eq!(err.root_cause().to_string(), "value was absent");
}

#[test]
fn test_or_throw_with_invokes_producer_once() {
    let mut calls = 0;
    let op: Opt<u32> = Opt::Absent;
    let result = op.or_throw_with(|| {
        calls += 1;
        LookupError::MissingKey("x")
    });
    assert_eq!(result, Err(LookupError::MissingKey("x")));
    assert_eq!(calls, 1);

    let result = Opt::Present(4).or_throw_with(|| {
        calls += 1;
        LookupError::MissingKey("x")
    });
    assert_eq!(result, Ok(4));
    assert_eq!(calls, 1);
}

#[test]
fn test_absent_value_error_boxes() {
    let boxed: Box<dyn std::error::Error> = Box::new(AbsentValueError);
    assert_eq!(boxed.to_string(), "value was absent");
}

#[cfg(feature = "std")]
#[test]
fn test_absent_value_error_into_io_error() {
    fn read_port(op: Opt<u16>) -> std::io::Result<u16> {
        Ok(op.or_throw()?)
    }

    assert_eq!(read_port(Opt::Present(8080)).unwrap(), 8080);
    let err = read_port(Opt::Absent).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    assert_eq!(err.to_string(), "value was absent");
}
