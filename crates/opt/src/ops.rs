//! Free-function forms of the [`Opt`] operations, for call sites that read
//! better as `or_default(op, ..)` than as a method chain.

use alloc::vec::Vec;

use crate::{AbsentValueError, Opt};

/// Returns true if `op` holds a value.
pub fn is_present<T>(op: &Opt<T>) -> bool {
    op.is_present()
}

/// Replaces an absent value with the result of `make_default`.
///
/// e.g. `or_default(Present(1), || 2) == 1`, `or_default(Absent, || 2) == 2`.
pub fn or_default<T, F: FnOnce() -> T>(op: Opt<T>, make_default: F) -> T {
    op.or_default(make_default)
}

/// Returns the value, or [`AbsentValueError`] when `op` is absent.
pub fn or_throw<T>(op: Opt<T>) -> Result<T, AbsentValueError> {
    op.or_throw()
}

/// Returns the value, or the error built by `make_err` when `op` is absent.
pub fn or_throw_with<T, E, F: FnOnce() -> E>(op: Opt<T>, make_err: F) -> Result<T, E> {
    op.or_throw_with(make_err)
}

/// Builds an `Opt` that only has a value if `cond` is true.
pub fn if_cond<T, F: FnOnce() -> T>(cond: bool, make: F) -> Opt<T> {
    Opt::when(cond, make)
}

/// Performs `action` only on present values.
pub fn for_each_present<T, F: FnOnce(T)>(op: Opt<T>, action: F) {
    op.if_present(action)
}

/// Maps a present value, doing nothing for absent ones.
pub fn map_present<T, U, F: FnOnce(T) -> U>(op: Opt<T>, mapper: F) -> Opt<U> {
    op.map(mapper)
}

/// The eliminator: calls exactly one of `on_present` or `on_absent`. Every
/// other function here can be written in terms of it.
pub fn match_opt<T, R, P, A>(op: Opt<T>, on_present: P, on_absent: A) -> R
where
    P: FnOnce(T) -> R,
    A: FnOnce() -> R,
{
    op.match_with(on_present, on_absent)
}

/// Maps each element to an `Opt` and keeps the present results, in order.
///
/// ```
/// use opt::ops::{filter_map, if_cond};
///
/// let halves = filter_map([1, 2, 3, 4], |n| if_cond(n % 2 == 0, || n / 2));
/// assert_eq!(halves, vec![1, 2]);
/// ```
pub fn filter_map<I, U, F>(seq: I, mut op_mapper: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Opt<U>,
{
    let mut out = Vec::new();
    for elem in seq {
        op_mapper(elem).if_present(|val| out.push(val));
    }
    out
}
