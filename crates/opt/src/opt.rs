use crate::AbsentValueError;

/// A value that may be absent.
///
/// Every other method is a shorthand for [`Opt::match_with`], which forces the
/// caller to say what happens in both cases.
///
/// Orders like `Option`: `Absent` sorts before every present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Opt<T> {
    Absent,
    Present(T),
}

impl<T> Opt<T> {
    /// Constructs an `Opt::Present(val)` variant.
    pub fn present(val: T) -> Self {
        Opt::Present(val)
    }

    /// Constructs an `Opt::Absent` variant.
    pub fn absent() -> Self {
        Opt::Absent
    }

    /// `Present(make())` if `cond` holds, `Absent` otherwise.
    ///
    /// `make` only runs when `cond` is true:
    /// ```
    /// use opt::Opt;
    ///
    /// fn half(n: u32) -> Opt<u32> {
    ///     Opt::when(n % 2 == 0, || n / 2)
    /// }
    /// assert_eq!(half(4), Opt::Present(2));
    /// assert_eq!(half(3), Opt::Absent);
    /// ```
    pub fn when<F: FnOnce() -> T>(cond: bool, make: F) -> Self {
        if cond {
            Opt::Present(make())
        } else {
            Opt::Absent
        }
    }

    /// Returns true if the value is `Present`.
    pub fn is_present(&self) -> bool {
        matches!(self, Opt::Present(_))
    }

    /// Returns true if the value is `Absent`.
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Calls exactly one of `on_present` or `on_absent` and returns its result.
    ///
    /// ```
    /// use opt::Opt;
    ///
    /// fn bump(op: Opt<i32>) -> i32 {
    ///     op.match_with(|n| n + 1, || 0)
    /// }
    /// assert_eq!(bump(Opt::Present(1)), 2);
    /// assert_eq!(bump(Opt::Absent), 0);
    /// ```
    pub fn match_with<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self {
            Opt::Present(val) => on_present(val),
            Opt::Absent => on_absent(),
        }
    }

    /// Returns the contained value, or the result of `make_default` when absent.
    ///
    /// `make_default` is never called for a present value.
    pub fn or_default<F: FnOnce() -> T>(self, make_default: F) -> T {
        self.match_with(|val| val, make_default)
    }

    /// Returns the contained value, or [`AbsentValueError`] when absent.
    pub fn or_throw(self) -> Result<T, AbsentValueError> {
        self.or_throw_with(|| AbsentValueError)
    }

    /// Returns the contained value, or the error built by `make_err` when absent.
    ///
    /// ```
    /// use opt::Opt;
    ///
    /// let op: Opt<u8> = Opt::Absent;
    /// assert_eq!(op.or_throw_with(|| "boo"), Err("boo"));
    /// ```
    pub fn or_throw_with<E, F: FnOnce() -> E>(self, make_err: F) -> Result<T, E> {
        self.match_with(Ok, || Err(make_err()))
    }

    /// Unwraps the value, panicking with `msg` if absent.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Opt::Present(val) => val,
            Opt::Absent => panic!("{}", msg),
        }
    }

    /// Runs `action` on the value if there is one.
    pub fn if_present<F: FnOnce(T)>(self, action: F) {
        self.match_with(action, || ())
    }

    /// Wraps `f(val)` in `Present`. An absent value stays absent and `f` is
    /// never called.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Opt<U> {
        self.and_then(|val| Opt::Present(f(val)))
    }

    /// Like [`Opt::map`], for mappers that may themselves come up empty.
    pub fn and_then<U, F: FnOnce(T) -> Opt<U>>(self, f: F) -> Opt<U> {
        self.match_with(f, || Opt::Absent)
    }

    /// Keeps the value only if `predicate` accepts it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        self.and_then(|val| {
            if predicate(&val) {
                Opt::Present(val)
            } else {
                Opt::Absent
            }
        })
    }

    /// Borrows the value, leaving `self` usable afterwards.
    pub fn as_ref(&self) -> Opt<&T> {
        match self {
            Opt::Present(val) => Opt::Present(val),
            Opt::Absent => Opt::Absent,
        }
    }

    /// Mutable borrow of the value, for in-place updates through
    /// [`Opt::if_present`].
    pub fn as_mut(&mut self) -> Opt<&mut T> {
        match self {
            Opt::Present(val) => Opt::Present(val),
            Opt::Absent => Opt::Absent,
        }
    }

    /// Hands the value over to APIs that speak `Option`.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Opt<Opt<T>> {
    /// Collapses one level of nesting. An absent outer value and a present
    /// outer value holding an absent inner one both become `Absent`.
    pub fn flatten(self) -> Opt<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Opt::Absent
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(val) => Opt::Present(val),
            None => Opt::Absent,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(value: Opt<T>) -> Self {
        match value {
            Opt::Present(val) => Some(val),
            Opt::Absent => None,
        }
    }
}

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Opt<T> {
    type Item = &'a mut T;
    type IntoIter = core::option::IntoIter<&'a mut T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut().into_iter()
    }
}

/// Unwraps a present value or returns `Opt::Absent` from the enclosing function.
///
/// ```
/// use opt::{Opt, present};
///
/// fn sum(a: Opt<u32>, b: Opt<u32>) -> Opt<u32> {
///     let a = present!(a);
///     let b = present!(b);
///     Opt::Present(a + b)
/// }
/// assert_eq!(sum(Opt::Present(1), Opt::Present(2)), Opt::Present(3));
/// assert_eq!(sum(Opt::Present(1), Opt::Absent), Opt::Absent);
/// ```
#[macro_export]
macro_rules! present {
    ($op:expr) => {
        match $op {
            $crate::Opt::Present(val) => val,
            $crate::Opt::Absent => return $crate::Opt::Absent,
        }
    };
}
