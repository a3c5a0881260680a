//! Bulk unwrapping of fixed-size tuples of [`Try`] values.

use crate::{Failure, Try};

/// A single position in a tuple passed to [`unwrap_try_tuple`].
///
/// Owned [`Try`] values yield their value; borrowed ones yield a reference.
pub trait TryValue {
    /// The unwrapped value.
    type Output;

    /// Unwrap this position.
    ///
    /// # Errors
    ///
    /// Re-raises the failure held at this position, or reports uninitialised
    /// access for an empty one.
    fn try_value(self) -> Result<Self::Output, Failure>;
}

impl<T> TryValue for Try<T> {
    type Output = T;

    fn try_value(self) -> Result<T, Failure> {
        self.into_value()
    }
}

impl<'a, T> TryValue for &'a Try<T> {
    type Output = &'a T;

    fn try_value(self) -> Result<&'a T, Failure> {
        self.value()
    }
}

/// Tuples whose every position is a [`TryValue`].
pub trait UnwrapTryTuple {
    /// The same-shaped tuple of unwrapped values.
    type Output;

    /// Unwrap every position from left to right.
    ///
    /// # Errors
    ///
    /// Returns the first position's failure; later positions are not touched.
    fn unwrap_tries(self) -> Result<Self::Output, Failure>;
}

macro_rules! impl_unwrap_try_tuple {
    ($( ( $( $ty:ident $slot:ident ),+ ) ),+ $(,)?) => {
        $(
            impl<$($ty: TryValue),+> UnwrapTryTuple for ($($ty,)+) {
                type Output = ($(<$ty as TryValue>::Output,)+);

                fn unwrap_tries(self) -> Result<Self::Output, Failure> {
                    let ($($slot,)+) = self;
                    Ok(($($slot.try_value()?,)+))
                }
            }
        )+
    };
}

impl_unwrap_try_tuple! {
    (A a),
    (A a, B b),
    (A a, B b, C c),
    (A a, B b, C c, D d),
    (A a, B b, C c, D d, E e),
    (A a, B b, C c, D d, E e, F f),
    (A a, B b, C c, D d, E e, F f, G g),
    (A a, B b, C c, D d, E e, F f, G g, H h),
    (A a, B b, C c, D d, E e, F f, G g, H h, I i),
    (A a, B b, C c, D d, E e, F f, G g, H h, I i, J j),
    (A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k),
    (A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l),
}

/// Unwrap a tuple of [`Try`] values into a tuple of plain values.
///
/// Positions are unwrapped strictly left to right. The first failed or empty
/// position aborts the unwrap and its failure is returned; no partial tuple
/// is produced and later positions are never evaluated.
///
/// # Errors
///
/// Returns the failure of the first position that does not hold a value.
///
/// # Examples
///
/// ```
/// use try_outcome::{unwrap_try_tuple, Failure, Try};
///
/// let all = (Try::new(1), Try::new("a"), Try::new(2.0));
/// assert_eq!(unwrap_try_tuple(all).ok(), Some((1, "a", 2.0)));
///
/// let refused = Failure::msg("refused");
/// let mixed = (Try::new(1), Try::<&str>::from_failure(refused.clone()), Try::new(2.0));
/// let err = unwrap_try_tuple(mixed).unwrap_err();
/// assert!(err.is_same(&refused));
/// ```
pub fn unwrap_try_tuple<U>(tries: U) -> Result<U::Output, Failure>
where
    U: UnwrapTryTuple,
{
    tries.unwrap_tries()
}
