//! Less-than comparators built from field accessors.
//!
//! A comparator here is a plain `Fn(&T, &T) -> bool` that answers "is `lhs`
//! strictly before `rhs`". Multi-key orderings are built by running one
//! [`stable_sort`] per key, least significant key first.

use std::cmp::Ordering;

/// Builds a comparator that orders two items by the value `key` projects out
/// of each, using that value's natural `<`.
pub fn by_field<T, K, F>(key: F) -> impl Fn(&T, &T) -> bool
where
    T: ?Sized,
    K: PartialOrd + ?Sized,
    F: Fn(&T) -> &K,
{
    move |lhs, rhs| key(lhs) < key(rhs)
}

/// Turns a strict less-than predicate into the three-way form `slice::sort_by` expects.
pub fn ordering_from_less<T, L>(less: L) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    L: Fn(&T, &T) -> bool,
{
    move |lhs, rhs| {
        if less(lhs, rhs) {
            Ordering::Less
        } else if less(rhs, lhs) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Stable sort driven by a less-than predicate. Items the predicate cannot
/// tell apart keep their relative order.
pub fn stable_sort<T, L>(items: &mut [T], less: L)
where
    L: Fn(&T, &T) -> bool,
{
    items.sort_by(ordering_from_less(less));
}

/// Comparator for one named field.
///
/// ```
/// use avia_scanner::domain::model::AirlineTicket;
/// use avia_scanner::sort_by;
///
/// let cheaper = sort_by!(price);
/// let by_airline = sort_by!(AirlineTicket, airline);
/// # let _ = (&cheaper, &by_airline);
/// ```
///
/// The one-argument form targets [`AirlineTicket`](crate::domain::model::AirlineTicket).
/// Naming a field the type does not have is a compile error.
#[macro_export]
macro_rules! sort_by {
    ($ty:ty, $field:ident) => {
        $crate::core::comparator::by_field(|item: &$ty| &item.$field)
    };
    ($field:ident) => {
        $crate::sort_by!($crate::domain::model::AirlineTicket, $field)
    };
}
