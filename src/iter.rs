//! Flattening sequences of optional values
//!
//! ```
//! use sluice::iter::PresentExt;
//! use sluice::Optional;
//!
//! let ages = vec![Some(10), None, Some(20)];
//! let present: Vec<i32> = ages.into_iter().map(Optional::of).present().collect();
//! assert_eq!(present, vec![10, 20]);
//! ```

use crate::Optional;

/// Iterator adapters that keep only present values, in order.
pub trait PresentExt: Iterator + Sized {
    /// Yield the payload of every `Present`, dropping `Absent`s.
    fn present<T>(self) -> impl Iterator<Item = T>
    where
        Self: Iterator<Item = Optional<T>>;

    /// Map each item to an `Optional` and keep the present results.
    fn filter_map_present<U, F>(self, f: F) -> impl Iterator<Item = U>
    where
        F: FnMut(Self::Item) -> Optional<U>;
}

impl<I> PresentExt for I
where
    I: Iterator + Sized,
{
    fn present<T>(self) -> impl Iterator<Item = T>
    where
        Self: Iterator<Item = Optional<T>>,
    {
        self.flatten()
    }

    fn filter_map_present<U, F>(self, mut f: F) -> impl Iterator<Item = U>
    where
        F: FnMut(Self::Item) -> Optional<U>,
    {
        self.filter_map(move |item| f(item).into_option())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_drops_absent_and_keeps_order() {
        let items = vec![
            Optional::present(3),
            Optional::absent(),
            Optional::present(1),
            Optional::absent(),
            Optional::present(2),
        ];
        let values: Vec<_> = items.into_iter().present().collect();
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn test_average_of_present_ages() {
        let ages = [Some(10), None, Some(20)];
        let present: Vec<i32> = ages.iter().filter_map_present(|a| Optional::of(*a)).collect();
        let avg = present.iter().sum::<i32>() / present.len() as i32;
        assert_eq!(avg, (10 + 20) / 2);
    }

    #[test]
    fn test_all_absent_is_empty() {
        let items: Vec<Optional<u8>> = vec![Optional::absent(); 3];
        assert_eq!(items.into_iter().present().count(), 0);
    }
}
