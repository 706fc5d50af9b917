//! Shared traits implemented by budget entities.

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Sums the amounts of any sequence of [`Amounted`] entities.
pub fn total_amount<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Amounted::amount).sum()
}
