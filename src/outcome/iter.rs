use crate::outcome::core::Outcome;
use crate::types::ArgumentError;

/// Collects outcomes by left-folding [`Outcome::combine`] from `Success`.
///
/// # Examples
///
/// ```
/// use guard_rail::outcome::Outcome;
/// use guard_rail::types::ArgumentError;
///
/// let outcomes = vec![
///     Outcome::success(),
///     Outcome::failure(ArgumentError::null_argument("a")),
///     Outcome::failure(ArgumentError::null_argument("b")),
/// ];
/// let combined: Outcome = outcomes.into_iter().collect();
/// assert_eq!(combined.errors().len(), 2);
/// ```
impl FromIterator<Outcome> for Outcome {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        iter.into_iter().fold(Outcome::success(), Outcome::combine)
    }
}

impl<'a> IntoIterator for &'a Outcome {
    type Item = &'a ArgumentError;
    type IntoIter = core::slice::Iter<'a, ArgumentError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors().iter()
    }
}

impl Outcome {
    /// Iterates over the component errors in evaluation order.
    pub fn iter_errors(&self) -> core::slice::Iter<'_, ArgumentError> {
        self.errors().iter()
    }
}
