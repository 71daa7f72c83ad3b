//! Standardized collection traits
//!
//! Read-only access to a set of domain models. Collections in this crate are
//! immutable once built, so the traits only expose queries.

/// Core trait for model collections
pub trait ModelCollection<T>: Send + Sync + std::fmt::Debug {
    /// Get all models in the collection
    fn all(&self) -> &[T];

    /// Count the total number of models in the collection
    fn count(&self) -> usize {
        self.all().len()
    }

    /// Whether the collection holds no models
    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.all().iter().filter(|model| predicate(model)).collect()
    }
}
