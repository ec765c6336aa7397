// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Optional action parameters that are fixed or computed from the input.

use std::fmt;

/// Type alias for parameters computed from an action's input.
type Compute<'a, V, T> = Box<dyn Fn(&T) -> V + Send + Sync + 'a>;

/// An optional action parameter.
///
/// A parameter is either not configured, a constant, or a function of the
/// value the action is played with. Functions are evaluated lazily, each
/// time the action plays.
///
/// # Examples
///
/// ```
/// use fan_core::automation::TemplatableValue;
///
/// let unset: TemplatableValue<'_, u8, u8> = TemplatableValue::Unset;
/// assert_eq!(unset.value(&7), None);
///
/// let fixed: TemplatableValue<'_, u8, u8> = TemplatableValue::Constant(3);
/// assert_eq!(fixed.value(&7), Some(3));
///
/// let doubled: TemplatableValue<'_, u8, u8> = TemplatableValue::computed(|x| x * 2);
/// assert_eq!(doubled.value(&7), Some(14));
/// ```
pub enum TemplatableValue<'a, V, T> {
    /// Not configured; the action leaves the corresponding field alone.
    Unset,
    /// Fixed value.
    Constant(V),
    /// Value computed from the action's input.
    Computed(Compute<'a, V, T>),
}

impl<'a, V, T> TemplatableValue<'a, V, T> {
    /// Creates a computed parameter.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'a,
    {
        Self::Computed(Box::new(f))
    }

    /// Returns whether the parameter is configured.
    #[must_use]
    pub fn has_value(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl<V: Clone, T> TemplatableValue<'_, V, T> {
    /// Evaluates the parameter for input `x`. Returns `None` when unset.
    pub fn value(&self, x: &T) -> Option<V> {
        match self {
            Self::Unset => None,
            Self::Constant(v) => Some(v.clone()),
            Self::Computed(f) => Some(f(x)),
        }
    }
}

// Derived `Default` would require `V: Default` and `T: Default`.
#[allow(clippy::derivable_impls)]
impl<V, T> Default for TemplatableValue<'_, V, T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<V, T> From<V> for TemplatableValue<'_, V, T> {
    fn from(value: V) -> Self {
        Self::Constant(value)
    }
}

impl<V: fmt::Debug, T> fmt::Debug for TemplatableValue<'_, V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("Unset"),
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn default_is_unset() {
        let value: TemplatableValue<'_, bool, ()> = TemplatableValue::default();
        assert!(!value.has_value());
        assert_eq!(value.value(&()), None);
    }

    #[test]
    fn default_needs_no_default_bounds() {
        use std::time::Instant;

        let value: TemplatableValue<'_, Instant, Instant> = TemplatableValue::default();
        assert!(!value.has_value());
    }

    #[test]
    fn from_constant() {
        let value: TemplatableValue<'_, bool, ()> = true.into();
        assert!(value.has_value());
        assert_eq!(value.value(&()), Some(true));
    }

    #[test]
    fn computed_is_evaluated_on_every_read() {
        let evaluations = AtomicU32::new(0);
        let value: TemplatableValue<'_, u32, u32> = TemplatableValue::computed(|x| {
            evaluations.fetch_add(1, Ordering::SeqCst);
            x + 1
        });

        assert_eq!(evaluations.load(Ordering::SeqCst), 0);
        assert_eq!(value.value(&1), Some(2));
        assert_eq!(value.value(&10), Some(11));
        assert_eq!(evaluations.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn debug_output() {
        let unset: TemplatableValue<'_, u8, ()> = TemplatableValue::Unset;
        let constant: TemplatableValue<'_, u8, ()> = TemplatableValue::Constant(5);
        let computed: TemplatableValue<'_, u8, ()> = TemplatableValue::computed(|()| 1);

        assert_eq!(format!("{unset:?}"), "Unset");
        assert_eq!(format!("{constant:?}"), "Constant(5)");
        assert_eq!(format!("{computed:?}"), "Computed(..)");
    }
}
