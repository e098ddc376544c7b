//! Flat per-instance storage for neuron parameters and recorded signals
//!
//! Every neuron type stores its parameters as a plain ordered vector of
//! [`Real`] values and its recording choices as a plain ordered vector of
//! booleans. All schema information (names, units, defaults) lives in the
//! type's shared descriptor, never here, which is what lets type-agnostic
//! code copy, compare and serialize instances of any model uniformly.

use crate::error::{ModelError, Result};
use smallvec::SmallVec;

/// Scalar type used for all neuron parameter values
pub type Real = f32;

/// Inline capacity covering the largest declared parameter schema
const PARAM_INLINE: usize = 16;

/// Inline capacity covering the largest declared signal schema
const SIGNAL_INLINE: usize = 4;

/// Ordered, flat storage for one instance's parameter values
///
/// The length is fixed by the owning type's schema at construction time;
/// spike-source types instead use the vector as an ordered list of spike
/// times. Positional access is checked: an index past the end is a hard
/// [`ModelError::IndexOutOfRange`], never silently clamped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterVector {
    values: SmallVec<[Real; PARAM_INLINE]>,
}

impl ParameterVector {
    /// Create an empty parameter vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parameter vector from an explicit ordered sequence
    pub fn from_values(values: impl IntoIterator<Item = Real>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Create a parameter vector of `len` copies of `value`
    pub fn filled(len: usize, value: Real) -> Self {
        Self {
            values: smallvec::smallvec![value; len],
        }
    }

    /// Read the value at `index`
    pub fn get(&self, index: usize) -> Result<Real> {
        self.values
            .get(index)
            .copied()
            .ok_or_else(|| ModelError::out_of_range(index, self.values.len()))
    }

    /// Write the value at `index`
    pub fn set(&mut self, index: usize, value: Real) -> Result<()> {
        let len = self.values.len();
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ModelError::out_of_range(index, len)),
        }
    }

    /// Append a value, growing the vector by one
    ///
    /// Only meaningful for list-style storage (spike times); schema-backed
    /// instances keep the length fixed by their descriptor.
    pub fn push(&mut self, value: Real) {
        self.values.push(value);
    }

    /// Number of stored values
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the vector holds no values
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the raw ordered values
    #[inline]
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Mutable view of the raw ordered values for bulk operations
    #[inline]
    pub fn values_mut(&mut self) -> &mut [Real] {
        &mut self.values
    }

    /// Iterate over the values in declaration order
    ///
    /// The iterator is double-ended, so backward traversal comes for free.
    pub fn iter(&self) -> core::slice::Iter<'_, Real> {
        self.values.iter()
    }
}

impl From<&[Real]> for ParameterVector {
    fn from(values: &[Real]) -> Self {
        Self {
            values: SmallVec::from_slice(values),
        }
    }
}

impl FromIterator<Real> for ParameterVector {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<'a> IntoIterator for &'a ParameterVector {
    type Item = &'a Real;
    type IntoIter = core::slice::Iter<'a, Real>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ordered, flat storage for one instance's signal-recording flags
///
/// One flag per declared signal of the owning type, in declaration order.
/// A fresh vector records nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignalVector {
    flags: SmallVec<[bool; SIGNAL_INLINE]>,
}

impl SignalVector {
    /// Create a signal vector with `count` flags, all disabled
    pub fn new(count: usize) -> Self {
        Self {
            flags: smallvec::smallvec![false; count],
        }
    }

    /// Create a signal vector from an explicit ordered flag sequence
    pub fn from_flags(flags: impl IntoIterator<Item = bool>) -> Self {
        Self {
            flags: flags.into_iter().collect(),
        }
    }

    /// Enable recording of the signal at `index`
    pub fn record(&mut self, index: usize) -> Result<()> {
        self.set(index, true)
    }

    /// Disable recording of the signal at `index`
    pub fn ignore(&mut self, index: usize) -> Result<()> {
        self.set(index, false)
    }

    /// Set the flag at `index`
    pub fn set(&mut self, index: usize, on: bool) -> Result<()> {
        let len = self.flags.len();
        match self.flags.get_mut(index) {
            Some(slot) => {
                *slot = on;
                Ok(())
            }
            None => Err(ModelError::out_of_range(index, len)),
        }
    }

    /// Check whether the signal at `index` is being recorded
    pub fn is_recorded(&self, index: usize) -> Result<bool> {
        self.flags
            .get(index)
            .copied()
            .ok_or_else(|| ModelError::out_of_range(index, self.flags.len()))
    }

    /// Number of declared flags
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Check whether the vector declares no flags
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Read-only view of the raw ordered flags
    #[inline]
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Mutable view of the raw ordered flags
    #[inline]
    pub fn flags_mut(&mut self) -> &mut [bool] {
        &mut self.flags
    }

    /// Iterate over the flags in declaration order
    pub fn iter(&self) -> core::slice::Iter<'_, bool> {
        self.flags.iter()
    }

    /// Number of signals currently being recorded
    pub fn recorded_count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    // Both vectors serialize as bare ordered sequences so the wire shape
    // is exactly the declared schema order, nothing more.

    impl Serialize for ParameterVector {
        fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            self.values().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for ParameterVector {
        fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let values = Vec::<Real>::deserialize(deserializer)?;
            Ok(ParameterVector::from_values(values))
        }
    }

    impl Serialize for SignalVector {
        fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            self.flags().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for SignalVector {
        fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let flags = Vec::<bool>::deserialize(deserializer)?;
            Ok(SignalVector::from_flags(flags))
        }
    }
}
