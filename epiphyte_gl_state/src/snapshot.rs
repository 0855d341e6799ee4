// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::parameters::{GlParameter, GlValue};

/// Parameter access to a GL context.
///
/// Implementations wrap a real context (or a recording fake) and expose the
/// reconciled parameter set as uniform get/set pairs. `get` is a pure query;
/// `set` applies the value immediately. Setting a [`GlValue`] shape that does
/// not belong to the key is a contract violation by the caller and
/// implementations may ignore it.
pub trait GlContext {
    /// Returns the current value of `parameter`.
    fn get(&self, parameter: GlParameter) -> GlValue;

    /// Sets `parameter` to `value`.
    fn set(&mut self, parameter: GlParameter, value: GlValue);
}

/// A capture of every reconciled parameter at one instant.
///
/// Snapshots are comparison material for drift diagnostics. They are cheap
/// (a fixed inline array), are never persisted across frames, and carry no
/// identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlStateSnapshot {
    values: [GlValue; GlParameter::ALL.len()],
}

impl GlStateSnapshot {
    /// Captures all parameters from `gl`.
    #[must_use]
    pub fn capture<G: GlContext + ?Sized>(gl: &G) -> Self {
        Self {
            values: GlParameter::ALL.map(|parameter| gl.get(parameter)),
        }
    }

    /// Returns the captured value for `parameter`.
    #[inline]
    #[must_use]
    pub fn get(&self, parameter: GlParameter) -> GlValue {
        self.values[parameter.index()]
    }

    /// Returns the keys whose values differ between `self` and `other`.
    pub fn diff<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = GlParameter> + 'a {
        GlParameter::ALL
            .into_iter()
            .filter(move |parameter| self.get(*parameter) != other.get(*parameter))
    }
}
