// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{CodeUnit, View};

impl<C: CodeUnit> View<'_, C> {
    /// Whether the view begins with `prefix`.
    ///
    /// True iff the view is at least as long as `prefix` and its leading
    /// units compare equal to it. Every view starts with the empty view.
    #[must_use]
    pub fn starts_with<'b>(&self, prefix: impl Into<View<'b, C>>) -> bool
    where
        C: 'b,
    {
        let prefix = prefix.into();

        self.len() >= prefix.len() && View::from_slice(&self.as_slice()[..prefix.len()]) == prefix
    }

    /// Whether the view begins with the single unit `unit`.
    #[must_use]
    pub fn starts_with_unit(&self, unit: C) -> bool {
        !self.is_empty() && <C as CodeUnit>::eq(self.front(), unit)
    }

    /// Whether the view ends with `suffix`.
    ///
    /// True iff the view is at least as long as `suffix` and its trailing
    /// units compare equal to it. Every view ends with the empty view.
    #[must_use]
    pub fn ends_with<'b>(&self, suffix: impl Into<View<'b, C>>) -> bool
    where
        C: 'b,
    {
        let suffix = suffix.into();

        self.len() >= suffix.len() && View::from_slice(&self.as_slice()[self.len() - suffix.len()..]) == suffix
    }

    /// Whether the view ends with the single unit `unit`.
    #[must_use]
    pub fn ends_with_unit(&self, unit: C) -> bool {
        !self.is_empty() && <C as CodeUnit>::eq(self.back(), unit)
    }
}
