// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Pending invalidation state consumed by a paint pass.
    ///
    /// Requests OR-merge into this set, so several requests before one paint
    /// coalesce into a single recompute that re-binds data if any of them asked
    /// for it.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InvalidationFlags: u8 {
        /// The model must be recomputed before the next paint.
        const MODEL = 0b0000_0001;
        /// The recompute must also re-bind the model's data.
        const DATA  = 0b0000_0010;
    }
}

impl InvalidationFlags {
    /// Flags for one request.
    ///
    /// ```
    /// use plotview_invalidate::InvalidationFlags;
    ///
    /// assert_eq!(InvalidationFlags::request(false), InvalidationFlags::MODEL);
    /// assert!(InvalidationFlags::request(true).update_data());
    /// ```
    #[must_use]
    pub fn request(update_data: bool) -> Self {
        if update_data {
            Self::MODEL | Self::DATA
        } else {
            Self::MODEL
        }
    }

    /// Whether the model has to be recomputed.
    #[must_use]
    pub fn needs_recompute(self) -> bool {
        self.contains(Self::MODEL)
    }

    /// Whether the recompute has to re-bind data.
    ///
    /// Only reported together with [`InvalidationFlags::MODEL`].
    #[must_use]
    pub fn update_data(self) -> bool {
        self.contains(Self::MODEL | Self::DATA)
    }
}
