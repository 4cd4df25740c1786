// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed identifiers.
//!
//! Identities are opaque integers handed out by the surrounding record
//! store. Wrapping each one in its own type keeps an assignment id from
//! being passed where a person id is expected.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw store identity.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw store identity.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{} {}", $label, self.0)
            }
        }
    };
}

define_id!(
    /// Identity of a person on the roster.
    PersonId,
    "person"
);
define_id!(
    /// Identity of a duty area.
    AreaId,
    "area"
);
define_id!(
    /// Identity of a scheduled duty date.
    ScheduleId,
    "schedule"
);
define_id!(
    /// Identity of one occupied slot.
    AssignmentId,
    "assignment"
);
define_id!(
    /// Identity of an exchange request between two assignments.
    TradeRequestId,
    "trade request"
);
