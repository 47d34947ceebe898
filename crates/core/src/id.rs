//! Strongly-typed numeric identifiers.
//!
//! Identifiers are assigned by the caller when an entity is constructed and
//! never change afterwards. Each domain crate declares its own newtypes with
//! [`numeric_id!`](crate::numeric_id) so ids of different entities cannot be
//! mixed up.

/// Declare a `Copy` integer newtype usable as an [`Entity::Id`](crate::Entity::Id).
///
/// The backing type defaults to `u32`; write `struct Name(i32);` for ids that
/// may be negative. The generated type is `#[serde(transparent)]`, displays as
/// the bare number and parses from a (trimmed) decimal string, failing with
/// [`DomainError::InvalidId`](crate::DomainError::InvalidId).
///
/// The invoking crate must depend on `serde` with the `derive` feature.
#[macro_export]
macro_rules! numeric_id {
    ($(#[$meta:meta])* $vis:vis struct $t:ident;) => {
        $crate::numeric_id! {
            $(#[$meta])*
            $vis struct $t(u32);
        }
    };
    ($(#[$meta:meta])* $vis:vis struct $t:ident($repr:ty);) => {
        $(#[$meta])*
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $t($repr);

        impl $t {
            pub const fn new(value: $repr) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $repr {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$repr> for $t {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl From<$t> for $repr {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<$repr>().map(Self).map_err(|e| {
                    $crate::DomainError::invalid_id(format!(
                        "{}: {:?}: {}",
                        stringify!($t),
                        s,
                        e
                    ))
                })
            }
        }
    };
}
