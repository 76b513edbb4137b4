// ABOUTME: Macro for closed-vocabulary string tags (statuses, intervals, roles)
// ABOUTME: Generates the enum, as_str/FromStr/Display and string serde impls from one table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

/// Declare a closed tag enum whose wire form is a fixed string per variant.
///
/// Generates:
/// - the enum with `Debug, Clone, Copy, PartialEq, Eq, Hash`
/// - `WIRE_NAMES` and `as_str()`
/// - `Display` and `FromStr` (error [`UnknownTag`](crate::errors::UnknownTag))
/// - `Serialize`/`Deserialize` as the wire string; an unrecognized string fails
///   with serde's "unknown variant" error and is never mapped to a default
///
/// ```rust
/// upcoach_core::wire_tag! {
///     /// Traffic light colour
///     pub enum Light {
///         /// Stop
///         Red => "red",
///         /// Go
///         Green => "green",
///     }
/// }
///
/// assert_eq!(Light::Red.as_str(), "red");
/// assert!("amber".parse::<Light>().is_err());
/// ```
#[macro_export]
macro_rules! wire_tag {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every accepted wire string, in declaration order
            pub const WIRE_NAMES: &'static [&'static str] = &[$($wire),+];

            /// Canonical wire string for this tag
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::errors::UnknownTag;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::errors::UnknownTag::new(stringify!($name), s)),
                }
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw: ::std::string::String =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                raw.parse::<Self>().map_err(|_| {
                    <D::Error as $crate::__private::serde::de::Error>::unknown_variant(
                        &raw,
                        Self::WIRE_NAMES,
                    )
                })
            }
        }
    };
}
