//! Macros to reduce boilerplate in the codebase

/// Macro to generate Display and FromStr implementations for enums
///
/// The `FromStr` side is case-insensitive and reports unknown input as
/// `BoardError::InvalidConfiguration` under the given key.
///
/// # Usage
///
/// ```rust,ignore
/// enum_display_fromstr!(
///     Grouping,
///     "grouping",
///     {
///         Status => "status",
///         User => "user",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display_fromstr {
    (
        $enum_name:ident,
        $key:expr,
        { $($variant:ident => $str:literal),+ $(,)? }
    ) => {
        impl $enum_name {
            /// All valid string representations of this enum.
            pub const ALL_STRINGS: &'static [&'static str] = &[$($str),+];

            /// Every variant, in declaration order.
            pub const VARIANTS: &'static [Self] = &[$($enum_name::$variant),+];

            /// The canonical string for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($enum_name::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::error::BoardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok($enum_name::$variant),)+
                    _ => Err($crate::error::BoardError::invalid_configuration(
                        $key,
                        s,
                        Self::ALL_STRINGS,
                    )),
                }
            }
        }
    };
}
