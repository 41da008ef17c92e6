//! Macro for implementing Display and FromStr for label enums
//!
//! Locales, log formats and error kinds all travel as short string labels
//! (config files, environment variables, JSON output). This macro keeps the
//! label table in one place and derives both directions from it.
//!
//! # Example
//!
//! ```rust
//! use gobarber_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shift {
//!     Morning,
//!     Afternoon,
//! }
//!
//! impl_label_conversions!(Shift {
//!     Morning => "morning",
//!     Afternoon => "afternoon",
//! });
//!
//! assert_eq!(Shift::Morning.to_string(), "morning");
//! assert_eq!("AFTERNOON".parse::<Shift>(), Ok(Shift::Afternoon));
//! ```

/// Implements Display and FromStr for enums with a fixed label per variant
///
/// - Display writes the label exactly as declared (e.g. `"pt-BR"`)
/// - FromStr matches labels ASCII case-insensitively and trims whitespace
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Stable string label for this variant.
            pub const fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let candidate = s.trim();
                $(
                    if candidate.eq_ignore_ascii_case($label) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
