//! Strongly-typed name wrappers.
//!
//! Model and source names share one invariant (non-empty) and one small
//! trait surface, so both are generated from a single macro.

/// Define a non-empty string name type.
///
/// Generates `new()`/`try_new()`/`as_str()`, a `Deserialize` impl that
/// rejects empty strings, `Display`, `Deref<Target = str>`, `Borrow<str>`
/// for map lookups by `&str`, and equality against string slices.
macro_rules! name_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
        $vis struct $Name(String);

        impl $Name {
            /// Wrap a name, panicking on an empty string.
            ///
            /// Prefer [`try_new`](Self::try_new) when handling untrusted input.
            pub fn new(name: impl Into<String>) -> Self {
                Self::try_new(name).expect(concat!(stringify!($Name), " must not be empty"))
            }

            /// Wrap a name, returning `None` for the empty string.
            pub fn try_new(name: impl Into<String>) -> Option<Self> {
                let name = name.into();
                (!name.is_empty()).then(|| Self(name))
            }

            /// The underlying name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> serde::Deserialize<'de> for $Name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $Name::try_new(s).ok_or_else(|| {
                    serde::de::Error::custom(concat!(stringify!($Name), " must not be empty"))
                })
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::ops::Deref for $Name {
            type Target = str;
            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $Name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $Name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $Name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

pub(crate) use name_type;
