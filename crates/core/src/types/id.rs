//! Newtype IDs for type-safe entity references.
//!
//! Catalog and logistics identifiers are human-readable slugs assigned by
//! upstream systems (e.g. `panther-core`, `PKR123456`), so the wrappers are
//! string-backed. Use the `define_id!` macro to create new ID types that
//! cannot be mixed up with each other.

/// Macro to define a type-safe, string-backed ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use panther_core::define_id;
/// define_id!(ProductId);
/// define_id!(ShipmentId);
///
/// let product_id = ProductId::new("panther-core");
/// let shipment_id = ShipmentId::new("PKR123456");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = shipment_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl ::core::convert::Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying value as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::convert::From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl ::core::convert::From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl ::core::convert::From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(ShipmentId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_inner() {
        let id = ProductId::new("panther-core");
        assert_eq!(format!("{id}"), "panther-core");
        assert_eq!(id.as_str(), "panther-core");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("panther-elite");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"panther-elite\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_from_conversions() {
        let a: ProductId = "panther-extreme".into();
        let b = ProductId::new(String::from("panther-extreme"));
        assert_eq!(a, b);
        assert_eq!(String::from(a), "panther-extreme");
    }
}
