//! Strongly-typed source name wrapper.

use crate::name_type::name_type;

name_type! {
    /// Strongly-typed wrapper for source group names.
    pub struct SourceName;
}
