//! Generation options supplied by the surrounding CLI/config layer.

use std::fmt;

/// Identifier rewrite applied to every declared and referenced type name.
///
/// Applied consistently at declaration and reference sites, so a definition
/// and its usages always agree textually. Expected to be injective in
/// practice; the generator does not check for collisions.
pub type NameTransform = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Options controlling one generation run.
///
/// ```ignore
/// let options = GenOptions::new()
///     .enum_values(true)
///     .with_source(true)
///     .transform_name(transforms::pascal_case());
/// ```
pub struct GenOptions {
    transform_name: NameTransform,
    enum_values: bool,
    with_source: bool,
}

impl GenOptions {
    /// Creates options with identity naming, keys-as-primary enums and no
    /// source-path disclosure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier rewrite strategy.
    #[must_use]
    pub fn transform_name(mut self, transform: NameTransform) -> Self {
        self.transform_name = transform;
        self
    }

    /// Selects the values-as-primary enum naming policy.
    ///
    /// When enabled, the plain enum name carries the value union and the
    /// `Keys` companion carries the member names; when disabled (default)
    /// the plain name carries the key union and the `Values` companion the
    /// values.
    #[must_use]
    pub fn enum_values(mut self, enabled: bool) -> Self {
        self.enum_values = enabled;
        self
    }

    /// Embeds the resolved absolute source path in the generated header.
    #[must_use]
    pub fn with_source(mut self, enabled: bool) -> Self {
        self.with_source = enabled;
        self
    }

    /// Applies the configured transform to an identifier.
    #[must_use]
    pub fn apply_name(&self, name: &str) -> String {
        (self.transform_name)(name)
    }

    /// Returns true if the values-as-primary enum policy is active.
    #[must_use]
    pub const fn values_as_primary(&self) -> bool {
        self.enum_values
    }

    /// Returns true if the header should disclose the source path.
    #[must_use]
    pub const fn source_disclosed(&self) -> bool {
        self.with_source
    }
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            transform_name: Box::new(|name: &str| name.to_string()),
            enum_values: false,
            with_source: false,
        }
    }
}

impl fmt::Debug for GenOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenOptions")
            .field("transform_name", &"<fn>")
            .field("enum_values", &self.enum_values)
            .field("with_source", &self.with_source)
            .finish()
    }
}
