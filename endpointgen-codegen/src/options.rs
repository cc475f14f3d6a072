//! Code generation options.

pub use endpointgen_model::DecodeModelOptions;

/// Options for generating Rust code from an endpoints model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeGenOptions {
    /// Options forwarded verbatim to the model decoder.
    pub decode_model_options: DecodeModelOptions,
    /// Disables generation of the service identifier constants.
    pub disable_generate_service_ids: bool,
}

impl CodeGenOptions {
    /// Creates options with every switch at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decoder options.
    #[must_use]
    pub fn decode_model_options(mut self, options: DecodeModelOptions) -> Self {
        self.decode_model_options = options;
        self
    }

    /// Sets whether service identifier constants are skipped.
    #[must_use]
    pub fn disable_generate_service_ids(mut self, disable: bool) -> Self {
        self.disable_generate_service_ids = disable;
        self
    }

    /// Applies option functions in order.
    pub fn set<I, F>(&mut self, fns: I)
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(&mut Self),
    {
        for f in fns {
            f(self);
        }
    }
}
