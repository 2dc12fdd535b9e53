/// Options for [`encode_with`][crate::encode_with].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Emit indented, multi-line JSON.
    pub pretty: bool,
    /// Emit object keys in lexicographic order.
    pub sort_keys: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            sort_keys: cfg!(feature = "sort_keys"),
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SerializeCfg {
    pub sort_map_keys: bool,
}

impl Default for SerializeCfg {
    fn default() -> Self {
        Self {
            sort_map_keys: cfg!(feature = "sort_keys"),
        }
    }
}

impl From<EncodeOptions> for SerializeCfg {
    fn from(opts: EncodeOptions) -> Self {
        Self {
            sort_map_keys: opts.sort_keys,
        }
    }
}
