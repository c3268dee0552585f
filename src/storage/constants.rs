// Remote storage API defaults
pub const DEFAULT_ENDPOINT: &str = "https://storage.edgestore.dev";

// Request header carrying the access-key credential. Header names are
// case-insensitive; this is the lowercase wire form of "AccessKey".
pub const ACCESS_KEY_HEADER: &str = "accesskey";

// Detail used when a Bad Request body carries no usable message
pub const NO_ERROR_DETAIL: &str = "no error detail provided";
