/// BudgetLock system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the BPE encoding used for exact counts.
pub const ENCODING_NAME: &str = "cl100k_base";

/// Bytes per token assumed by the size-based estimate.
pub const FALLBACK_BYTES_PER_TOKEN: u64 = 4;

/// Filename suffix classified as documentation.
pub const DOCS_SUFFIX: &str = ".md";

/// Filename suffixes classified as source code.
pub const CODE_SUFFIXES: [&str; 5] = [".ts", ".js", ".py", ".jsx", ".tsx"];

/// Substring that marks a filename as a log (case-sensitive).
pub const LOGS_MARKER: &str = "log";

/// Special-token literals of `cl100k_base`. Text containing any of these is
/// refused by the encoder rather than tokenized as plain text.
pub const CL100K_SPECIAL_TOKENS: [&str; 5] = [
    "<|endoftext|>",
    "<|fim_prefix|>",
    "<|fim_middle|>",
    "<|fim_suffix|>",
    "<|endofprompt|>",
];

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "BUDGETLOCK_LOG";
