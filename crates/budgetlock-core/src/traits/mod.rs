pub mod raw_file;
pub mod tokenizer;

pub use raw_file::IRawFile;
pub use tokenizer::ITokenizer;
