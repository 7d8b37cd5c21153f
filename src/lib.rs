pub mod convert;
pub mod decode;
pub mod errors;
pub mod logging;
pub mod resolve;
pub mod scan;

pub use convert::{convert_directory, convert_file, jpeg_sibling, JPEG_QUALITY};
pub use decode::HeifDecoder;
pub use errors::{Error, Result};
pub use resolve::resolve_directory;
pub use scan::{heic_files, is_heic};
