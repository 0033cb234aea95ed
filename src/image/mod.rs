//! Raster access for binary masks: borrowed views, an owned mask, and file
//! I/O helpers used by the command-line tool.
pub mod io;
pub mod mask;
pub mod traits;
pub mod u8;

pub use self::mask::Mask;
pub use self::traits::{BinaryView, ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
