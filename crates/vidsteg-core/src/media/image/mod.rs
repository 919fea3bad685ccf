mod frame_dir;
pub mod frames;
mod iterators;
pub mod lsb_codec;
mod pixel_grid;

pub use frame_dir::{FrameDirectory, DEFAULT_FRAME_EXTENSION};
pub use frames::{decode_range, embed_range, FrameLoader, FrameSaver};
pub use lsb_codec::LsbCodec;
pub use pixel_grid::PixelGrid;
