pub mod lsb_codec;
mod sample_buffer;
pub mod wav;

pub use lsb_codec::{LsbCodec, UsageReport};
pub use sample_buffer::{SampleBuffer, SampleWidth};
pub use wav::{read_wav, write_wav, WavAudio};
