use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegError {
    /// Represents a parameter out of its allowed range. For example 9 bits per sample or a frame range that ends before it starts
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Represents an audio sample width that is neither 8 nor 16 bits
    #[error("Audio sample width of {0} bits is not supported, only 8 and 16 bits are")]
    UnsupportedFormat(u16),

    /// Represents a payload that does not fit into the audio carrier at the chosen bit depth
    #[error(
        "Capacity Error: the payload of {payload_size} B exceeds the capacity of {capacity} B, it requires {required_bits_per_sample} LSBs per sample"
    )]
    CapacityExceeded {
        payload_size: usize,
        capacity: usize,
        required_bits_per_sample: usize,
    },

    /// Represents a payload chunk that does not fit into the pixels of its frame
    #[error(
        "Capacity Error: frame {index} can hold {capacity} B but a chunk of {chunk_size} B was assigned to it"
    )]
    FrameCapacityExceeded {
        index: u32,
        chunk_size: usize,
        capacity: usize,
    },

    /// Represents an extraction asking for more data than the carrier could have encoded
    #[error("Cannot recover {requested} B, the carrier holds at most {available} B")]
    InsufficientCarrierData { requested: usize, available: usize },

    /// Represents a frame index without a frame behind it
    #[error("Frame {0} is missing")]
    MissingFrame(u32),

    /// Represents a frame with too few pixels to carry a single character
    #[error("Frame {index} has {pixels} pixels, at least 9 are needed")]
    FrameTooSmall { index: u32, pixels: usize },

    /// Represents an invalid carrier audio media. For example, a broken WAV file
    #[error("Audio media is invalid")]
    InvalidAudioMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an audio file.
    #[error("Audio encoding error")]
    AudioEncodingError,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
