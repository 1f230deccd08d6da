//! epdgen: convert photographic images into 6-color e-paper byte arrays.
//!
//! The heavy lifting (palette quantization, Floyd-Steinberg dithering,
//! device-code encoding, C array serialization) lives in the `epd-quant`
//! crate. This crate supplies the surrounding plumbing: image decoding,
//! geometry fitting for the 800x480 panel, file output, and the two CLI
//! binaries (`epdgen` for native-resolution conversion, `epdframe` for
//! fit-to-panel conversion).

pub mod error;
pub mod fit;
pub mod loader;
pub mod pipeline;

pub use error::ConvertError;

/// Initialize minimal CLI logging.
///
/// Filter comes from `RUST_LOG` when set, otherwise warnings only.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "epdgen=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}
