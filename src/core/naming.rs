/// Audio file extension of every generated asset.
pub const AUDIO_EXTENSION: &str = "mp3";

/// File name for the `index`-th (1-based) unique text, e.g. `uk_0001.mp3`.
///
/// Indices above 9999 keep all their digits.
pub fn asset_file_name(prefix: &str, index: usize) -> String {
    format!("{}_{:04}.{}", prefix, index, AUDIO_EXTENSION)
}
