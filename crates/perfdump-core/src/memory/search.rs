//! Byte-string search inside loaded images.

use memchr::memmem;

use super::BinaryImage;

/// Find every offset where `needle` occurs in the image.
///
/// Matches do not overlap; the scan resumes after the end of each match.
/// An empty needle matches nothing.
pub fn find_ascii(image: &BinaryImage, needle: &[u8]) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    memmem::find_iter(image.bytes(), needle).collect()
}
