//! SIMD-dispatched 8-bit swaps via `garb`.

use super::kernels::Permutation;

/// Run `perm` through garb when it has a matching byte kernel.
///
/// Returns `false` when the scalar path must handle it.
pub(super) fn permute_u8(src: &[u8], dst: &mut [u8], perm: Permutation) -> bool {
    let result = match perm {
        Permutation::SwapRgb => garb::bytes::rgb_to_bgr(src, dst),
        Permutation::SwapRgba => garb::bytes::rgba_to_bgra(src, dst),
        Permutation::RotateLeft | Permutation::RotateRight | Permutation::Reverse => {
            return false;
        }
    };
    result.is_ok()
}
