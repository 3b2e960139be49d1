#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::{
    _mm256_add_pd, _mm256_set_pd, _mm256_setzero_pd, _mm256_sqrt_pd, _mm256_storeu_pd,
};

use crate::processor::{LETTER_COUNT, LetterStats};

#[inline(always)]
fn count_letter(histogram: &mut [u64; LETTER_COUNT], b: u8) {
    if b.is_ascii_alphabetic() {
        histogram[(b.to_ascii_lowercase() - b'a') as usize] += 1;
    }
}

/// Single pass over `bytes`: letter histogram plus sum of `sqrt(byte)`
///
/// Uses AVX2 for the square roots when available, scalar otherwise.
pub fn scan_bytes(bytes: &[u8]) -> LetterStats {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            return unsafe { scan_bytes_avx2(bytes) };
        }
    }
    scan_bytes_scalar(bytes)
}

pub(crate) fn scan_bytes_scalar(bytes: &[u8]) -> LetterStats {
    let mut stats = LetterStats::default();
    for &b in bytes {
        stats.sqrt_sum += (b as f64).sqrt();
        count_letter(&mut stats.histogram, b);
    }
    stats
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn scan_bytes_avx2(bytes: &[u8]) -> LetterStats {
    const LANES: usize = 4; // __m256d holds 4 f64s
    let mut stats = LetterStats::default();
    let mut sum = _mm256_setzero_pd();

    let chunks = bytes.chunks_exact(LANES);
    let remainder = chunks.remainder();

    for chunk in chunks {
        for &b in chunk {
            count_letter(&mut stats.histogram, b);
        }
        let v = _mm256_set_pd(
            chunk[3] as f64,
            chunk[2] as f64,
            chunk[1] as f64,
            chunk[0] as f64,
        );
        sum = _mm256_add_pd(sum, _mm256_sqrt_pd(v));
    }

    // horizontal reduction
    let mut sum_arr = [0f64; LANES];
    unsafe { _mm256_storeu_pd(sum_arr.as_mut_ptr(), sum) };
    stats.sqrt_sum = sum_arr.iter().sum();

    for &b in remainder {
        stats.sqrt_sum += (b as f64).sqrt();
        count_letter(&mut stats.histogram, b);
    }

    stats
}
