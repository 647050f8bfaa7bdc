use super::types::{Matte, Pixel, TargetColor, Tolerance, TRANSPARENT};
use rayon::prelude::*;

/// Buffers at least this large are swept in parallel
const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// Sum of absolute channel differences over R, G and B. Alpha is ignored.
///
/// Widened to `i128` so any `i64` target channel is exact.
#[inline]
pub fn color_distance(pixel: &Pixel, target: &TargetColor) -> i128 {
    let [r, g, b, _] = pixel.0;
    (r as i128 - target.r as i128).abs()
        + (g as i128 - target.g as i128).abs()
        + (b as i128 - target.b as i128).abs()
}

/// A pixel is background when its distance is strictly below the tolerance
#[inline]
pub fn is_background(pixel: &Pixel, target: &TargetColor, tolerance: Tolerance) -> bool {
    color_distance(pixel, target) < tolerance as i128
}

#[inline]
fn key_pixel(pixel: &Pixel, target: &TargetColor, tolerance: Tolerance) -> Pixel {
    if is_background(pixel, target, tolerance) {
        TRANSPARENT
    } else {
        *pixel
    }
}

/// Classify every pixel against the target color
pub fn classify(pixels: &[Pixel], target: TargetColor, tolerance: Tolerance) -> Matte {
    let _span = tracing::debug_span!("classify", pixels = pixels.len()).entered();

    let mask = if pixels.len() >= PARALLEL_PIXEL_THRESHOLD {
        pixels
            .par_iter()
            .map(|p| is_background(p, &target, tolerance))
            .collect()
    } else {
        pixels
            .iter()
            .map(|p| is_background(p, &target, tolerance))
            .collect()
    };

    Matte(mask)
}

/// Replace every pixel marked in the matte with [`TRANSPARENT`]; all
/// others are copied through untouched, alpha included.
///
/// # Panics
/// If `matte` and `pixels` differ in length.
pub fn composite(pixels: &[Pixel], matte: &Matte) -> Vec<Pixel> {
    assert_eq!(
        pixels.len(),
        matte.len(),
        "matte length mismatch: pixels={} matte={}",
        pixels.len(),
        matte.len()
    );

    let pick = |(p, &bg): (&Pixel, &bool)| if bg { TRANSPARENT } else { *p };

    if pixels.len() >= PARALLEL_PIXEL_THRESHOLD {
        pixels.par_iter().zip(matte.0.par_iter()).map(pick).collect()
    } else {
        pixels.iter().zip(matte.0.iter()).map(pick).collect()
    }
}

/// Single-pass color key: background pixels become [`TRANSPARENT`], the
/// rest pass through. Output has the same length and order as the input.
pub fn classify_and_composite(
    pixels: &[Pixel],
    target: TargetColor,
    tolerance: Tolerance,
) -> Vec<Pixel> {
    if pixels.len() >= PARALLEL_PIXEL_THRESHOLD {
        pixels
            .par_iter()
            .map(|p| key_pixel(p, &target, tolerance))
            .collect()
    } else {
        pixels
            .iter()
            .map(|p| key_pixel(p, &target, tolerance))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use pretty_assertions::assert_eq;

    const GREEN: TargetColor = TargetColor::GREEN;
    const TOL: Tolerance = 60;

    #[test]
    fn near_green_becomes_transparent() {
        let out = classify_and_composite(&[Rgba([10, 250, 5, 255])], GREEN, TOL);
        assert_eq!(out, vec![Rgba([255, 255, 255, 0])]);
    }

    #[test]
    fn far_pixel_passes_through() {
        let px = Rgba([200, 100, 50, 255]);
        assert_eq!(color_distance(&px, &GREEN), 405);
        assert_eq!(classify_and_composite(&[px], GREEN, TOL), vec![px]);
    }

    #[test]
    fn threshold_is_strict() {
        // distance 60: r=60
        let at = Rgba([60, 255, 0, 255]);
        // distance 59
        let below = Rgba([59, 255, 0, 255]);
        assert_eq!(color_distance(&at, &GREEN), 60);
        assert_eq!(color_distance(&below, &GREEN), 59);

        let out = classify_and_composite(&[at, below], GREEN, TOL);
        assert_eq!(out, vec![at, TRANSPARENT]);
    }

    #[test]
    fn alpha_does_not_affect_distance() {
        let opaque = Rgba([5, 240, 10, 255]);
        let faint = Rgba([5, 240, 10, 3]);
        assert_eq!(color_distance(&opaque, &GREEN), color_distance(&faint, &GREEN));

        let matte = classify(&[opaque, faint], GREEN, TOL);
        assert_eq!(matte, Matte(vec![true, true]));
    }

    #[test]
    fn pass_through_keeps_original_alpha() {
        let px = Rgba([255, 0, 0, 17]);
        assert_eq!(classify_and_composite(&[px], GREEN, TOL), vec![px]);
    }

    #[test]
    fn empty_buffer() {
        assert!(classify(&[], GREEN, TOL).is_empty());
        assert!(classify_and_composite(&[], GREEN, TOL).is_empty());
    }

    #[test]
    fn negative_tolerance_matches_nothing() {
        let exact = Rgba([0, 255, 0, 255]);
        assert_eq!(classify_and_composite(&[exact], GREEN, -5), vec![exact]);
        assert_eq!(classify_and_composite(&[exact], GREEN, 0), vec![exact]);
        assert_eq!(classify_and_composite(&[exact], GREEN, 1), vec![TRANSPARENT]);
    }

    #[test]
    fn out_of_range_target_is_not_clamped() {
        let target = TargetColor::new(300, 255, 0);
        let px = Rgba([255, 255, 0, 255]);
        assert_eq!(color_distance(&px, &target), 45);
        assert_eq!(classify_and_composite(&[px], target, TOL), vec![TRANSPARENT]);
    }

    #[test]
    fn extreme_target_channels_do_not_overflow() {
        let target = TargetColor::new(i64::MIN, i64::MAX, i64::MIN);
        let px = Rgba([255, 0, 255, 255]);
        assert!(color_distance(&px, &target) > i64::MAX as i128);
        assert_eq!(classify_and_composite(&[px], target, i64::MAX), vec![px]);

        let wide = TargetColor::new(99_999_999_999, 0, 0);
        assert_eq!(color_distance(&Rgba([0, 0, 0, 255]), &wide), 99_999_999_999);
    }

    #[test]
    fn reapplying_green_key_is_idempotent() {
        let input = vec![
            Rgba([10, 250, 5, 255]),
            Rgba([200, 100, 50, 255]),
            Rgba([0, 255, 0, 0]),
            Rgba([30, 200, 30, 128]),
        ];
        let once = classify_and_composite(&input, GREEN, TOL);
        let twice = classify_and_composite(&once, GREEN, TOL);
        assert_eq!(color_distance(&TRANSPARENT, &GREEN), 510);
        assert_eq!(once, twice);
    }

    #[test]
    fn reapplying_white_key_is_not_idempotent() {
        // The sentinel itself is white, so a near-white key sees it again.
        // The output is still the sentinel, but the matte changes.
        let white = TargetColor::new(255, 255, 255);
        let input = vec![Rgba([0, 0, 0, 255])];
        let once = classify_and_composite(&input, white, TOL);
        assert_eq!(once, input);
        let keyed = classify_and_composite(&[TRANSPARENT], white, TOL);
        assert_eq!(keyed, vec![TRANSPARENT]);
        assert_eq!(classify(&[TRANSPARENT], white, TOL), Matte(vec![true]));
    }

    #[test]
    fn fused_pass_matches_classify_then_composite() {
        let input: Vec<Pixel> = (0..=255u8)
            .map(|v| Rgba([v, 255 - v, v / 2, v]))
            .collect();
        let matte = classify(&input, GREEN, TOL);
        assert_eq!(
            composite(&input, &matte),
            classify_and_composite(&input, GREEN, TOL)
        );
    }

    #[test]
    fn parallel_sweep_preserves_order() {
        let len = PARALLEL_PIXEL_THRESHOLD * 2 + 7;
        let input: Vec<Pixel> = (0..len)
            .map(|i| {
                if i % 3 == 0 {
                    Rgba([0, 255, 0, 255])
                } else {
                    Rgba([(i % 251) as u8, (i % 97) as u8, 200, (i % 256) as u8])
                }
            })
            .collect();

        let out = classify_and_composite(&input, GREEN, TOL);
        assert_eq!(out.len(), input.len());
        for (i, (src, dst)) in input.iter().zip(&out).enumerate() {
            if i % 3 == 0 {
                assert_eq!(*dst, TRANSPARENT, "pixel {i}");
            } else {
                assert_eq!(dst, src, "pixel {i}");
            }
        }

        let matte = classify(&input, GREEN, TOL);
        assert_eq!(matte.background_count(), len.div_ceil(3));
        assert_eq!(composite(&input, &matte), out);
    }
}
