/// Width of the output frame in pixels (4K UHD).
pub const TARGET_WIDTH: u32 = 3840;
/// Height of the output frame in pixels (4K UHD).
pub const TARGET_HEIGHT: u32 = 2160;

/// Where a resampled bitmap lands on the output frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Bitmap is exactly frame-sized; use it as-is.
    Exact,
    /// Bitmap overhangs the frame; keep the sub-rectangle at `(left, top)`.
    Crop { left: u32, top: u32 },
    /// Bitmap undershoots the frame; paste it on a filled canvas at `(left, top)`.
    Pad { left: u32, top: u32 },
}

/// Scale and placement derived for one source bitmap, computed fresh per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitPlan {
    pub scale: f64,
    pub resized_w: u32,
    pub resized_h: u32,
    pub placement: Placement,
}

/// Pick the uniform scale that makes a `src_w` x `src_h` bitmap cover the
/// output frame, and classify where the scaled bitmap lands on it.
///
/// The binding dimension is the one whose scale exactly reaches the frame
/// edge; the other ends up equal or larger, so the result is center-cropped
/// rather than padded. Sources proportionally wider than the frame bind on
/// height, everything else (ties included) binds on width. Scaled dimensions
/// round half away from zero and are clamped so rounding can never leave the
/// binding dimension a pixel short.
pub fn plan_cover(src_w: u32, src_h: u32) -> FitPlan {
    let target_ratio = f64::from(TARGET_WIDTH) / f64::from(TARGET_HEIGHT);
    let source_ratio = if src_h == 0 {
        target_ratio
    } else {
        f64::from(src_w) / f64::from(src_h)
    };

    let scale = if source_ratio > target_ratio {
        f64::from(TARGET_HEIGHT) / f64::from(src_h)
    } else {
        f64::from(TARGET_WIDTH) / f64::from(src_w)
    };

    let resized_w = ((f64::from(src_w) * scale).round() as u32).max(TARGET_WIDTH);
    let resized_h = ((f64::from(src_h) * scale).round() as u32).max(TARGET_HEIGHT);

    FitPlan {
        scale,
        resized_w,
        resized_h,
        placement: placement_for(resized_w, resized_h),
    }
}

/// Classify resampled dimensions against the output frame.
///
/// Centering offsets truncate, so an odd pixel of excess is cut from the
/// right/bottom edge and an odd pixel of shortfall is left open on the
/// right/bottom edge.
pub fn placement_for(resized_w: u32, resized_h: u32) -> Placement {
    if resized_w == TARGET_WIDTH && resized_h == TARGET_HEIGHT {
        Placement::Exact
    } else if resized_w < TARGET_WIDTH || resized_h < TARGET_HEIGHT {
        Placement::Pad {
            left: TARGET_WIDTH.saturating_sub(resized_w) / 2,
            top: TARGET_HEIGHT.saturating_sub(resized_h) / 2,
        }
    } else {
        Placement::Crop {
            left: (resized_w - TARGET_WIDTH) / 2,
            top: (resized_h - TARGET_HEIGHT) / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ultrawide_binds_height_and_crops_width() {
        let plan = plan_cover(4000, 1000);
        assert!((plan.scale - 2.16).abs() < 1e-9);
        assert_eq!((plan.resized_w, plan.resized_h), (8640, 2160));
        assert_eq!(plan.placement, Placement::Crop { left: 2400, top: 0 });
    }

    #[test]
    fn tall_portrait_binds_width_and_crops_height() {
        let plan = plan_cover(1000, 4000);
        assert!((plan.scale - 3.84).abs() < 1e-9);
        assert_eq!((plan.resized_w, plan.resized_h), (3840, 15360));
        assert_eq!(plan.placement, Placement::Crop { left: 0, top: 6600 });
    }

    #[test]
    fn frame_sized_source_is_identity() {
        let plan = plan_cover(TARGET_WIDTH, TARGET_HEIGHT);
        assert_eq!(plan.scale, 1.0);
        assert_eq!(plan.placement, Placement::Exact);
    }

    #[test]
    fn matching_ratio_needs_no_crop() {
        let plan = plan_cover(1920, 1080);
        assert_eq!(plan.scale, 2.0);
        assert_eq!((plan.resized_w, plan.resized_h), (3840, 2160));
        assert_eq!(plan.placement, Placement::Exact);
    }

    #[test]
    fn scaled_bitmap_always_covers_the_frame() {
        let cases = [
            (1, 1),
            (1, 10_000),
            (10_000, 1),
            (123, 457),
            (3839, 2159),
            (3841, 2161),
            (7680, 4320),
            (641, 480),
        ];
        for (w, h) in cases {
            let plan = plan_cover(w, h);
            assert!(
                plan.resized_w >= TARGET_WIDTH && plan.resized_h >= TARGET_HEIGHT,
                "source {w}x{h} resized to {}x{}",
                plan.resized_w,
                plan.resized_h
            );
            assert!(!matches!(plan.placement, Placement::Pad { .. }));
        }
    }

    #[test]
    fn square_source_crops_vertically() {
        let plan = plan_cover(100, 100);
        assert_eq!((plan.resized_w, plan.resized_h), (3840, 3840));
        assert_eq!(plan.placement, Placement::Crop { left: 0, top: 840 });
    }

    #[test]
    fn odd_excess_truncates_toward_the_left() {
        assert_eq!(
            placement_for(3841, 2160),
            Placement::Crop { left: 0, top: 0 }
        );
        assert_eq!(
            placement_for(3843, 2161),
            Placement::Crop { left: 1, top: 0 }
        );
    }

    #[test]
    fn undersized_bitmap_pads_flush_left() {
        assert_eq!(placement_for(3839, 2160), Placement::Pad { left: 0, top: 0 });
        assert_eq!(
            placement_for(3840, 2158),
            Placement::Pad { left: 0, top: 1 }
        );
    }
}
