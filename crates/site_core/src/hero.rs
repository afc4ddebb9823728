/// Parallax gain: a full pointer sweep across the hero moves the cards
/// this far, so each axis stays within `±MAX_TILT / 2`.
pub const MAX_TILT: f32 = 4.0;

/// Offset for hero cards following the pointer: the pointer position
/// relative to the container center, scaled to `±MAX_TILT / 2`. Vertical
/// movement is inverted so cards lean towards the pointer.
pub fn hero_tilt(pointer: (f32, f32), origin: (f32, f32), size: (f32, f32)) -> (f32, f32) {
    let (width, height) = size;
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = ((pointer.0 - origin.0) / width - 0.5).clamp(-0.5, 0.5);
    let y = ((pointer.1 - origin.1) / height - 0.5).clamp(-0.5, 0.5);
    (x * MAX_TILT, y * -MAX_TILT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_means_no_tilt() {
        assert_eq!(hero_tilt((50.0, 50.0), (0.0, 0.0), (100.0, 100.0)), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_half_of_max_and_invert_vertical() {
        assert_eq!(hero_tilt((100.0, 100.0), (0.0, 0.0), (100.0, 100.0)), (2.0, -2.0));
        assert_eq!(hero_tilt((0.0, 0.0), (0.0, 0.0), (100.0, 100.0)), (-2.0, 2.0));
    }

    #[test]
    fn pointer_outside_is_clamped_and_degenerate_size_is_neutral() {
        assert_eq!(hero_tilt((900.0, 50.0), (0.0, 0.0), (100.0, 100.0)), (2.0, 0.0));
        assert_eq!(hero_tilt((10.0, 10.0), (0.0, 0.0), (0.0, 100.0)), (0.0, 0.0));
    }
}
