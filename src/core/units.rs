/// Converts a level in decibels to a linear amplitude factor.
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    libm::powf(10.0, db / 20.0)
}

/// Converts a linear amplitude factor to decibels.
///
/// Zero and negative amplitudes map to negative infinity.
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        return f32::NEG_INFINITY;
    }
    20.0 * libm::log10f(linear)
}
