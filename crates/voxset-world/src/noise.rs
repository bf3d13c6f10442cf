use fastnoise_lite::{FastNoiseLite, NoiseType};

/// OpenSimplex2 source at unit frequency; callers scale coordinates themselves.
pub fn make_noise(seed: i32) -> FastNoiseLite {
    let mut n = FastNoiseLite::with_seed(seed);
    n.set_noise_type(Some(NoiseType::OpenSimplex2));
    n.set_frequency(Some(1.0));
    n
}

/// Fractal sum of 2D noise normalized by total amplitude; stays in `[-1, 1]`.
pub fn fbm(
    noise: &FastNoiseLite,
    x: f64,
    y: f64,
    frequency: f64,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
) -> f64 {
    let mut value = 0.0_f64;
    let mut amp = 1.0_f64;
    let mut total = 0.0_f64;
    let mut freq = frequency;
    for _ in 0..octaves.max(1) {
        value += amp * f64::from(noise.get_noise_2d((x * freq) as f32, (y * freq) as f32));
        total += amp;
        amp *= persistence;
        freq *= lacunarity;
    }
    if total > 0.0 { value / total } else { value }
}

#[inline]
pub fn to01(v: f64) -> f64 {
    ((v + 1.0) * 0.5).clamp(0.0, 1.0)
}
