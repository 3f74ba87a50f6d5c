use crate::domain::model::AudioParams;

pub const TEMPO_RANGE: (f64, f64) = (60.0, 150.0);
pub const DENSITY_RANGE: (f64, f64) = (0.05, 0.95);
pub const BRIGHTNESS_RANGE: (f64, f64) = (0.0, 1.0);
pub const PAN_RANGE: (f64, f64) = (-1.0, 1.0);

fn clamp(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.clamp(lo, hi)
}

/// Map synonym/antonym counts to audio parameters.
///
/// Each parameter is a linear function of the two counts, clamped to its own
/// range. Synonyms push every parameter up, antonyms pull it down.
pub fn compute_params(syn_count: usize, ant_count: usize) -> AudioParams {
    let syn = syn_count as f64;
    let ant = ant_count as f64;

    let tempo = clamp((88.0 + 4.0 * syn - 3.0 * ant).round(), TEMPO_RANGE) as i32;
    let density = clamp(0.35 + 0.08 * syn - 0.06 * ant, DENSITY_RANGE);
    let brightness = clamp(0.40 + 0.12 * syn - 0.10 * ant, BRIGHTNESS_RANGE);
    let pan = clamp((syn - ant) / 6.0, PAN_RANGE);

    AudioParams {
        tempo,
        density,
        brightness,
        pan,
    }
}
