//! Gain and amplitude modulation primitives.

/*
Amplitude Modulation
====================

Multiplying one signal by another, sample by sample, is amplitude
modulation. What we hear depends on how we shape the modulator first.

Vocabulary
----------

  carrier       The signal being shaped. Here: oscillator 0.

  modulator     The signal doing the shaping. Here: oscillator 1.

  bipolar       Swings positive AND negative: [-1.0, +1.0]. What an
                oscillator produces from a centred table.

  unipolar      Only positive: [0.0, 1.0]. What a volume control wants.

  ring mod      carrier × modulator with a BIPOLAR modulator. The carrier
                flips polarity on every negative half-cycle.

  AM            carrier × unipolar(modulator). The modulator acts as a
                non-inverting envelope: it only ever turns the carrier down.


Bipolar to Unipolar
-------------------

    unipolar = bipolar × 0.5 + 0.5

    bipolar   unipolar   carrier passes
    -1.0      0.0        silenced (trough)
     0.0      0.5        half level
    +1.0      1.0        unchanged (peak)

At audio rates the envelope is too fast to hear as tremolo; instead it adds
sidebands at carrier ± modulator frequency while keeping the carrier itself.


Decibels
--------

    gain = 10^(dB / 20)

    0 dB  → ×1.0 (unity)
   -6 dB  → ×0.501
  -20 dB  → ×0.1
  -60 dB  → ×0.001 (barely audible)
*/

/// Convert a level in decibels to a linear gain factor.
#[inline]
pub fn db_to_gain(db: f32) -> f32 {
    10.0_f32.powf(db / 20.0)
}

/// Rescale a bipolar modulator sample into a `[0, 1]` envelope.
#[inline]
pub fn unipolar(modulator: f32) -> f32 {
    modulator * 0.5 + 0.5
}

/// Unipolar amplitude modulation: `carrier × (modulator × 0.5 + 0.5)`.
#[inline]
pub fn amplitude_modulate(carrier: f32, modulator: f32) -> f32 {
    carrier * unipolar(modulator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_reference_points() {
        assert!((db_to_gain(0.0) - 1.0).abs() < 1e-6);
        assert!((db_to_gain(-20.0) - 0.1).abs() < 1e-6);
        assert!((db_to_gain(-6.0) - 0.501_187).abs() < 1e-5);
        assert!((db_to_gain(-60.0) - 0.001).abs() < 1e-7);
    }

    #[test]
    fn modulator_peak_passes_carrier() {
        assert_eq!(amplitude_modulate(0.8, 1.0), 0.8);
        assert_eq!(amplitude_modulate(-0.3, 1.0), -0.3);
    }

    #[test]
    fn modulator_trough_silences_carrier() {
        assert_eq!(amplitude_modulate(0.8, -1.0), 0.0);
        assert_eq!(amplitude_modulate(-1.0, -1.0), 0.0);
    }

    #[test]
    fn modulator_centre_halves_carrier() {
        assert_eq!(amplitude_modulate(0.8, 0.0), 0.4);
    }

    #[test]
    fn envelope_never_inverts() {
        for i in 0..=20 {
            let m = i as f32 / 10.0 - 1.0;
            let env = unipolar(m);
            assert!((0.0..=1.0).contains(&env), "unipolar({m}) = {env}");
        }
    }
}
