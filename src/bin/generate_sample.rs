//! Writes a deterministic synthetic sunspot file in the SILSO
//! `SN_m_tot_V2.0.csv` layout, for trying the dashboard without the
//! real dataset. A handful of early rows carry the `-1` sentinel the
//! loader is expected to drop.

use std::io::Write;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Mean monthly sunspot number for a year fraction: an 11-year sinusoidal
/// cycle riding on a base level, clamped at zero.
fn cycle_mean(yr_fraction: f64) -> f64 {
    let phase = (yr_fraction / 11.0) * 2.0 * std::f64::consts::PI;
    (80.0 + 75.0 * phase.sin()).max(0.0)
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_sunspots.csv".to_string());
    let mut file = std::fs::File::create(&output_path).expect("Failed to create output file");

    let mut rows = 0usize;
    for year in 1749..=2024 {
        for month in 1..=12 {
            // SILSO places each month at its mid-point.
            let yr_fraction = year as f64 + (month as f64 - 0.5) / 12.0;

            // Sparse early record: mark ~5% of the first decades invalid.
            let missing = year < 1780 && rng.next_f64() < 0.05;

            let (mean, std_dev, num_obs) = if missing {
                (-1.0, -1.0, -1i64)
            } else {
                let mean = (cycle_mean(yr_fraction) + rng.gauss(0.0, 12.0)).max(0.0);
                let std_dev = 5.0 + rng.next_f64() * 10.0;
                let num_obs = 20 + (rng.next_u64() % 300) as i64;
                (mean, std_dev, num_obs)
            };

            let definitive = i64::from(year < 2023);
            writeln!(
                file,
                "{year};{month:2}; {yr_fraction:.3}; {mean:5.1}; {std_dev:4.1}; {num_obs}; {definitive}"
            )
            .expect("Failed to write row");
            rows += 1;
        }
    }

    println!("Wrote {rows} monthly records to {output_path}");
}
