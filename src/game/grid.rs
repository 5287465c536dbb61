use rand::Rng;

use crate::utils::letters::get_cumulative_distribution;

pub struct GridGenerator;

impl GridGenerator {
    /// Generate flat row-major grid content with weighted letter distribution
    pub fn generate(width: usize, height: usize) -> String {
        let mut rng = rand::rng();
        let cumulative_dist = get_cumulative_distribution();
        let total = cumulative_dist.last().unwrap().1;

        (0..width * height)
            .map(|_| Self::random_letter(&cumulative_dist, total, &mut rng))
            .collect()
    }

    fn random_letter(cumulative_dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
        let random_value = rng.random::<f32>() * total;

        for (letter, cumulative) in cumulative_dist {
            if random_value <= *cumulative {
                return *letter;
            }
        }

        'E' // Fallback
    }
}
