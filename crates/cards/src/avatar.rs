use cards_core::AvatarArtist;
use colored::{Color, Colorize};

const SPRITE_SIZE: usize = 5;

const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
];

/// Deterministic block-sprite avatar artist.
///
/// The login hashes to a bit pattern that fills the left half of a 5×5 grid;
/// the right half mirrors it, which is what makes the sprites read as little
/// characters. Same login, same sprite; different logins diverge with high
/// probability (one 64-bit hash drives both shape and color).
pub struct BlockArtist;

impl BlockArtist {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BlockArtist {
    fn default() -> Self {
        Self::new()
    }
}

/// FNV-1a, enough spread for a 15-bit sprite and a palette pick
fn fnv1a(seed: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in seed.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

impl AvatarArtist for BlockArtist {
    fn art_for(&self, seed: &str) -> Vec<String> {
        let hash = fnv1a(seed);
        let color = PALETTE[(hash >> 48) as usize % PALETTE.len()];

        (0..SPRITE_SIZE)
            .map(|row| {
                let mut cells = [false; SPRITE_SIZE];
                for col in 0..SPRITE_SIZE.div_ceil(2) {
                    let bit = row * SPRITE_SIZE.div_ceil(2) + col;
                    let on = (hash >> bit) & 1 == 1;
                    cells[col] = on;
                    cells[SPRITE_SIZE - 1 - col] = on;
                }
                cells
                    .iter()
                    .map(|&on| {
                        if on {
                            "██".color(color).to_string()
                        } else {
                            "  ".to_string()
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
