use rand::rngs::StdRng;
use rand::Rng;

const ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];

/// One aligned row: residues with gap runs mixed in at roughly
/// `gap_fraction` of the positions.
pub fn random_aligned_row(
    rng: &mut StdRng,
    len: usize,
    gap_fraction: f64,
) -> String {
    let mut row = String::with_capacity(len);
    while row.chars().count() < len {
        if rng.gen_bool(gap_fraction) {
            let run = rng.gen_range(1..=4).min(len - row.chars().count());
            for _ in 0..run {
                row.push('-');
            }
        }
        else {
            row.push(ALPHABET[rng.gen_range(0..ALPHABET.len())]);
        }
    }
    row
}

/// A small alignment set: `rows` sequences sharing one length.
pub fn random_alignment(
    rng: &mut StdRng,
    rows: usize,
    len: usize,
) -> Vec<String> {
    (0..rows)
        .map(|_| random_aligned_row(rng, len, 0.2))
        .collect()
}

/// A random Newick string over `leaves` labeled tips.
///
/// Fragments are merged pairwise in random order, so shapes range from
/// ladders to balanced trees. Some internal nodes get labels, some get
/// branch lengths, mirroring real tree files.
pub fn random_newick(
    rng: &mut StdRng,
    leaves: usize,
) -> String {
    assert!(leaves >= 2);
    let mut fragments: Vec<String> =
        (0..leaves).map(|i| format!("t{}", i)).collect();
    let mut internal = 0usize;

    while fragments.len() > 1 {
        let a = fragments.swap_remove(rng.gen_range(0..fragments.len()));
        let b = fragments.swap_remove(rng.gen_range(0..fragments.len()));
        let label = if rng.gen_bool(0.3) {
            internal += 1;
            format!("n{}", internal)
        }
        else {
            String::new()
        };
        let merged = if rng.gen_bool(0.5) {
            format!("({}:0.{},{}:0.{}){}", a, rng.gen_range(1..9), b, rng.gen_range(1..9), label)
        }
        else {
            format!("({},{}){}", a, b, label)
        };
        fragments.push(merged);
    }

    let mut newick = fragments.pop().unwrap();
    newick.push(';');
    newick
}
