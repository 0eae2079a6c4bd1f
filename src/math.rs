/// Map a permutation of distinct values to its rank in lexicographic order,
/// i.e. a number in `0..n!` (the Lehmer code read as a factorial number).
pub fn map_permutation(perm: &[usize]) -> usize {
	let n = perm.len();
	let mut rank = 0;

	for (i, &p) in perm.iter().enumerate() {
		let smaller = perm[i + 1..].iter().filter(|&&q| q < p).count();
		rank = rank * (n - i) + smaller;
	}

	rank
}

pub const fn factorial(n: usize) -> usize {
	let mut out = 1;
	let mut i = 2;
	while i <= n {
		out *= i;
		i += 1;
	}
	out
}
