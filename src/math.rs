//! Small combinatorics helpers for the cube coordinates.

/// Binomial coefficient "n choose k", 0 if k > n.
pub fn c_nk(n: usize, k: usize) -> usize {
	if k > n {
		return 0;
	}
	let k = k.min(n - k);
	(0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Map a permutation to its rank in lexicographic order (Lehmer code).
/// Only the relative order of the values matters, the identity maps to 0.
pub fn map_permutation(perm: &[usize]) -> usize {
	let n = perm.len();
	let mut out = 0;
	for i in 0..n {
		let smaller = perm[i + 1..].iter().filter(|&&x| x < perm[i]).count();
		out = out * (n - i) + smaller;
	}
	out
}

/// The inverse of `map_permutation` for the values 0..n.
pub fn get_kth_perm(n: usize, k: usize) -> Vec<usize> {
	let mut digits = vec![0; n];
	let mut k = k;
	for i in (0..n).rev() {
		digits[i] = k % (n - i);
		k /= n - i;
	}

	let mut pool: Vec<usize> = (0..n).collect();
	digits.into_iter().map(|d| pool.remove(d)).collect()
}

/// Reorder `v` by the k-th permutation.
pub fn permute_vec<T>(v: Vec<T>, k: usize) -> Vec<T>
where
	T: Clone,
{
	get_kth_perm(v.len(), k)
		.into_iter()
		.map(|i| v[i].clone())
		.collect()
}

/// 0 for even permutations, 1 for odd ones.
pub fn permutation_parity(perm: &[usize]) -> usize {
	let mut inversions = 0;
	for i in 0..perm.len() {
		for j in (i + 1)..perm.len() {
			if perm[i] > perm[j] {
				inversions += 1;
			}
		}
	}
	inversions % 2
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn binomials() {
		assert_eq!(c_nk(12, 4), 495);
		assert_eq!(c_nk(4, 4), 1);
		assert_eq!(c_nk(3, 4), 0);
		assert_eq!(c_nk(11, 0), 1);
	}

	#[test]
	/// Every rank of a small permutation maps back to itself
	fn permutation_rank_inverse() {
		for k in 0..120 {
			let perm = get_kth_perm(5, k);
			assert_eq!(map_permutation(&perm), k);
		}
		assert_eq!(get_kth_perm(4, 0), vec![0, 1, 2, 3]);
		assert_eq!(get_kth_perm(4, 23), vec![3, 2, 1, 0]);
	}

	#[test]
	fn rank_uses_relative_order() {
		assert_eq!(map_permutation(&[8, 9, 10, 11]), 0);
		assert_eq!(map_permutation(&[9, 8, 10, 11]), map_permutation(&[1, 0, 2, 3]));
	}

	#[test]
	fn parity() {
		assert_eq!(permutation_parity(&[0, 1, 2, 3]), 0);
		assert_eq!(permutation_parity(&[1, 0, 2, 3]), 1);
		assert_eq!(permutation_parity(&[1, 2, 0, 3]), 0);
	}
}
