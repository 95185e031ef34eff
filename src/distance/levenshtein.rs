use crate::distance::matrix::DistanceMatrix;
use crate::error::Result;

/// Computes the Levenshtein (edit) distance between two symbol slices.
///
/// The Levenshtein distance is the minimum number of single-symbol edits
/// (insertions, deletions, substitutions) required to change `source` into
/// `target`. Works on any `PartialEq` symbol type; for plain strings see
/// [`levenshtein_str`].
///
/// # Examples
///
/// ```
/// use editdistance::levenshtein;
///
/// assert_eq!(levenshtein(&[1, 2, 3], &[1, 2, 3]), 0);
/// assert_eq!(levenshtein(b"kitten", b"sitting"), 3);
/// assert_eq!(levenshtein::<u8>(&[], b"abc"), 3);
/// ```
///
/// # Complexity
/// * Time: O(m * n) where m and n are the input lengths
/// * Space: O(n), two rolling rows
pub fn levenshtein<T: PartialEq>(source: &[T], target: &[T]) -> usize {
    // If either sequence is empty, distance is the length of the other.
    if source.is_empty() {
        return target.len();
    } else if target.is_empty() {
        return source.len();
    }

    let n = target.len();
    let mut prev_row = (0..=n).collect::<Vec<usize>>();
    let mut curr_row = vec![0; n + 1];

    for (i, s) in source.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, t) in target.iter().enumerate() {
            let cost = usize::from(s != t);

            // The recurrence relation:
            //   curr_row[j+1] = minimum of:
            //     1) prev_row[j+1] + 1   (deletion)
            //     2) curr_row[j] + 1     (insertion)
            //     3) prev_row[j] + cost  (substitution)
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }

        prev_row.copy_from_slice(&curr_row);
    }

    prev_row[n]
}

/// Computes the Levenshtein distance between two string slices.
///
/// Symbols are `char`s (Unicode scalar values), so multi-byte characters
/// count as single edits.
///
/// # Examples
///
/// ```
/// use editdistance::levenshtein_str;
///
/// assert_eq!(levenshtein_str("", ""), 0);
/// assert_eq!(levenshtein_str("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_str("flaw", "lawn"), 2);
/// ```
pub fn levenshtein_str(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    levenshtein(&a_chars, &b_chars)
}

/// Computes the full `(m + 1) x (n + 1)` distance matrix for `source` and
/// `target`, for callers that want to inspect or display the table.
///
/// The bottom-right cell equals [`levenshtein`] on the same inputs; building
/// the table never changes the scalar result. Presentation is the caller's
/// concern: [`DistanceMatrix`] implements `Display` as space-separated
/// integers, one row per line.
///
/// # Examples
///
/// ```
/// use editdistance::{levenshtein, levenshtein_matrix};
///
/// let m = levenshtein_matrix(b"flaw", b"lawn").unwrap();
/// assert_eq!(m.distance(), 2);
/// assert_eq!(m.distance(), levenshtein(b"flaw", b"lawn"));
/// assert_eq!(m.row(0), &[0, 1, 2, 3, 4]);
/// ```
///
/// # Complexity
/// * Time: O(m * n)
/// * Space: O(m * n), the full table is materialized
///
/// # Errors
/// * `InvalidInput` if the table's cell count would overflow `usize`.
///   Validation happens before any matrix work begins.
pub fn levenshtein_matrix<T: PartialEq>(source: &[T], target: &[T]) -> Result<DistanceMatrix> {
    let m = source.len();
    let n = target.len();
    let mut matrix = DistanceMatrix::zeroed(m + 1, n + 1)?;

    // Border: transforming a length-i prefix to empty costs i deletions,
    // and symmetrically for insertions from empty.
    for i in 0..=m {
        matrix.set(i, 0, i);
    }
    for j in 0..=n {
        matrix.set(0, j, j);
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(source[i - 1] != target[j - 1]);
            let value = (matrix.get(i - 1, j) + 1)
                .min(matrix.get(i, j - 1) + 1)
                .min(matrix.get(i - 1, j - 1) + cost);
            matrix.set(i, j, value);
        }
    }

    Ok(matrix)
}
