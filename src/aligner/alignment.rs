use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An aligned pair of sequence positions. The first element is the position in the left
/// sequence, the second element the position in the top sequence.
///
/// In case of an insertion or deletion, one of the elements is `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlignedPair {
    /// Left sequence position
    pub lpos: Option<usize>,

    /// Top sequence position
    pub tpos: Option<usize>,
}

impl AlignedPair {
    pub fn new(lpos: Option<usize>, tpos: Option<usize>) -> Self {
        Self { lpos, tpos }
    }

    pub fn is_aligned(&self) -> bool {
        matches!((self.lpos, self.tpos), (Some(_), Some(_)))
    }

    pub fn is_indel(&self) -> bool {
        !self.is_aligned()
    }

    /// The top element has no counterpart in the left sequence
    pub fn is_insertion(&self) -> bool {
        self.lpos.is_none()
    }

    /// The left element has no counterpart in the top sequence
    pub fn is_deletion(&self) -> bool {
        self.tpos.is_none()
    }
}

/// The optimal global alignment of two sequences.
///
/// `aligned_left` and `aligned_top` always have the same length as `pairs`. Gaps are filled in
/// with the gap marker of the scoring strategy that produced the alignment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Alignment<E, S> {
    score: S,
    pairs: Vec<AlignedPair>,
    aligned_left: Vec<E>,
    aligned_top: Vec<E>,
}

impl<'de, E, S> Deserialize<'de> for Alignment<E, S>
where
    E: Deserialize<'de>,
    S: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Fields<E, S> {
            score: S,
            pairs: Vec<AlignedPair>,
            aligned_left: Vec<E>,
            aligned_top: Vec<E>,
        }

        let Fields { score, pairs, aligned_left, aligned_top } = Fields::deserialize(deserializer)?;
        if aligned_left.len() != pairs.len() || aligned_top.len() != pairs.len() {
            return Err(D::Error::custom(format!(
                "aligned sequences of length {} and {} don't match the {} aligned pairs",
                aligned_left.len(), aligned_top.len(), pairs.len()
            )));
        }

        Ok(Self { score, pairs, aligned_left, aligned_top })
    }
}

impl<E, S> Alignment<E, S>
where
    S: Copy,
{
    /// Materialize the aligned sequences from a list of aligned pairs
    pub(crate) fn from_pairs(left: &[E], top: &[E], pairs: Vec<AlignedPair>, score: S, gap_marker: &E) -> Self
    where
        E: Clone,
    {
        let element = |seq: &[E], pos: Option<usize>| match pos {
            Some(p) => seq[p].clone(),
            None => gap_marker.clone(),
        };

        let aligned_left = pairs.iter().map(|pair| element(left, pair.lpos)).collect();
        let aligned_top = pairs.iter().map(|pair| element(top, pair.tpos)).collect();

        Self { score, pairs, aligned_left, aligned_top }
    }

    /// Score of the optimal alignment, i.e., the value of the bottom-right cell of the score matrix
    pub fn score(&self) -> S {
        self.score
    }

    pub fn pairs(&self) -> &[AlignedPair] {
        &self.pairs
    }

    pub fn aligned_left(&self) -> &[E] {
        &self.aligned_left
    }

    pub fn aligned_top(&self) -> &[E] {
        &self.aligned_top
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of pairs where both sequences contribute an element
    pub fn num_aligned(&self) -> usize {
        self.pairs.iter().filter(|pair| pair.is_aligned()).count()
    }

    pub fn num_indels(&self) -> usize {
        self.len() - self.num_aligned()
    }

    pub fn into_sequences(self) -> (Vec<E>, Vec<E>) {
        (self.aligned_left, self.aligned_top)
    }
}

#[cfg(test)]
mod tests {
    use super::{AlignedPair, Alignment};

    #[test]
    fn test_aligned_pair_kinds() {
        let matched = AlignedPair::new(Some(1), Some(2));
        let ins = AlignedPair::new(None, Some(0));
        let del = AlignedPair::new(Some(0), None);

        assert!(matched.is_aligned());
        assert!(!matched.is_indel());
        assert!(ins.is_indel() && ins.is_insertion() && !ins.is_deletion());
        assert!(del.is_indel() && del.is_deletion() && !del.is_insertion());
    }

    #[test]
    fn test_from_pairs() {
        let left = ['a', 'b'];
        let top = ['b', 'c'];
        let pairs = vec![
            AlignedPair::new(Some(0), None),
            AlignedPair::new(Some(1), Some(0)),
            AlignedPair::new(None, Some(1)),
        ];

        let aln = Alignment::from_pairs(&left, &top, pairs, -1, &'-');
        assert_eq!(aln.score(), -1);
        assert_eq!(aln.len(), 3);
        assert_eq!(aln.num_aligned(), 1);
        assert_eq!(aln.num_indels(), 2);
        assert_eq!(aln.aligned_left(), &['a', 'b', '-']);
        assert_eq!(aln.aligned_top(), &['-', 'b', 'c']);

        let (l, t) = aln.into_sequences();
        assert_eq!(l, vec!['a', 'b', '-']);
        assert_eq!(t, vec!['-', 'b', 'c']);
    }

    #[test]
    fn test_serialize_json() {
        let aln = Alignment::from_pairs(&[Some(1)], &[], vec![AlignedPair::new(Some(0), None)], -1, &None);
        let json = serde_json::to_string(&aln).unwrap();

        assert_eq!(
            json,
            r#"{"score":-1,"pairs":[{"lpos":0,"tpos":null}],"aligned_left":[1],"aligned_top":[null]}"#
        );
    }

    #[test]
    fn test_deserialize_json() {
        let json = r#"{"score":-1,"pairs":[{"lpos":0,"tpos":null}],"aligned_left":[1],"aligned_top":[null]}"#;
        let aln: Alignment<Option<i32>, i32> = serde_json::from_str(json).unwrap();

        assert_eq!(aln.score(), -1);
        assert_eq!(aln.aligned_left(), &[Some(1)]);
        assert_eq!(aln.aligned_top(), &[None::<i32>]);
    }

    #[test]
    fn test_deserialize_length_mismatch() {
        let json = r#"{"score":0,"pairs":[],"aligned_left":[2],"aligned_top":[2]}"#;
        let result = serde_json::from_str::<Alignment<Option<i32>, i32>>(json);

        assert!(result.is_err());
    }
}
