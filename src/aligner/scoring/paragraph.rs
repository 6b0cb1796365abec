use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::ScoringStrategy;

/// Structural element of a text: a paragraph or a sentence, optionally carrying an identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TextElement<I = String> {
    Paragraph { id: Option<I> },
    Sentence { id: Option<I> },
    Gap,
}

impl<I> TextElement<I> {
    pub fn paragraph(id: impl Into<Option<I>>) -> Self {
        Self::Paragraph { id: id.into() }
    }

    pub fn sentence(id: impl Into<Option<I>>) -> Self {
        Self::Sentence { id: id.into() }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }
}

impl<I> Display for TextElement<I>
where
    I: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (kind, id) = match self {
            Self::Paragraph { id } => ("p", id),
            Self::Sentence { id } => ("s", id),
            Self::Gap => return f.pad("gap"),
        };

        match id {
            Some(id) => f.pad(&format!("{kind}/{id}")),
            None => f.pad(&format!("{kind}/-")),
        }
    }
}

/// Align paragraphs and sentences, prioritizing paragraph structure over sentences.
///
/// ```text
///         p/1   p/2   p/-   s/a   s/b   s/-
///  p/1    25    -25   -25   -250  -250  -250
///  p/2          25    -25   -250  -250  -250
///  p/-                25    -250  -250  -250
///  s/a                      10    -10   -10
///  s/b                            10    -10
///  s/-                                  10
/// ```
///
/// Elements of different kinds always receive the kind mismatch score, which dominates any
/// difference in identifiers. Gap markers are scored as a kind mismatch against anything.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParagraphSentenceScoring;

impl ParagraphSentenceScoring {
    pub const PARAGRAPH_MATCH: i32 = 25;
    pub const PARAGRAPH_MISMATCH: i32 = -25;
    pub const SENTENCE_MATCH: i32 = 10;
    pub const SENTENCE_MISMATCH: i32 = -10;
    pub const KIND_MISMATCH: i32 = -250;
    pub const GAP_PENALTY: i32 = -10;
}

impl<I> ScoringStrategy<TextElement<I>> for ParagraphSentenceScoring
where
    I: PartialEq,
{
    type Score = i32;

    fn score(&self, left: &TextElement<I>, top: &TextElement<I>) -> i32 {
        match (left, top) {
            (TextElement::Paragraph { id: l }, TextElement::Paragraph { id: t }) => if l == t {
                Self::PARAGRAPH_MATCH
            } else {
                Self::PARAGRAPH_MISMATCH
            },
            (TextElement::Sentence { id: l }, TextElement::Sentence { id: t }) => if l == t {
                Self::SENTENCE_MATCH
            } else {
                Self::SENTENCE_MISMATCH
            },
            _ => Self::KIND_MISMATCH,
        }
    }

    #[inline(always)]
    fn gap_penalty(&self) -> i32 {
        Self::GAP_PENALTY
    }

    #[inline(always)]
    fn gap_marker(&self) -> TextElement<I> {
        TextElement::Gap
    }
}

#[cfg(test)]
mod tests {
    use crate::aligner::scoring::ScoringStrategy;

    use super::{ParagraphSentenceScoring, TextElement};

    type E = TextElement<&'static str>;

    fn p(id: Option<&'static str>) -> E {
        TextElement::paragraph(id)
    }

    fn s(id: Option<&'static str>) -> E {
        TextElement::sentence(id)
    }

    #[test]
    fn test_score_table() {
        let scoring = ParagraphSentenceScoring;
        let cases = [
            (p(Some("1")), p(Some("1")), 25),
            (p(Some("1")), p(Some("2")), -25),
            (p(Some("1")), p(None), -25),
            (p(Some("1")), s(Some("a")), -250),
            (p(Some("1")), s(Some("b")), -250),
            (p(Some("1")), s(None), -250),
            (p(Some("2")), p(Some("2")), 25),
            (p(Some("2")), p(None), -25),
            (p(Some("2")), s(Some("a")), -250),
            (p(Some("2")), s(None), -250),
            (p(None), p(None), 25),
            (p(None), s(Some("a")), -250),
            (p(None), s(None), -250),
            (s(Some("a")), s(Some("a")), 10),
            (s(Some("a")), s(Some("b")), -10),
            (s(Some("a")), s(None), -10),
            (s(Some("b")), s(Some("b")), 10),
            (s(Some("b")), s(None), -10),
            (s(None), s(None), 10),
        ];

        for (left, top, expected) in cases {
            assert_eq!(scoring.score(&left, &top), expected, "{left:?} vs {top:?}");
            assert_eq!(scoring.score(&top, &left), expected, "{top:?} vs {left:?}");
        }
    }

    #[test]
    fn test_gap() {
        let scoring = ParagraphSentenceScoring;
        let gap: E = scoring.gap_marker();

        assert!(gap.is_gap());
        assert_eq!(ScoringStrategy::<E>::gap_penalty(&scoring), -10);
        assert_eq!(scoring.score(&gap, &s(None)), -250);
    }

    #[test]
    fn test_display_and_json() {
        assert_eq!(p(Some("1")).to_string(), "p/1");
        assert_eq!(format!("{:<5}|", s(None)), "s/-  |");
        assert_eq!(E::Gap.to_string(), "gap");

        let json = serde_json::to_string(&[p(Some("1")), s(None), E::Gap]).unwrap();
        assert_eq!(json, r#"[{"type":"paragraph","id":"1"},{"type":"sentence","id":null},{"type":"gap"}]"#);
    }
}
