use super::{Combined, Group};

/// A token (or a run of tokens) no grammar recognized, kept verbatim.
///
/// Consecutive plain-text groups coalesce into one, joined with single
/// spaces, which is how free-text remarks survive parsing in one piece.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlainTextGroup {
    /// The raw text
    pub text: String,
}

/// On par with the longest recognizable group form.
const TEXT_MAX_LENGTH: usize = 83;

impl PlainTextGroup {
    pub(crate) fn new(text: &str) -> Self {
        PlainTextGroup {
            text: text.to_string(),
        }
    }

    pub(crate) fn from_token(token: &str) -> Option<Self> {
        if token.len() > TEXT_MAX_LENGTH {
            return None;
        }
        Some(Self::new(token))
    }

    pub(crate) fn combine(&self, next: &Group) -> Combined {
        let Group::PlainText(next) = next else {
            return Combined::Not;
        };
        if self.text.len() + next.text.len() + 1 > TEXT_MAX_LENGTH {
            return Combined::Not;
        }
        let mut merged = self.clone();
        merged.text.push(' ');
        merged.text.push_str(&next.text);
        Combined::Replaced(Group::PlainText(merged))
    }

    /// Plain text is valid whenever it is non-empty.
    pub fn is_valid(&self) -> bool {
        !self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalescing() {
        let a = PlainTextGroup::from_token("SMOKE").unwrap();
        let b = PlainTextGroup::from_token("TO").unwrap();
        let Combined::Replaced(Group::PlainText(ab)) = a.combine(&Group::PlainText(b)) else {
            panic!("plain text did not coalesce");
        };
        assert_eq!(ab.text, "SMOKE TO");
    }

    #[test]
    fn test_length_cap() {
        let a = PlainTextGroup::from_token(&"A".repeat(60)).unwrap();
        let b = PlainTextGroup::new(&"B".repeat(30));
        assert_eq!(a.combine(&Group::PlainText(b)), Combined::Not);
        assert_eq!(PlainTextGroup::from_token(&"A".repeat(84)), None);
    }
}
