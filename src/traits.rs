use chumsky::prelude::*;

/// A value with a whole-token grammar.
///
/// Group decoders implement this to describe the shape of one
/// whitespace-delimited token; [`TokenParse::parse_token`] anchors the
/// grammar to the complete token, so partial matches never succeed.
pub(crate) trait TokenParse: Sized {
    /// The grammar for a token of this form.
    fn parser<'src>() -> impl Parser<'src, &'src str, Self, extra::Default>;

    /// Runs the grammar against a complete token.
    fn parse_token(token: &str) -> Option<Self> {
        Self::parser()
            .then_ignore(end())
            .parse(token)
            .into_result()
            .ok()
    }
}
