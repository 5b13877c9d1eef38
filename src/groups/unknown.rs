/// The fallback of last resort: a token even plain text cannot carry.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnknownGroup {
    /// The raw token
    pub text: String,
}

impl UnknownGroup {
    pub(crate) fn new(token: &str) -> Self {
        UnknownGroup {
            text: token.to_string(),
        }
    }
}
