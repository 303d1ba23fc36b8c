use crate::core::Token;

/// Maximum `|head_index - index|` over non-punctuation tokens.
///
/// Punctuation contributes 0, so a punctuation-only or empty sentence yields 0.
pub fn max_dependency_distance(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .filter(|token| !token.pos.is_punctuation())
        .map(Token::dependency_distance)
        .max()
        .unwrap_or(0)
}

/// T-Scan correction: distances above 3 are reduced by 2.
pub fn apply_long_dependency_adjustment(max_dep: usize) -> usize {
    if max_dep > 3 {
        max_dep - 2
    } else {
        max_dep
    }
}
