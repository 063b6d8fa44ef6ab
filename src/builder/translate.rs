//! Translation template splitting.
//!
//! Templates use `%s` (sequential) and `%N$s` (1-based explicit index)
//! placeholders. Splitting is a pure function over the template; the builder
//! turns the resulting [`Segment`]s into nodes.
//!
//! Placeholder rules:
//! - `%` followed by a digit `d` refers to argument `d - 1`; `%0` is out of range
//! - `%` followed by anything else takes the next auto index. Only such
//!   placeholders advance the auto counter, explicit ones never do
//! - a placeholder spans two characters, or four when its third character is `$`
//! - a `%` at the very end of the template is literal text

/// One piece of a split template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Template text between placeholders
    Literal(&'a str),
    /// Zero-based index into the substitution list
    Argument(usize),
}

/// Split `template` into literal and argument segments.
///
/// Returns `None` as soon as a placeholder refers past `arg_count`, no
/// matter how many valid placeholders came before.
///
/// Literal text between two placeholders is emitted even when empty; only a
/// placeholder at the very start of the template has no leading literal.
pub fn split_template(template: &str, arg_count: usize) -> Option<Vec<Segment<'_>>> {
    let chars: Vec<(usize, char)> = template.char_indices().collect();
    let byte_offset = |char_index: usize| {
        chars
            .get(char_index)
            .map_or(template.len(), |(offset, _)| *offset)
    };

    let mut segments = Vec::new();
    let mut append_from = 0;
    let mut auto_index = 0;
    let mut i = 0;

    while i < chars.len() {
        if chars[i].1 != '%' || i + 1 >= chars.len() {
            i += 1;
            continue;
        }

        let index = match chars[i + 1].1.to_digit(10) {
            Some(digit) => (digit as usize).checked_sub(1),
            None => {
                auto_index += 1;
                Some(auto_index - 1)
            }
        };

        let index = index.filter(|index| *index < arg_count)?;

        if i != 0 {
            segments.push(Segment::Literal(
                &template[byte_offset(append_from)..byte_offset(i)],
            ));
        }

        let width = if chars.get(i + 2).is_some_and(|(_, c)| *c == '$') { 4 } else { 2 };
        append_from = (i + width).min(chars.len());
        segments.push(Segment::Argument(index));
        i = append_from;
    }

    if append_from < chars.len() {
        segments.push(Segment::Literal(&template[byte_offset(append_from)..]));
    }

    Some(segments)
}
