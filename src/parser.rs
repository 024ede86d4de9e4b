//! State-machine recursive-descent parser for JSON-Lite text.
//!
//! One routine serves the outermost object and every nested value: the
//! scanner cursor is threaded through recursive calls, so when a nested
//! [`parse_object`] returns, the cursor already sits just past that
//! object's closing `}` and the enclosing scan resumes in place.

use crate::error::{ParseError, ParseResult};
use crate::object::Object;
use crate::scanner::Scanner;

/// Where the parser stands inside the current object.
///
/// One explicit state per structural position, so every input character
/// class has a defined transition or a defined violation. The pending key
/// lives inside the states that need it and nowhere else.
#[derive(Debug)]
enum MemberState {
    /// Just after `{` or a separating `,`: a key or the close may follow.
    AwaitingMember,
    /// A key has closed; the member's `:` must follow.
    AwaitingColon {
        /// The key waiting for its colon.
        key: String,
    },
    /// The `:` is consumed; the member's value must follow.
    AwaitingValue {
        /// The key waiting for its value.
        key: String,
    },
    /// A value is written; only `,`, `}` or spaces may follow.
    AwaitingSeparatorOrClose,
}

/// Parse one JSON-Lite object out of `text`.
///
/// The entire input must be a single object; leading and trailing spaces
/// are allowed, anything else around it is rejected. On failure the
/// classified error describes the first violation and no partial object is
/// returned.
///
/// Recursion depth equals the nesting depth of the input. No depth limit
/// is imposed, so call-stack size is the practical bound on pathologically
/// deep documents.
pub fn parse(text: &str) -> ParseResult<Object> {
    let mut scan = Scanner::new(text);
    scan.skip_spaces();
    match scan.peek() {
        None => Err(ParseError::InvalidInput),
        Some(b'{') => {
            let root = parse_object(&mut scan)?;
            scan.skip_spaces();
            match scan.peek() {
                None => Ok(root),
                Some(_) => Err(ParseError::InvalidCharacterAfterValue(scan.position())),
            }
        }
        Some(_) => Err(ParseError::IllegalBeginning(scan.position())),
    }
}

/// Parse the object starting at the cursor's `{`, consuming through its
/// matching `}`.
fn parse_object(scan: &mut Scanner<'_>) -> ParseResult<Object> {
    let open = scan.position();
    scan.advance();

    let mut object = Object::new();
    let mut state = MemberState::AwaitingMember;

    loop {
        let at = scan.position();
        let byte = match scan.peek() {
            None => return Err(ParseError::IncompleteSchema(open)),
            Some(byte) => byte,
        };

        state = match state {
            MemberState::AwaitingMember => match byte {
                b' ' => {
                    scan.advance();
                    MemberState::AwaitingMember
                }
                b'"' => MemberState::AwaitingColon {
                    key: scan.read_quoted()?.to_string(),
                },
                b'}' => {
                    scan.advance();
                    return Ok(object);
                }
                b',' => {
                    // A comma right after the `{` means the member list
                    // began illegally; after a member it is a stray
                    // separator.
                    return Err(if object.is_empty() {
                        ParseError::IllegalBeginning(at)
                    } else {
                        ParseError::InvalidCharacterAfterValue(at)
                    });
                }
                _ => return Err(ParseError::MissingKey(at)),
            },
            MemberState::AwaitingColon { key } => match byte {
                b' ' => {
                    scan.advance();
                    MemberState::AwaitingColon { key }
                }
                b':' => {
                    scan.advance();
                    MemberState::AwaitingValue { key }
                }
                _ => return Err(ParseError::InvalidCharacterAfterKey(at)),
            },
            MemberState::AwaitingValue { key } => match byte {
                b' ' => {
                    scan.advance();
                    MemberState::AwaitingValue { key }
                }
                b'"' => {
                    let value = scan.read_quoted()?.to_string();
                    object.set_string(key, value);
                    MemberState::AwaitingSeparatorOrClose
                }
                b'{' => {
                    let nested = parse_object(scan)?;
                    object.set_object(key, nested);
                    MemberState::AwaitingSeparatorOrClose
                }
                b':' => return Err(ParseError::DuplicateColon(at)),
                _ => return Err(ParseError::InvalidCharacterAfterKey(at)),
            },
            MemberState::AwaitingSeparatorOrClose => match byte {
                b' ' => {
                    scan.advance();
                    MemberState::AwaitingSeparatorOrClose
                }
                b',' => {
                    scan.advance();
                    MemberState::AwaitingMember
                }
                b'}' => {
                    scan.advance();
                    return Ok(object);
                }
                _ => return Err(ParseError::InvalidCharacterAfterValue(at)),
            },
        };
    }
}
