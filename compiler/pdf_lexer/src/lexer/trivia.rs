use std::sync::OnceLock;

use pdf_cache::{ArrayBuilder, ObjectPool, PoolConfig};
use pdf_lexer_core::char_class;
use pdf_syntax::{GreenNode, SyntaxKind};

use super::Lexer;

/// Scratch lists for trivia pieces; most runs have one or two.
fn piece_pool() -> &'static ObjectPool<ArrayBuilder<GreenNode>> {
    static POOL: OnceLock<ObjectPool<ArrayBuilder<GreenNode>>> = OnceLock::new();
    POOL.get_or_init(|| ObjectPool::new(PoolConfig::new(32, 4, 64)))
}

impl Lexer<'_> {
    /// Scan a run of trivia pieces. Trailing trivia stops after (and
    /// includes) the first end of line; leading trivia takes everything.
    pub(super) fn scan_trivia(&mut self, trailing: bool) -> Option<GreenNode> {
        let mut pieces = piece_pool().rent();
        while let Some(b) = self.window.peek(0) {
            let kind = match b {
                b'%' => SyntaxKind::SingleLineCommentTrivia,
                b if char_class::is_whitespace(b) => SyntaxKind::WhitespaceTrivia,
                b if char_class::is_end_of_line(b) => SyntaxKind::EndOfLineTrivia,
                _ => break,
            };

            self.window.start_lexeme();
            match kind {
                SyntaxKind::WhitespaceTrivia => {
                    self.window.advance_while(char_class::is_whitespace);
                }
                SyntaxKind::EndOfLineTrivia => {
                    // CR LF is one end of line.
                    if self.window.try_advance(b'\r') {
                        self.window.try_advance(b'\n');
                    } else {
                        self.window.advance(1);
                    }
                }
                SyntaxKind::SingleLineCommentTrivia => {
                    self.window.advance(1);
                    self.window.advance_to_line_end();
                }
                _ => unreachable!("{kind} is not trivia"),
            }

            let cacheable = self.window.lexeme_width() <= self.options.max_cached_token_width;
            let text = self.window.lexeme_bytes();
            pieces.push(self.cache.trivia(kind, text, cacheable));
            self.window.stop_lexeme();

            if trailing && kind == SyntaxKind::EndOfLineTrivia {
                break;
            }
        }
        GreenNode::from_trivia(pieces.iter().cloned())
    }
}
