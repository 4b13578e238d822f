use std::fmt;

use pdf_cache::global_string_pool;

use super::GreenNode;

impl GreenNode {
    /// Render the subtree as an indented debug listing, one node per line,
    /// with offsets relative to this node.
    ///
    /// ```text
    /// ArrayExpression@0..4
    ///   OpenBracket@0..1 "["
    ///   NumericLiteral@1..4 "12"
    ///     trailing WhitespaceTrivia@3..4 " "
    ///   <missing>
    /// ```
    pub fn dump(&self) -> Result<String, fmt::Error> {
        let mut out = global_string_pool().rent();
        self.write_dump(&mut *out)?;
        Ok(out.as_str().to_owned())
    }

    /// Write the [`dump`](Self::dump) listing to `out`.
    pub fn write_dump(&self, out: &mut impl fmt::Write) -> fmt::Result {
        dump_node(self, out, 0, 0, "")
    }
}

fn dump_node(
    node: &GreenNode,
    out: &mut impl fmt::Write,
    depth: usize,
    offset: u32,
    label: &str,
) -> fmt::Result {
    let indent = depth * 2;
    write!(
        out,
        "{:indent$}{label}{}@{}..{}",
        "",
        node.kind(),
        offset,
        offset + node.full_width()
    )?;
    match node {
        GreenNode::Token(token) => {
            write!(out, " \"{}\"", token.text().escape_ascii())?;
            for diagnostic in token.diagnostics() {
                write!(out, " [{}]", diagnostic.code())?;
            }
            writeln!(out)?;
            if let Some(leading) = token.leading_trivia() {
                dump_node(leading, out, depth + 1, offset, "leading ")?;
            }
            if let Some(trailing) = token.trailing_trivia() {
                let at = offset + token.full_width() - token.trailing_trivia_width();
                dump_node(trailing, out, depth + 1, at, "trailing ")?;
            }
        }
        GreenNode::Trivia(trivia) => {
            writeln!(out, " \"{}\"", trivia.text().escape_ascii())?;
        }
        GreenNode::Composite(_) | GreenNode::List(_) => {
            writeln!(out)?;
            for i in 0..node.slot_count() {
                match node.slot(i) {
                    Some(child) => {
                        dump_node(child, out, depth + 1, offset + node.slot_offset(i), "")?;
                    }
                    None => writeln!(out, "{:width$}<missing>", "", width = indent + 2)?,
                }
            }
        }
    }
    Ok(())
}
