use super::*;
use crate::TokenValue;
use pdf_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

fn bytes(s: &str) -> Arc<[u8]> {
    Arc::from(s.as_bytes())
}

fn trivia(kind: SyntaxKind, text: &str) -> GreenNode {
    GreenTrivia::new(kind, bytes(text)).into()
}

fn ws(text: &str) -> GreenNode {
    trivia(SyntaxKind::WhitespaceTrivia, text)
}

fn token(kind: SyntaxKind, text: &str, leading: &str, trailing: &str) -> GreenToken {
    let leading = (!leading.is_empty()).then(|| ws(leading));
    let trailing = (!trailing.is_empty()).then(|| ws(trailing));
    GreenToken::new(kind, bytes(text), TokenValue::None, leading, trailing)
}

// === Widths ===

#[test]
fn token_full_width_is_leading_plus_text_plus_trailing() {
    let t = token(SyntaxKind::ObjKeyword, "obj", "  ", " ");
    assert_eq!(t.leading_trivia_width(), 2);
    assert_eq!(t.width(), 3);
    assert_eq!(t.trailing_trivia_width(), 1);
    assert_eq!(t.full_width(), 6);

    let node = GreenNode::from(t);
    assert_eq!(node.full_width(), 6);
    assert_eq!(node.width(), 3);
}

#[test]
fn composite_width_is_sum_of_children() {
    let open = token(SyntaxKind::OpenBracket, "[", " ", "");
    let num = token(SyntaxKind::NumericLiteral, "12", "", " ");
    let close = token(SyntaxKind::CloseBracket, "]", "", "\t");
    let node: GreenNode = GreenComposite::new(
        SyntaxKind::ArrayExpression,
        [Some(open.into()), Some(num.into()), Some(close.into())],
    )
    .into();
    assert_eq!(node.full_width(), 2 + 3 + 2);
    assert_eq!(node.leading_trivia_width(), 1);
    assert_eq!(node.trailing_trivia_width(), 1);
    assert_eq!(node.width(), 5);
    assert_eq!(node.slot_count(), 3);
    assert_eq!(node.slot_offset(0), 0);
    assert_eq!(node.slot_offset(1), 2);
    assert_eq!(node.slot_offset(2), 5);
}

#[test]
fn missing_slots_count_as_zero_width() {
    let open = token(SyntaxKind::OpenBracket, "[", "", "");
    let node: GreenNode =
        GreenComposite::new(SyntaxKind::ArrayExpression, [Some(open.into()), None]).into();
    assert_eq!(node.full_width(), 1);
    assert_eq!(node.slot(1), None);
    assert_eq!(node.slot_offset(2), 1);
    assert!(node.flags().contains(NodeFlags::IS_MISSING));
}

// === Trivia ===

#[test]
fn from_trivia_shapes() {
    assert_eq!(GreenNode::from_trivia(Vec::new()), None);

    let single = GreenNode::from_trivia(vec![ws(" ")]);
    assert!(single.as_ref().is_some_and(GreenNode::is_trivia));

    let list = GreenNode::from_trivia(vec![
        ws(" "),
        trivia(SyntaxKind::EndOfLineTrivia, "\r\n"),
    ]);
    let list = list.unwrap_or_else(|| panic!("expected a list"));
    assert!(list.is_list());
    assert_eq!(list.kind(), SyntaxKind::List);
    assert_eq!(list.full_width(), 3);
    assert_eq!(list.leading_trivia_width(), 0);
    assert_eq!(list.slot_offset(1), 1);
}

// === Diagnostics ===

#[test]
fn empty_diagnostics_are_no_diagnostics() {
    let t = token(SyntaxKind::BadToken, ")", "", "");
    let same = t.with_diagnostics(&[]);
    assert!(!same.has_diagnostics());
    assert!(same.diagnostics().is_empty());
    assert_eq!(same, t);
    assert!(same.flags().contains(NodeFlags::IS_CACHEABLE));
}

#[test]
fn diagnostics_are_copy_on_write() {
    let t = token(SyntaxKind::BadToken, ")", "", "");
    let d = SyntaxDiagnosticInfo::new(ErrorCode::E0009, 0, 1).with_arg(b')');
    let with = t.with_diagnostics(std::slice::from_ref(&d));
    assert!(!t.has_diagnostics());
    assert_eq!(with.diagnostics(), &[d]);
    assert!(!with.flags().contains(NodeFlags::IS_CACHEABLE));
    assert!(with.flags().contains(NodeFlags::CONTAINS_DIAGNOSTICS));
}

#[test]
fn flags_propagate_to_parents() {
    let d = SyntaxDiagnosticInfo::new(ErrorCode::E0008, 0, 3);
    let bad = token(SyntaxKind::UnknownKeyword, "foo", " ", "").with_diagnostics(&[d]);
    let list: GreenNode = GreenList::new([GreenNode::from(bad)]).into();
    assert!(list.contains_diagnostics());
    assert!(list.flags().contains(NodeFlags::CONTAINS_TRIVIA));
    assert!(!list.flags().contains(NodeFlags::IS_CACHEABLE));
}

// === Values ===

#[test]
fn numeric_accessors() {
    let int = GreenToken::new(
        SyntaxKind::NumericLiteral,
        bytes("42"),
        TokenValue::Integer(42),
        None,
        None,
    );
    assert_eq!(int.integer_value(), 42);
    assert!((int.real_value() - 42.0).abs() < f64::EPSILON);

    let real = GreenToken::new(
        SyntaxKind::NumericLiteral,
        bytes("2147483648"),
        TokenValue::Real(2_147_483_648.0),
        None,
        None,
    );
    assert_eq!(real.integer_value(), 0);
    assert!((real.real_value() - 2_147_483_648.0).abs() < f64::EPSILON);
}

// === Text ===

#[test]
fn write_to_round_trips() {
    let a = token(SyntaxKind::NumericLiteral, "1", " ", " ");
    let b = token(SyntaxKind::RKeyword, "R", "", "  ");
    let node: GreenNode =
        GreenComposite::new(SyntaxKind::IndirectReference, [Some(a.into()), None, Some(b.into())])
            .into();
    assert_eq!(node.to_full_bytes(), b" 1 R  ".to_vec());
    assert_eq!(node.to_bytes(), b"1 R".to_vec());
}

#[test]
fn dump_lists_every_node() {
    let open = token(SyntaxKind::OpenBracket, "[", "", "");
    let num = token(SyntaxKind::NumericLiteral, "12", "", " ");
    let node: GreenNode = GreenComposite::new(
        SyntaxKind::ArrayExpression,
        [Some(open.into()), Some(num.into()), None],
    )
    .into();
    let expected = "\
ArrayExpression@0..4
  OpenBracket@0..1 \"[\"
  NumericLiteral@1..4 \"12\"
    trailing WhitespaceTrivia@3..4 \" \"
  <missing>
";
    assert_eq!(node.dump().unwrap_or_else(|e| panic!("{e}")), expected);

    let mut short = Bounded(10);
    assert!(node.write_dump(&mut short).is_err());
}

/// A writer that fails once it has taken `.0` more bytes.
struct Bounded(usize);

impl std::fmt::Write for Bounded {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.0 = self.0.checked_sub(s.len()).ok_or(std::fmt::Error)?;
        Ok(())
    }
}

// === Kind checks ===

#[test]
#[should_panic(expected = "WhitespaceTrivia is not a token kind")]
fn token_rejects_a_trivia_kind() {
    let _ = GreenToken::new(
        SyntaxKind::WhitespaceTrivia,
        bytes("true"),
        TokenValue::Bool(true),
        None,
        None,
    );
}

#[test]
#[should_panic(expected = "NumericLiteral is not a trivia kind")]
fn trivia_rejects_a_token_kind() {
    let _ = GreenTrivia::new(SyntaxKind::NumericLiteral, bytes("1"));
}

#[test]
#[should_panic(expected = "NameLiteral is not a composite node kind")]
fn composite_rejects_a_token_kind() {
    let _ = GreenComposite::new(SyntaxKind::NameLiteral, [None]);
}
