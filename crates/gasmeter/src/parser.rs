//! Parser adapter (component A): wraps an external ECMAScript parser and
//! converts its span representation into the byte-offset data model the
//! rest of this crate works in (spec.md §3, §4.1).

use swc_common::sync::Lrc;
use swc_common::{BytePos, FileName, SourceMap, Span, Spanned};
use swc_ecma_ast::{EsVersion, Script};
use swc_ecma_parser::lexer::Lexer;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax};

use crate::error::ParseError;
use crate::position::line_col;

/// A parsed script, together with the information needed to convert any
/// span it produced back into a `[start, end)` byte range of the original
/// source.
///
/// `swc_common::Span` positions are global offsets into a shared
/// [`SourceMap`], not offsets into `source` itself — subtracting `base`
/// from a span's `lo`/`hi` recovers the offsets spec.md's data model (§3)
/// requires. Every other component (walker, classifier, store, emitter)
/// works exclusively in those `usize` offsets and never touches
/// `swc_common::Span` directly.
pub struct ParsedScript {
    pub script: Script,
    source: String,
    base: BytePos,
}

impl ParsedScript {
    /// Converts a span into a half-open `[start, end)` byte range into the
    /// original source.
    #[must_use]
    pub fn range(&self, span: Span) -> (usize, usize) {
        let start = (span.lo.0.saturating_sub(self.base.0)) as usize;
        let end = (span.hi.0.saturating_sub(self.base.0)) as usize;
        (start, end)
    }

    /// Convenience wrapper around [`ParsedScript::range`] for any spanned
    /// AST node.
    #[must_use]
    pub fn range_of<T: Spanned>(&self, node: &T) -> (usize, usize) {
        self.range(node.span())
    }

    /// 1-based `(line, column)` for a byte offset into the original
    /// source, used for diagnostics (e.g. [`crate::error::ReservedIdentifierError`]).
    #[must_use]
    pub fn line_col(&self, byte_offset: usize) -> (usize, usize) {
        line_col(&self.source, byte_offset)
    }
}

/// Parses `source` as an ECMAScript-2016 script (script mode, not module
/// mode — spec.md §4.1). A syntactically invalid input fails with
/// [`ParseError`] carrying the parser's line/column; no instrumentation is
/// attempted on a parse failure (spec.md §7).
pub fn parse_script(source: &str) -> Result<ParsedScript, ParseError> {
    let owned = source.to_owned();
    let cm: Lrc<SourceMap> = Lrc::default();
    let fm = cm.new_source_file(Lrc::new(FileName::Anon), owned.clone());
    let base = fm.start_pos;

    let lexer = Lexer::new(
        Syntax::Es(EsSyntax::default()),
        EsVersion::Es2016,
        StringInput::from(&*fm),
        None,
    );
    let mut parser = Parser::new_from(lexer);

    parser
        .parse_script()
        .map(|script| ParsedScript { script, source: owned, base })
        .map_err(|err| {
            let span = err.span();
            let offset = span.lo.0.saturating_sub(base.0) as usize;
            let (line, column) = line_col(source, offset);
            ParseError { line, column, message: format!("{:?}", err.into_kind()) }
        })
}
