//! Parse-and-print pass over generated TypeScript.
//!
//! Rendering decides *what* is emitted; this pass parses the result and prints
//! it back in one canonical layout. Text that does not parse is an error, so a
//! broken template never reaches a caller.

use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{Result, ThemeError};

/// Parses `text` as a TypeScript module and re-emits it.
pub fn format_source(text: &str) -> Result<String> {
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, text, SourceType::ts()).parse();
    if parsed.panicked || !parsed.errors.is_empty() {
        let message = parsed
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ThemeError::Syntax(message));
    }

    let options = CodegenOptions {
        single_quote: true,
        ..CodegenOptions::default()
    };
    let code = Codegen::new().with_options(options).build(&parsed.program).code;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reprints_module() {
        let raw = "\n\nconst a   = {\n\n  b: \"x\",\n\n}\nexport default a\n";
        let out = format_source(raw).unwrap();
        assert!(out.contains("b: 'x'"));
        assert!(out.contains("export default a;"));
        assert!(!out.contains("\n\n\n"));
    }

    #[test]
    fn test_output_parses_again() {
        let once = format_source("const re = /^a-(b|c)$/\nexport default () => re.test('a-b')\n").unwrap();
        assert!(once.contains("/^a-(b|c)$/"));
        assert!(format_source(&once).is_ok());
    }

    #[test]
    fn test_invalid_typescript_is_rejected() {
        for broken in ["export default {", "const = 1", "const a: = 2"] {
            assert!(
                matches!(format_source(broken), Err(ThemeError::Syntax(_))),
                "{broken:?}"
            );
        }
    }
}
