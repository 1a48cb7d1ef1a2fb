//! Code builder utility for generating properly indented source text.

/// Fluent buffer for building generated source with 4-space indentation.
///
/// An explicit value constructed per render call; there is no shared
/// template registry or other global state.
///
/// # Example
///
/// ```
/// use sqbind_codegen::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .line("fn main() {")
///     .indent()
///     .line("println!(\"Hello, world!\");")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "fn main() {\n    println!(\"Hello, world!\");\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

const INDENT: &str = "    ";

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add a doc comment line (`/// text`).
    pub fn doc(self, text: &str) -> Self {
        self.line(&format!("/// {}", text))
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add an indented block between a header and a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use sqbind_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::new()
    ///     .block("impl Foo {", "}", |b| b.line("fn bar(&self) {}"))
    ///     .build();
    /// ```
    pub fn block<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::new().line("let x = 1;").build();
        assert_eq!(code, "let x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::new()
            .line("fn main() {")
            .indent()
            .line("println!(\"Hello\");")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "fn main() {\n    println!(\"Hello\");\n}\n");
    }

    #[test]
    fn test_block() {
        let code = CodeBuilder::new()
            .block("impl Foo {", "}", |b| b.line("fn bar(&self) {}"))
            .build();

        assert_eq!(code, "impl Foo {\n    fn bar(&self) {}\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::new()
            .line("use std::io;")
            .blank()
            .line("fn main() {}")
            .build();

        assert_eq!(code, "use std::io;\n\nfn main() {}\n");
    }

    #[test]
    fn test_doc_comment() {
        let code = CodeBuilder::new().doc("A test function").line("fn test() {}").build();
        assert_eq!(code, "/// A test function\nfn test() {}\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::new()
            .line("enum Color {")
            .indent()
            .each(["Red", "Green", "Blue"], |b, color| b.line(&format!("{},", color)))
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "enum Color {\n    Red,\n    Green,\n    Blue,\n}\n");
    }
}
